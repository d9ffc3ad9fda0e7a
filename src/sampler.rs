//! Random post ID selection.
use ahash::AHashSet;
use log::debug;
use rand::Rng;

/// Draws `count` unique IDs uniformly from `[min, max]`.
///
/// Candidates are drawn until the set is full, so the caller must make sure the range
/// holds at least `count` values (see [`SamplerConfig::validate`](crate::SamplerConfig::validate)).
/// The returned order carries no meaning.
pub fn sample_post_ids<R: Rng + ?Sized>(rng: &mut R, count: usize, min: u64, max: u64) -> Vec<u64> {
    let mut ids: AHashSet<u64> = AHashSet::with_capacity(count);
    let mut draws: u64 = 0;

    while ids.len() < count {
        ids.insert(rng.gen_range(min..=max));
        draws += 1;
    }

    debug!("Sampled {} post IDs in {} draws", ids.len(), draws);
    ids.into_iter().collect()
}
