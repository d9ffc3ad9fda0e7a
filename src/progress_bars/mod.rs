use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::{fmt::Write, time::Duration};

const PROGRESS_CHARS: &str = "━━";

const MAIN_TEMPLATE: &str = "{spinner:.green.bold} {elapsed_precise:.bold} {wide_bar:.green/white.dim} {percent:.bold}  {pos:.green} ({msg:.bold.blue} | {posts_sec:.blue} | eta. {eta:.blue})";

/// Bar tracking how many sampled IDs have been looked up.
///
/// The message slot holds the number of posts collected so far.
pub fn sampler_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len).with_style(master_progress_style());
    bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(60));
    bar.enable_steady_tick(Duration::from_millis(100));
    set_collected(&bar, 0);
    bar
}

/// Updates the bar's message with the number of posts collected so far.
pub fn set_collected(bar: &ProgressBar, count: usize) {
    bar.set_message(collected_message(count));
}

pub fn collected_message(count: usize) -> String {
    format!("{} posts", count)
}

pub fn master_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(MAIN_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key("pos", |state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{}/{}", state.pos(), state.len().unwrap_or_default());
        })
        .with_key("percent", |state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{:>3.0}%", state.fraction() * 100_f32);
        })
        .with_key(
            "posts_sec",
            |state: &ProgressState, w: &mut dyn Write| {
                let _ = match state.per_sec() {
                    ids_sec if ids_sec.abs() < f64::EPSILON => write!(w, "0 ids/s"),
                    ids_sec if ids_sec < 1.0 => write!(w, "{:.2} s/id", 1.0 / ids_sec),
                    ids_sec => write!(w, "{:.2} ids/s", ids_sec),
                };
            },
        )
        .progress_chars(PROGRESS_CHARS)
}
