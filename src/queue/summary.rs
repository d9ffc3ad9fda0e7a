use std::path::PathBuf;

use ahash::AHashSet;
use colored::Colorize;

use crate::post::MockPost;

/// Counters of a finished dataset build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Unique IDs drawn by the sampler.
    pub sampled: usize,
    /// Posts written to the dataset file.
    pub written: usize,
    /// IDs whose fetch came back with a non-success status.
    pub skipped: usize,
    /// Distinct tags across all written posts.
    pub unique_tags: usize,
    pub output: PathBuf,
}

impl RunSummary {
    pub fn new(sampled: usize, skipped: usize, posts: &[MockPost], output: PathBuf) -> Self {
        let unique_tags = posts
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect::<AHashSet<&str>>()
            .len();

        Self {
            sampled,
            written: posts.len(),
            skipped,
            unique_tags,
            output,
        }
    }

    pub fn print(&self) {
        println!(
            "{} {} {}",
            self.written.to_string().bold().blue(),
            "posts".bold().blue(),
            "saved".bold()
        );

        println!(
            "{} {} {}",
            self.unique_tags.to_string().bold().green(),
            "unique tags in".bold(),
            self.output.display().to_string().bold().green().underline()
        );

        if self.skipped > 0 {
            println!(
                "{} {}",
                self.skipped.to_string().bold().red(),
                format!("of {} sampled post IDs were not available.", self.sampled)
                    .bold()
                    .red()
            );
        }
    }
}
