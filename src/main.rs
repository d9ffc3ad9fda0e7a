#![deny(clippy::all)]
use anyhow::Result;
use booru_mock_data::DatasetBuilder;
use clap::Parser;
use colored::Colorize;
use log::info;

use crate::cli::Cli;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::builder().format_timestamp(None).init();

    let config = args.sampler_config();
    let builder = DatasetBuilder::new(config)?;

    info!("Fetching posts from {}", builder.config().base_url);
    println!(
        "{} {} {}",
        "Sampling".bold(),
        builder.config().target_count.to_string().bold().blue(),
        "posts".bold()
    );

    let summary = builder.run().await?;
    summary.print();

    Ok(())
}
