pub mod cli;
pub mod error;
pub mod progress;
pub mod taxon;
pub mod vernacular;

use clap::Parser;
use cli::Cli;
use error::Result;
use log::{error, info};
use progress::ConsoleProgress;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .expect("Failed to initialize logger");

    let cli = Cli::parse();
    info!("Using {} as source directory", cli.source_dir.display());

    let start_time = Instant::now();

    info!("Processing taxon table...");
    let progress = &mut ConsoleProgress::new("Cleaning taxon names");
    let taxon_summary = match taxon::clean_taxon_names(&cli.source_dir, progress) {
        Ok(summary) => {
            progress.finish();
            summary
        }
        Err(e) => {
            progress.finish();
            error!("Taxon table processing failed: {}", e);
            return Err(e);
        }
    };
    info!("Done. Processed {} rows", taxon_summary.rows_processed);

    info!("Processing vernacular names...");
    let progress = &mut ConsoleProgress::new("Filtering vernacular names");
    let vernacular_summary = match vernacular::filter_vernacular_names(&cli.source_dir, progress) {
        Ok(summary) => {
            progress.finish();
            summary
        }
        Err(e) => {
            progress.finish();
            error!("Vernacular name processing failed: {}", e);
            return Err(e);
        }
    };
    info!(
        "Done. Processed {} rows. Kept {} rows",
        vernacular_summary.rows_processed, vernacular_summary.rows_kept
    );

    let duration = start_time.elapsed();

    println!("\n--- Summary Report ---");
    println!("Taxon rows processed: {}", taxon_summary.rows_processed);
    println!(
        "Vernacular rows processed: {}",
        vernacular_summary.rows_processed
    );
    println!("Vernacular rows kept: {}", vernacular_summary.rows_kept);
    println!(
        "Vernacular rows dropped: {}",
        vernacular_summary.rows_processed - vernacular_summary.rows_kept
    );
    println!("Execution time: {:.2?}", duration);

    println!("\nAll done");

    Ok(())
}
