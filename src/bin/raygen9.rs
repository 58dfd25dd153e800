use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use omaha_ranks::RaygenError;

#[derive(Debug, Parser)]
#[clap(about = "Generate the Omaha 7/8/9-card hand-rank table")]
struct Cli {
    /// Output path for the generated table.
    output: PathBuf,
    /// Reference 7-card table; enables the exhaustive cross-check.
    #[clap(long)]
    reference7: Option<PathBuf>,
    /// Write the table without cross-checking it.
    #[clap(long)]
    no_verify: bool,
    /// Worker threads for the cross-check; 0 uses every core.
    #[clap(long, default_value_t = 0)]
    threads: usize,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let threads = if cli.threads == 0 {
        std::thread::available_parallelism().map_or(1, |n| n.get())
    } else {
        cli.threads
    };

    match omaha_ranks::raygen9(
        &cli.output,
        cli.reference7.as_deref(),
        !cli.no_verify,
        threads,
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RaygenError::Verify(error)) => {
            error!("{error}");
            ExitCode::FAILURE
        }
        Err(RaygenError::Io(error)) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}
