use clap::CommandFactory;
use tracing::info;
use tracing_subscriber::EnvFilter;

use snipsplit::io::load_snippets;
use snipsplit::{SplitParams, split_loaded};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(enabled: bool) {
    if enabled {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    // A missing input is a usage hint, not a failure
    let Some(json_file) = args.json_file else {
        CliArgs::command().print_help().map_err(AppError::Usage)?;
        return Ok(());
    };

    let params = SplitParams {
        output_dir: args.output_dir,
    };

    println!("Loading JSON file: {}", json_file.display());
    let snippets = load_snippets(&json_file)?;
    println!("Found snippets: {}", snippets.len());

    let report = split_loaded(snippets, &params, |event| println!("{}", event))?;

    println!();
    println!(
        "Done! Files created in directory '{}'",
        params.output_dir.display()
    );
    info!(
        "Created: {}, Errors: {}, Total: {}",
        report.created, report.failed, report.total
    );

    Ok(())
}
