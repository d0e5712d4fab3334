use autoslug_core::logging;

mod cli;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging as early as possible; fall back to stderr-only if
    // the requested log file cannot be opened.
    if let Err(err) = logging::init_logging(cli.quiet, cli.verbose, cli.log_file.as_deref()) {
        logging::init_logging_stderr(cli.quiet, cli.verbose);
        tracing::warn!("file logging disabled: {err:#}");
    }

    match cli::run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("autoslug error: {err:#}");
            std::process::exit(1);
        }
    }
}
