mod cli;

use dygang_links::logging;

use crate::cli::Cli;

fn main() {
    logging::init_logging();

    if let Err(err) = Cli::run_from_args() {
        eprintln!("dygang-links error: {:#}", err);
        std::process::exit(1);
    }
}
