mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::SweepError;

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    // a second init (tests, embedding) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .try_init();
}

/// # Errors
/// Whatever the selected command fails with.
pub fn run() -> Result<(), SweepError> {
    let cli = parse::Cli::parse();
    init_logging(cli.debug);
    match cli.cmd {
        parse::Command::Range(a) => handlers::range(&a),
        parse::Command::Probe(a) => handlers::probe(&a),
        parse::Command::Demo(a) => handlers::demo(&a),
        parse::Command::Charts => {
            handlers::charts();
            Ok(())
        }
    }
}
