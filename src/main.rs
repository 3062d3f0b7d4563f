// src/main.rs

use taskord::errors::TaskordError;
use taskord::{cli, logging, run};

fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("taskord error: {err:?}");
        std::process::exit(1);
    }

    match run(args) {
        Ok(()) => {}
        // Odd line count is a user-facing condition, not a program failure:
        // report it on stderr and return without printing any ordering.
        Err(err @ TaskordError::MalformedInput { .. }) => {
            eprintln!("taskord: {err}");
        }
        Err(err) => {
            eprintln!("taskord error: {err:?}");
            std::process::exit(1);
        }
    }
}
