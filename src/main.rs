//! CLI binary for `tasklist`.
//!
//! This binary is a thin wrapper that parses arguments and delegates to the library.

use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tasklist::cli::{self, Cli, Command};
use tasklist::config::{Config, CONFIG_FILE_PATH};

fn main() -> ExitCode {
    let args = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error reading {CONFIG_FILE_PATH}: {e}");
            return ExitCode::from(1);
        }
    };
    tasklist::logging::init(config.log_level());

    // Only the menu reads the terminal; one-shot commands never block on stdin.
    let interactive = args.command.as_ref().map_or(true, Command::is_interactive);
    let mut input: Box<dyn BufRead> =
        if interactive { Box::new(io::stdin().lock()) } else { Box::new(io::empty()) };
    let mut output = io::stdout().lock();
    let result = cli::run(args, &config, Path::new("."), &mut input, &mut output);
    drop(output);

    for msg in result.stdout {
        println!("{msg}");
    }
    for msg in result.stderr {
        eprintln!("{msg}");
    }

    result.exit_code
}
