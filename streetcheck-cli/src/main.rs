//! streetcheck binary entry point

use std::process;

use clap::Parser;

use streetcheck_cli::app;
use streetcheck_cli::args::CliArgs;

fn main() {
    let args = CliArgs::parse();
    if let Err(error) = args.init_logging() {
        eprintln!("Error: {error:#}");
        process::exit(2);
    }

    match app::run(&args) {
        Ok(code) => process::exit(code),
        Err(error) => {
            eprintln!("Error: {error:#}");
            process::exit(2);
        }
    }
}
