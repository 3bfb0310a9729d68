//! sdm: StarDict lookup binary.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use sdict::cli::{self, SdmArgs};

fn main() {
    let args = SdmArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = cli::execute(&args, stdin.lock(), &mut stdout.lock(), &mut stderr.lock());
    if let Err(e) = result {
        eprintln!("sdm: {}", e);
        if let Some(source) = std::error::Error::source(&e) {
            eprintln!("  caused by: {}", source);
        }
        process::exit(1);
    }
}
