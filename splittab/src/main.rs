#![warn(clippy::uninlined_format_args)]

mod console;
mod menu;

use std::{io, process};

use console::StdConsole;
use menu::MenuSession;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut session = MenuSession::new(StdConsole);
    if let Err(err) = session.run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
