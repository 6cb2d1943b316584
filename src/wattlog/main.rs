use clap::Parser;
use std::io;
use wattlog::api::ApplianceApi;

mod cli;
use cli::args::Cli;
use cli::session::Session;

fn main() {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), ApplianceApi::new());

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
