use clap::Parser;

/// The program is fully interactive and takes no operational arguments;
/// clap still provides `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(name = "wattlog", version)]
#[command(about = "Track appliances and estimate their daily energy use", long_about = None)]
pub struct Cli {}
