use clap::Parser;

use docsift::cli::{Cli, output};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
