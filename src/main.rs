use clap::Parser;

use dirsift::cli::Cli;
use dirsift::commands::run_find;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_find(&cli));
}
