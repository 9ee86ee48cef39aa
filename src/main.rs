use clap::Parser;

use class_doc_guard::cli::Cli;
use class_doc_guard::{logging, runner};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    std::process::exit(runner::run(&cli));
}
