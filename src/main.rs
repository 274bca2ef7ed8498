//! CLI entry point for rendering wheel-and-chain animations

use clap::Parser;
use wheelchain::io::cli::{Cli, Runner};

fn main() -> wheelchain::Result<()> {
    let cli = Cli::parse();
    wheelchain::init_logging(cli.verbose, cli.quiet);
    let mut runner = Runner::new(cli)?;
    runner.run().map(|_| ())
}
