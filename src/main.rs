//! CLI entry point for the backtracking tile map generator

use backtile::io::cli::{Cli, Session, init_logging};
use clap::Parser;

fn main() -> backtile::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    let session = Session::new(cli);
    session.run()
}
