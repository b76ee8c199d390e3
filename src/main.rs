//! CLI entry point for the random team roller

use clap::Parser;
use teamroll::io::cli::{App, Cli};
use teamroll::io::logging;

fn main() -> teamroll::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    let mut app = App::new(cli)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(stdin.lock(), &mut stdout.lock())
}
