//! CLI entry point for the photo collage tool

use clap::Parser;
use koraju::io::cli::{Cli, CollageProcessor};
use koraju::io::logging::{init_logging, log_level};

fn main() -> koraju::Result<()> {
    let cli = Cli::parse();
    init_logging(log_level(cli.verbose, cli.quiet));

    let quiet = cli.quiet;
    let mut processor = CollageProcessor::new(cli);
    let written = processor.process()?;

    // Allow print for user feedback on where the collage went
    #[allow(clippy::print_stderr)]
    if !quiet {
        match written {
            Some(path) => eprintln!("Collage saved to {}", path.display()),
            None => eprintln!("No images to compose"),
        }
    }
    Ok(())
}
