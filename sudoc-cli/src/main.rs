#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]

use std::process;

mod app;
mod front;
mod interact;

use front::{Frontend, OneShot, Prompt};

use clap::Parser;
use log::trace;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err}");
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        isbn,
        json,
        verbosity,
    } = Cli::parse();

    setup_errlog(usize::from(verbosity))?;

    let mut front: Box<dyn Frontend> = match isbn {
        Some(isbn) => Box::new(OneShot::new(isbn, json)),
        None => {
            trace!("No ISBN argument given, starting an interactive session");
            Box::new(Prompt)
        }
    };

    app::run(front.as_mut())
}

fn setup_errlog(verbosity: usize) -> eyre::Result<()> {
    stderrlog::new().verbosity(verbosity + 2).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "sudoc")]
#[clap(about = "Look up the bibliographic metadata of an ISBN in the Sudoc union catalogue")]
#[clap(version, author)]
struct Cli {
    /// The ISBN of the edition to look up
    ///
    /// When omitted the program prompts for ISBNs until an empty line is
    /// entered. The ISBN is passed to the catalogue as given, without
    /// validation.
    isbn: Option<String>,

    /// Print a found record as JSON instead of labelled lines
    #[clap(short, long, requires = "isbn")]
    json: bool,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,
}
