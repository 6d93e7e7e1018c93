use eyre::eyre;
use sudoc::Lookup;

use crate::interact;

/// A presentation shell over the lookup pipeline.
///
/// Shells own the "collect an ISBN, display the outcome" surface so the
/// pipeline itself stays independent of how a user drives it.
pub trait Frontend {
    /// The next ISBN to look up, or `None` when the session is over.
    fn next_isbn(&mut self) -> eyre::Result<Option<String>>;

    /// Shows the outcome of one lookup.
    fn show(&mut self, outcome: &Lookup) -> eyre::Result<()>;
}

/// Looks up the single ISBN taken from the command line.
pub struct OneShot {
    isbn: Option<String>,
    json: bool,
}

impl OneShot {
    #[allow(clippy::missing_const_for_fn)] // can't be const
    pub fn new(isbn: String, json: bool) -> Self {
        Self {
            isbn: Some(isbn),
            json,
        }
    }
}

impl Frontend for OneShot {
    fn next_isbn(&mut self) -> eyre::Result<Option<String>> {
        Ok(self.isbn.take())
    }

    fn show(&mut self, outcome: &Lookup) -> eyre::Result<()> {
        if !self.json {
            println!("{outcome}");
            return Ok(());
        }

        // Machine-readable mode: anything but a record fails the
        // invocation itself.
        if let Lookup::Found { record, .. } = outcome {
            println!("{}", serde_json::to_string_pretty(record)?);
            Ok(())
        } else {
            Err(eyre!("{outcome}"))
        }
    }
}

/// Prompts for ISBNs on the terminal until an empty line is entered.
pub struct Prompt;

impl Frontend for Prompt {
    fn next_isbn(&mut self) -> eyre::Result<Option<String>> {
        interact::prompt_isbn()
    }

    fn show(&mut self, outcome: &Lookup) -> eyre::Result<()> {
        println!("{outcome}");
        Ok(())
    }
}
