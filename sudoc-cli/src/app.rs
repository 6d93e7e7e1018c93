use eyre::{eyre, Context};
use log::trace;

use crate::front::Frontend;

/// Drives the lookup pipeline through a presentation frontend until the
/// frontend runs out of input.
///
/// Identifier-stage faults abort the session; the three lookup outcomes
/// never do, they are shown and the loop continues.
pub fn run(front: &mut dyn Frontend) -> eyre::Result<()> {
    while let Some(isbn) = front.next_isbn()? {
        trace!("Looking up ISBN '{isbn}'");
        let outcome = sudoc::lookup_by_isbn(&isbn)
            .wrap_err_with(|| eyre!("could not reach the catalogue for ISBN '{isbn}'"))?;
        front.show(&outcome)?;
    }
    Ok(())
}
