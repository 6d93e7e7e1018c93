#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod error;
mod record;

pub use error::{Error, ErrorKind};
pub use record::{Lookup, MetadataRecord, Ppn, RecordFetch, UNKNOWN, UNKNOWN_DATE};

use log::trace;

type Client = api::HttpClient;

/// Resolves an ISBN to the PPN of its Sudoc record using the `isbn2ppn`
/// service.
///
/// The ISBN is embedded in the request path verbatim; no validation or
/// escaping is applied so the caller must supply a request-safe token.
/// `Ok(None)` means the catalogue holds no record for this ISBN.
///
/// # Errors
///
/// An `Err` is returned when the transport fails, when the request exceeds
/// its wait bound or when the service answers with a malformed document.
#[inline]
pub fn ppn_by_isbn(isbn: &str) -> Result<Option<Ppn>, Error> {
    trace!("Resolve the catalogue identifier of ISBN '{isbn}'");
    api::isbn2ppn::resolve_ppn::<Client>(isbn)
}

/// Fetches the descriptive record of a PPN.
///
/// All failure paths of this stage are reported through the returned
/// [`RecordFetch`] rather than an error return, which keeps them visible
/// at the call site.
#[inline]
#[must_use]
pub fn record_by_ppn(ppn: &Ppn) -> RecordFetch {
    trace!("Fetch the descriptive record of PPN '{ppn}'");
    api::rdf::fetch_record::<Client>(ppn.as_str())
}

/// Looks up the metadata record of an ISBN: resolves its PPN, then fetches
/// and extracts the descriptive record.
///
/// The two stages run strictly in order and exactly once each; when no PPN
/// resolves the record service is never contacted. The returned [`Lookup`]
/// distinguishes an ISBN the catalogue does not know from a PPN whose
/// record could not be obtained.
///
/// # Errors
///
/// An `Err` is returned when the identifier stage fails for any reason
/// other than a "not found" answer; record stage failures are reported as
/// [`Lookup::Failed`].
#[inline]
pub fn lookup_by_isbn(isbn: &str) -> Result<Lookup, Error> {
    trace!("Look up the metadata record of ISBN '{isbn}'");
    api::lookup::<Client>(isbn)
}
