//! The data model of a lookup: the catalogue identifier, the descriptive
//! record and the outcome types returned by the pipeline stages.

use serde::Serialize;

/// Placeholder for a textual field missing from the source record.
pub const UNKNOWN: &str = "unknown";

/// Placeholder for a missing publication date.
pub const UNKNOWN_DATE: &str = "unknown date";

/// A PPN, the internal record identifier of the Sudoc catalogue.
///
/// PPNs are opaque tokens produced by the `isbn2ppn` service and have no
/// meaning outside of addressing a descriptive record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ppn(String);

impl Ppn {
    pub(crate) fn new<S: Into<String>>(ppn: S) -> Self {
        Self(ppn.into())
    }

    /// The identifier as a plain string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ppn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The descriptive metadata of a catalogued edition.
///
/// A record is never partially constructed: each field independently falls
/// back to [`UNKNOWN`] (or [`UNKNOWN_DATE`]) when the source record omits
/// it, so a returned record always carries all four fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetadataRecord {
    /// Title of the edition, without any subtitle/responsibility suffix.
    pub title: String,
    /// Name of the first listed contributor.
    pub author: String,
    /// Publisher of the edition.
    pub publisher: String,
    /// Publication date as it appears in the record.
    pub date: String,
}

impl std::fmt::Display for MetadataRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Publisher: {}", self.publisher)?;
        write!(f, "Date: {}", self.date)
    }
}

/// Outcome of fetching the descriptive record for a single PPN.
///
/// All failure paths of the record stage are propagated by value rather
/// than by error return so that every path is visible at the call site.
#[derive(Debug, PartialEq)]
pub enum RecordFetch {
    /// The catalogue served a record; fields may hold placeholder values.
    Record(MetadataRecord),
    /// The catalogue answered with a non-success status for this PPN.
    NotFound,
    /// The request exceeded its wait bound.
    Timeout,
    /// Any other transport or parsing fault, with diagnostic text.
    Unexpected(String),
}

/// Caller-facing outcome of a full ISBN lookup.
///
/// The two negative outcomes are deliberately distinct: an ISBN the
/// catalogue does not know at all ([`Lookup::NoIdentifier`]) reads very
/// differently from an identifier whose record could not be obtained.
#[derive(Debug, PartialEq)]
pub enum Lookup {
    /// Both stages succeeded.
    Found {
        /// Identifier the ISBN resolved to.
        ppn: Ppn,
        /// The retrieved record.
        record: MetadataRecord,
    },
    /// The catalogue has no identifier for this ISBN.
    NoIdentifier,
    /// An identifier resolved but the catalogue served no record for it.
    NoRecord {
        /// Identifier the ISBN resolved to.
        ppn: Ppn,
    },
    /// The record stage failed (timeout or an unexpected fault).
    Failed {
        /// Identifier the ISBN resolved to.
        ppn: Ppn,
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found { record, .. } => record.fmt(f),
            Self::NoIdentifier => f.write_str("No PPN found for this ISBN."),
            Self::NoRecord { ppn } => write!(f, "No metadata found for PPN {ppn}."),
            Self::Failed { ppn, reason } => {
                write!(f, "Record retrieval failed for PPN {ppn}: {reason}")
            }
        }
    }
}
