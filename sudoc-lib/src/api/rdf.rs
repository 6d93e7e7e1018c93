use log::{info, warn};
use roxmltree::Document;

use crate::{
    record::{MetadataRecord, RecordFetch, UNKNOWN, UNKNOWN_DATE},
    Error, ErrorKind,
};

use super::Client;

const RECORD_URL: &str = "http://www.sudoc.fr/";

const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
const FOAF_NS: &str = "http://xmlns.com/foaf/0.1/";

/// Fetches the descriptive RDF record of a PPN and extracts its metadata.
///
/// Every failure path is reported through the returned [`RecordFetch`] so
/// that the record stage never aborts a lookup with an error return.
pub(crate) fn fetch_record<C: Client>(ppn: &str) -> RecordFetch {
    info!("Fetching the descriptive record of PPN '{ppn}'");
    let url = format!("{RECORD_URL}{ppn}.rdf");

    let client = C::default();
    let body = match client.get_text(&url) {
        Ok(Some(body)) => body,
        Ok(None) => return RecordFetch::NotFound,
        Err(err) if err.kind() == ErrorKind::Timeout => {
            warn!("Record request for PPN '{ppn}' exceeded its wait bound: {err}");
            return RecordFetch::Timeout;
        }
        Err(err) => {
            warn!("Record request for PPN '{ppn}' failed: {err}");
            return RecordFetch::Unexpected(err.to_string());
        }
    };

    match parse_record(&body) {
        Ok(record) => RecordFetch::Record(record),
        Err(err) => {
            warn!("Record body of PPN '{ppn}' could not be parsed: {err}");
            RecordFetch::Unexpected(err.to_string())
        }
    }
}

/// Extracts the four metadata fields from a descriptive record.
///
/// Each field independently falls back to its placeholder when the record
/// omits the element, so a record parsed from a well-formed document is
/// always fully populated.
fn parse_record(body: &str) -> Result<MetadataRecord, Error> {
    let doc = Document::parse(body).map_err(|e| Error::wrap(ErrorKind::Parse, e))?;

    let title = element_text(&doc, DC_NS, "title").map_or_else(|| UNKNOWN.to_owned(), clean_title);
    let author =
        element_text(&doc, FOAF_NS, "name").map_or_else(|| UNKNOWN.to_owned(), str::to_owned);
    let publisher =
        element_text(&doc, DC_NS, "publisher").map_or_else(|| UNKNOWN.to_owned(), str::to_owned);
    let date =
        element_text(&doc, DC_NS, "date").map_or_else(|| UNKNOWN_DATE.to_owned(), str::to_owned);

    Ok(MetadataRecord {
        title,
        author,
        publisher,
        date,
    })
}

/// Text content of the first element with the namespaced name.
fn element_text<'a, 'input>(doc: &'a Document<'input>, ns: &str, name: &str) -> Option<&'a str> {
    doc.descendants()
        .find(|node| node.has_tag_name((ns, name)))
        .and_then(|node| node.text())
}

/// Catalogue titles often carry a statement of responsibility after a `/`
/// separator; only the part before it names the edition.
fn clean_title(raw: &str) -> String {
    raw.split('/').next().unwrap_or(raw).trim().to_owned()
}
