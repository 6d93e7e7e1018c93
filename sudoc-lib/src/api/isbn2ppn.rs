use log::info;
use roxmltree::Document;

use crate::{record::Ppn, Error, ErrorKind};

use super::Client;

const ISBN2PPN_URL: &str = "https://www.sudoc.fr/services/isbn2ppn/";

/// Resolves an ISBN to the PPN of its catalogue record.
///
/// A non-success answer from the service and a response without a
/// `result/ppn` element are both a plain "no identifier", not an error.
pub(crate) fn resolve_ppn<C: Client>(isbn: &str) -> Result<Option<Ppn>, Error> {
    info!("Resolving ISBN '{isbn}' with the isbn2ppn service");

    // The ISBN goes into the path verbatim, supplying a request-safe token
    // is the caller's responsibility.
    let mut url = ISBN2PPN_URL.to_owned();
    url.push_str(isbn);

    let client = C::default();
    let body = match client.get_text(&url)? {
        Some(body) => body,
        None => return Ok(None),
    };

    let doc = Document::parse(&body).map_err(|e| Error::wrap(ErrorKind::Parse, e))?;
    let ppn = doc
        .descendants()
        .find(|node| {
            node.has_tag_name("ppn") && node.parent().map_or(false, |p| p.has_tag_name("result"))
        })
        .and_then(|node| node.text())
        .map(Ppn::new);

    Ok(ppn)
}

#[cfg(test)]
mod tests {
    use super::resolve_ppn;
    use crate::{
        api::{assert_url, impl_body_producer, MockClient, NetworkErrorProducer, NotFoundProducer},
        ErrorKind,
    };

    const ISBN2PPN_XML: &str = include_str!("../../tests/data/isbn2ppn_bovary.xml");

    impl_body_producer! {
        ValidXmlProducer => Ok(Some(ISBN2PPN_XML.to_owned())),
        NoResultProducer => Ok(Some(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<sudoc service="isbn2ppn">
  <query>
    <isbn>9999999999999</isbn>
    <error>Aucune notice</error>
  </query>
</sudoc>"#
                .to_owned()
        )),
        JunkProducer => Ok(Some("this is not an xml document".to_owned())),
    }

    #[test]
    fn url_embeds_the_isbn_verbatim() {
        assert!(resolve_ppn::<MockClient<ValidXmlProducer>>("9782070409190").is_ok());
        assert_url!("https://www.sudoc.fr/services/isbn2ppn/9782070409190");
    }

    #[test]
    fn ppn_text_is_taken_from_the_result_element() {
        let ppn = resolve_ppn::<MockClient<ValidXmlProducer>>("9782070409190")
            .expect("ValidXmlProducer always produces a parsable document")
            .expect("the fixture contains a result/ppn element");

        assert_eq!("027630043", ppn.as_str());
    }

    #[test]
    fn non_success_status_is_absence() {
        let ppn = resolve_ppn::<MockClient<NotFoundProducer>>("9999999999999")
            .expect("a non-success status is not an error");

        assert_eq!(None, ppn);
    }

    #[test]
    fn document_without_a_ppn_element_is_absence() {
        let ppn = resolve_ppn::<MockClient<NoResultProducer>>("9999999999999")
            .expect("NoResultProducer always produces a parsable document");

        assert_eq!(None, ppn);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = resolve_ppn::<MockClient<JunkProducer>>("9782070409190")
            .expect_err("JunkProducer never produces a parsable document");

        assert_eq!(ErrorKind::Parse, err.kind());
    }

    #[test]
    fn transport_fault_propagates() {
        let err = resolve_ppn::<MockClient<NetworkErrorProducer>>("9782070409190")
            .expect_err("NetworkErrorProducer always fails the request");

        assert_eq!(ErrorKind::IO, err.kind());
    }
}
