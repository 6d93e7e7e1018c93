use std::time::Duration;

use log::info;

use crate::{
    record::{Lookup, RecordFetch},
    Error, ErrorKind,
};

pub(crate) mod isbn2ppn;
pub(crate) mod rdf;

/// Wait bound shared by both catalogue requests.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) trait Client
where
    Self: Default,
{
    /// Issues a GET request and returns the response body, or `None` when
    /// the server answers with a non-success status.
    fn get_text(&self, url: &str) -> Result<Option<String>, Error>;
}

/// Blocking HTTP client for the catalogue services.
pub(crate) struct HttpClient(reqwest::blocking::Client);

impl Default for HttpClient {
    fn default() -> Self {
        // Mirrors `reqwest::blocking::Client::new` which also panics when
        // the TLS backend cannot be initialised.
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("TLS backend should initialise");
        Self(client)
    }
}

impl Client for HttpClient {
    fn get_text(&self, url: &str) -> Result<Option<String>, Error> {
        let resp = self.0.get(url).send().map_err(wrap_transport)?;

        if !resp.status().is_success() {
            return Ok(None);
        }

        resp.text().map(Some).map_err(wrap_transport)
    }
}

fn wrap_transport(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::wrap(ErrorKind::Timeout, err)
    } else {
        Error::wrap(ErrorKind::IO, err)
    }
}

/// Runs the two lookup stages in order, short-circuiting when no PPN
/// resolves so the record service is never contacted without one.
pub(crate) fn lookup<C: Client>(isbn: &str) -> Result<Lookup, Error> {
    let ppn = match isbn2ppn::resolve_ppn::<C>(isbn)? {
        Some(ppn) => ppn,
        None => return Ok(Lookup::NoIdentifier),
    };

    info!("ISBN '{isbn}' resolved to PPN '{ppn}'");

    let outcome = match rdf::fetch_record::<C>(ppn.as_str()) {
        RecordFetch::Record(record) => Lookup::Found { ppn, record },
        RecordFetch::NotFound => Lookup::NoRecord { ppn },
        RecordFetch::Timeout => Lookup::Failed {
            ppn,
            reason: format!("request timed out after {}s", REQUEST_TIMEOUT.as_secs()),
        },
        RecordFetch::Unexpected(reason) => Lookup::Failed { ppn, reason },
    };

    Ok(outcome)
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_body_producer, MockClient, NetworkErrorProducer, NotFoundProducer, Producer,
    TimeoutErrorProducer, REQUEST_LOG, URL_SINK,
};

#[cfg(test)]
mod test {

    use super::*;

    thread_local! {
        pub(crate) static URL_SINK: std::cell::RefCell<Option<String>> = std::cell::RefCell::new(None);
        pub(crate) static REQUEST_LOG: std::cell::RefCell<Vec<String>> = std::cell::RefCell::new(Vec::new());
    }

    /// Asserts that the expected URL is the same as the one provided to the [`MockClient`].
    ///
    /// The [`MockClient`] will update the static thread local `URL_SINK` with the URL string that
    /// was passed to it, this allows for asserting that implementing functions or methods are
    /// parsing the correct URL.
    macro_rules! assert_url {
        ($expected: expr) => {
            assert_url!($expected, "");
        };
        ($expected: expr, $($arg: tt)+) => {
            let url = crate::api::URL_SINK.with(|url| url.borrow().clone().unwrap_or_default());
            assert_eq!($expected, url, $($arg)+);
        };
    }

    /// Returns and clears the URLs requested on the current thread, in
    /// request order.
    pub(crate) fn take_request_log() -> Vec<String> {
        REQUEST_LOG.with(|log| log.borrow_mut().drain(..).collect())
    }

    pub(crate) trait Producer<T>
    where
        Self: Default,
    {
        fn produce() -> Result<T, Error>;
    }

    #[derive(Default)]
    pub(crate) struct MockClient<P: Producer<Option<String>> = EmptyBodyProducer> {
        _producer: std::marker::PhantomData<P>,
    }

    impl<P: Producer<Option<String>>> Client for MockClient<P> {
        fn get_text(&self, url: &str) -> Result<Option<String>, Error> {
            URL_SINK.with(|sink| *sink.borrow_mut() = Some(url.to_owned()));
            REQUEST_LOG.with(|log| log.borrow_mut().push(url.to_owned()));
            P::produce()
        }
    }

    macro_rules! impl_body_producer {
        ($($producer:ident => $exp:expr,)*) => {
            $(
                #[derive(Default)]
                pub(crate) struct $producer;

                impl crate::api::Producer<Option<String>> for $producer {
                    fn produce() -> Result<Option<String>, crate::Error> {
                        $exp
                    }
                }
            )*
        };
    }
    impl_body_producer! {
        EmptyBodyProducer => Ok(Some(String::new())),
        NotFoundProducer => Ok(None),
        NetworkErrorProducer => Err(Error::new(ErrorKind::IO, "Network error")),
        TimeoutErrorProducer => Err(Error::new(ErrorKind::Timeout, "Request timed out")),
    }

    pub(crate) use assert_url;
    pub(crate) use impl_body_producer;
}
