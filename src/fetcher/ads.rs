//! Blocking client for the ADS bib_query endpoint

use std::time::Duration;

use reqwest::blocking::Client;

use super::{extract_record, RecordFetcher};
use crate::bibcode::Bibcode;
use crate::{Error, Result};

/// Legacy ADS abstract service, BibTeX export
pub const DEFAULT_ENDPOINT: &str = "http://adsabs.harvard.edu/cgi-bin/nph-bib_query";

/// Astronomy database selector
pub const DEFAULT_DB_KEY: &str = "AST";

/// Fetches BibTeX records from ADS with one form-encoded POST per bibcode.
///
/// No retries and no timeout: a stalled server blocks the caller.
pub struct AdsFetcher {
    client: Client,
    endpoint: String,
    db_key: String,
}

impl AdsFetcher {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_DB_KEY)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, db_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(client, endpoint, db_key))
    }

    /// Use a preconfigured client (proxy settings, TLS roots)
    pub fn with_client(client: Client, endpoint: impl Into<String>, db_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            db_key: db_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, bibcode: &Bibcode) -> std::result::Result<String, reqwest::Error> {
        let form = [
            ("bibcode", bibcode.as_str()),
            ("data_type", "BIBTEX"),
            ("db_key", self.db_key.as_str()),
            ("nocookieset", "1"),
        ];

        self.client
            .post(&self.endpoint)
            .form(&form)
            .send()?
            .error_for_status()?
            .text()
    }
}

impl RecordFetcher for AdsFetcher {
    fn fetch(&self, bibcode: &Bibcode) -> Result<String> {
        tracing::debug!("Requesting {} from {}", bibcode, self.endpoint);
        let body = self.request(bibcode).map_err(|e| {
            tracing::warn!("ADS lookup for {} failed: {}", bibcode, e);
            Error::Fetch {
                bibcode: bibcode.to_string(),
                reason: e.to_string(),
            }
        })?;
        extract_record(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    const CODE: &str = "2016ApJ...816...52C";

    fn local_fetcher(url: String) -> AdsFetcher {
        let client = Client::builder().no_proxy().build().unwrap();
        AdsFetcher::with_client(client, url, DEFAULT_DB_KEY)
    }

    /// Serve one canned HTTP response and hand back the raw request
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/cgi-bin/nph-bib_query", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });
        (url, handle)
    }

    fn read_request(stream: &mut impl Read) -> String {
        let mut data = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&data);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).into_owned()
    }

    #[test]
    fn test_fetch_posts_form_and_strips_preamble() {
        let (url, server) = serve_once("200 OK", "Retrieved 1 abstracts.\n\n@ARTICLE{2016ApJ...816...52C,\n}\n");
        let fetcher = local_fetcher(url);

        let record = fetcher.fetch(&Bibcode::parse(CODE).unwrap()).unwrap();
        assert_eq!(record, "@ARTICLE{2016ApJ...816...52C,\n}\n");

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /cgi-bin/nph-bib_query"));
        assert!(request.to_ascii_lowercase().contains("application/x-www-form-urlencoded"));
        assert!(request.contains("bibcode=2016ApJ...816...52C"));
        assert!(request.contains("data_type=BIBTEX"));
        assert!(request.contains("db_key=AST"));
        assert!(request.contains("nocookieset=1"));
    }

    #[test]
    fn test_fetch_error_status() {
        let (url, server) = serve_once("404 Not Found", "not found");
        let fetcher = local_fetcher(url);

        let err = fetcher.fetch(&Bibcode::parse(CODE).unwrap()).unwrap_err();
        match &err {
            Error::Fetch { bibcode, .. } => assert_eq!(bibcode, CODE),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains(
            "Unable to retrieve the record 2016ApJ...816...52C, possibly because of a wrong bibcode \
             or unavailability of the ADS server"
        ));
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_unrecognizable_body() {
        let (url, server) = serve_once("200 OK", "No abstracts found");
        let fetcher = local_fetcher(url);

        match fetcher.fetch(&Bibcode::parse(CODE).unwrap()) {
            Err(Error::UnrecognizableRecord(body)) => assert_eq!(body, "No abstracts found"),
            other => panic!("unexpected result: {other:?}"),
        }
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_unreachable_endpoint() {
        // Bind then drop to get a port with nothing listening
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let fetcher = local_fetcher(format!("http://{addr}/"));

        assert!(matches!(
            fetcher.fetch(&Bibcode::parse(CODE).unwrap()),
            Err(Error::Fetch { .. })
        ));
    }

    #[test]
    fn test_default_endpoint() {
        let fetcher = AdsFetcher::new().unwrap();
        assert_eq!(fetcher.endpoint(), DEFAULT_ENDPOINT);
    }
}
