//! Content Fetch: retrieve the textual body behind a source location.
//!
//! Recipes only see the [`ContentFetcher`] trait, so the transport can be
//! swapped (HTTP, offline, or an in-memory fake in tests). Every failure is a
//! typed [`FetchError`]; callers decide what fallback to write.

use std::time::Duration;

use content_inspector::ContentType;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{Result, SproutError};

/// Default upper bound on a single fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("server answered with HTTP {code}")]
    Status { code: u16 },

    #[error("{message}")]
    Transport { message: String },

    #[error("unsupported location scheme in '{location}'")]
    UnsupportedScheme { location: String },

    #[error("offline mode, remote content disabled")]
    Offline,

    #[error("response body is not text")]
    InvalidBody,
}

pub trait ContentFetcher {
    fn fetch(&self, location: &str) -> std::result::Result<String, FetchError>;
}

/// Only `https://` and `http://` locations may be fetched.
fn check_location(location: &str) -> std::result::Result<(), FetchError> {
    if location.starts_with("https://") {
        return Ok(());
    }
    if location.starts_with("http://") {
        warn!(location, "using insecure http:// location; consider https://");
        return Ok(());
    }
    Err(FetchError::UnsupportedScheme {
        location: location.to_string(),
    })
}

/// Accept only UTF-8 text: binary bodies (BOM-aware, null-byte scanning) and
/// other text encodings such as UTF-16 are rejected.
fn decode_body(body: &[u8]) -> std::result::Result<String, FetchError> {
    let head = &body[..body.len().min(8192)];
    match content_inspector::inspect(head) {
        ContentType::UTF_8 | ContentType::UTF_8_BOM => {}
        _ => return Err(FetchError::InvalidBody),
    }
    let text = std::str::from_utf8(body).map_err(|_| FetchError::InvalidBody)?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
}

/// Turn a transport error into a short message with a hint for the common cases.
fn classify_transport_error(message: &str) -> String {
    if message.contains("dns error") || message.contains("failed to lookup address") {
        format!("could not resolve host, check your connection ({message})")
    } else if message.contains("Connection refused") {
        format!("connection refused ({message})")
    } else if message.contains("certificate") {
        format!("TLS certificate problem ({message})")
    } else {
        message.to_string()
    }
}

/// Blocking HTTP fetcher with an explicit per-request timeout.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("sprout/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| SproutError::HttpClient { source: e })?;
        Ok(Self { client, timeout })
    }
}

impl ContentFetcher for HttpFetcher {
    fn fetch(&self, location: &str) -> std::result::Result<String, FetchError> {
        check_location(location)?;
        debug!(location, "fetching content");

        let response = self.client.get(location).send().map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    seconds: self.timeout.as_secs(),
                }
            } else {
                FetchError::Transport {
                    message: classify_transport_error(&e.to_string()),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    seconds: self.timeout.as_secs(),
                }
            } else {
                FetchError::Transport {
                    message: e.to_string(),
                }
            }
        })?;

        decode_body(&bytes)
    }
}

/// Never touches the network; every fetch fails with [`FetchError::Offline`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineFetcher;

impl ContentFetcher for OfflineFetcher {
    fn fetch(&self, _location: &str) -> std::result::Result<String, FetchError> {
        Err(FetchError::Offline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::net::TcpListener;

    #[rstest]
    #[case("https://example.com/a.txt", true)]
    #[case("http://example.com/a.txt", true)]
    #[case("file:///etc/passwd", false)]
    #[case("ftp://example.com/a.txt", false)]
    #[case("example.com/a.txt", false)]
    fn location_schemes(#[case] location: &str, #[case] allowed: bool) {
        assert_eq!(check_location(location).is_ok(), allowed);
    }

    #[test]
    fn file_url_is_rejected_before_any_request() {
        let fetcher = HttpFetcher::new(Duration::from_secs(1)).unwrap();
        let err = fetcher.fetch("file:///tmp/LICENSE").unwrap_err();
        assert_eq!(
            err,
            FetchError::UnsupportedScheme {
                location: "file:///tmp/LICENSE".to_string()
            }
        );
    }

    #[test]
    fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            // Hold the connection open without ever answering.
            let (stream, _) = listener.accept().unwrap();
            std::thread::sleep(Duration::from_secs(3));
            drop(stream);
        });

        let fetcher = HttpFetcher::new(Duration::from_secs(1)).unwrap();
        let err = fetcher.fetch(&format!("http://{addr}/LICENSE")).unwrap_err();
        assert_eq!(err, FetchError::Timeout { seconds: 1 });
        server.join().unwrap();
    }

    #[test]
    fn offline_fetcher_always_fails() {
        assert_eq!(
            OfflineFetcher.fetch("https://example.com"),
            Err(FetchError::Offline)
        );
    }

    #[test]
    fn binary_body_is_rejected() {
        let body: Vec<u8> = (0..=255u8).collect();
        assert_eq!(decode_body(&body), Err(FetchError::InvalidBody));
        assert_eq!(
            decode_body(b"MIT License\n\nCopyright (c)").unwrap(),
            "MIT License\n\nCopyright (c)"
        );
    }

    #[test]
    fn utf16_body_is_rejected() {
        let mut body = vec![0xFF, 0xFE];
        for unit in "MIT License\n".encode_utf16() {
            body.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_body(&body), Err(FetchError::InvalidBody));
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let body = b"\xEF\xBB\xBFnode_modules/\n";
        assert_eq!(decode_body(body).unwrap(), "node_modules/\n");
    }

    #[test]
    fn classify_dns_failure() {
        let msg = classify_transport_error("error sending request: dns error: failed to lookup address");
        assert!(msg.contains("could not resolve host"));
    }

    #[test]
    fn classify_unknown_transport_error() {
        assert_eq!(classify_transport_error("boom"), "boom");
    }
}
