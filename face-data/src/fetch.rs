//! Retrieving the OBJ source text.
//!
//! A [`MeshSource`] produces the complete source as one UTF-8 string.
//! There is exactly one attempt per call: no retry, no fallback, no
//! partial content.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::FetchError;

/// Somewhere the OBJ text can be read from.
pub trait MeshSource {
    /// Human-readable location, used in progress messages.
    fn describe(&self) -> String;

    /// Retrieve the full text.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the content cannot be retrieved or is not
    /// valid UTF-8.
    fn fetch(&self) -> Result<String, FetchError>;
}

/// One blocking HTTP(S) GET with a bounded timeout.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    /// Create a source for `url`. `timeout` bounds the whole request,
    /// including reading the body.
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    fn transport(&self, source: reqwest::Error) -> FetchError {
        FetchError::Transport {
            url: self.url.clone(),
            source,
        }
    }
}

impl MeshSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| self.transport(e))?;

        debug!(url = %self.url, timeout_secs = self.timeout.as_secs_f64(), "Sending request");
        let response = client.get(&self.url).send().map_err(|e| self.transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| self.transport(e))?;
        info!(url = %self.url, bytes = body.len(), "Fetched source");
        decode(body.to_vec(), &self.url)
    }
}

/// A local OBJ file, for offline runs.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MeshSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, FetchError> {
        let bytes = std::fs::read(&self.path).map_err(|source| FetchError::Read {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), bytes = bytes.len(), "Read source");
        decode(bytes, &self.path.display().to_string())
    }
}

fn decode(bytes: Vec<u8>, origin: &str) -> Result<String, FetchError> {
    String::from_utf8(bytes).map_err(|source| FetchError::Decode {
        origin: origin.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a local port and return the URL.
    fn serve_once(status_line: &'static str, body: &'static [u8]) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/canonical_face_model.obj", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0_u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let header = format!(
                "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            // The client may hang up early on error statuses.
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(body);
        });
        (url, handle)
    }

    /// A URL on a local port with nothing listening.
    fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/face.obj")
    }

    #[test]
    fn http_success_returns_body() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", b"v 1 2 3\n");
        let text = HttpSource::new(url, Duration::from_secs(5)).fetch().unwrap();
        server.join().unwrap();
        assert_eq!(text, "v 1 2 3\n");
    }

    #[test]
    fn http_error_status_is_reported() {
        let (url, server) = serve_once("HTTP/1.1 404 Not Found", b"missing");
        let err = HttpSource::new(url, Duration::from_secs(5)).fetch().unwrap_err();
        server.join().unwrap();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[test]
    fn http_invalid_utf8_is_reported() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", b"v \xff\xfe 0 0\n");
        let err = HttpSource::new(url, Duration::from_secs(5)).fetch().unwrap_err();
        server.join().unwrap();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let source = HttpSource::new(closed_port_url(), Duration::from_secs(5));
        assert!(matches!(source.fetch(), Err(FetchError::Transport { .. })));
    }

    #[test]
    fn file_source_reads_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.obj");
        std::fs::write(&path, "v 0 0 0\n").unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.fetch().unwrap(), "v 0 0 0\n");
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[test]
    fn file_source_missing_file() {
        let source = FileSource::new("/nonexistent/face.obj");
        assert!(matches!(source.fetch(), Err(FetchError::Read { .. })));
    }

    #[test]
    fn file_source_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.obj");
        std::fs::write(&path, b"v \xc3\x28 0 0\n").unwrap();

        assert!(matches!(
            FileSource::new(&path).fetch(),
            Err(FetchError::Decode { .. })
        ));
    }
}
