//! Loopback stand-in for the search service used by tests.
//!
//! Binds an ephemeral port and answers every connection with one canned HTTP
//! response, recording the request line so tests can assert on the query
//! parameters that actually hit the wire.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

pub(crate) struct ServiceDouble {
    endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ServiceDouble {
    /// Serve `body` as a 200 response with a JSON content type.
    pub(crate) fn respond_json(body: &str) -> Self {
        Self::spawn(200, body.to_string())
    }

    /// Serve an empty response with the given status code.
    pub(crate) fn respond_status(code: u16) -> Self {
        Self::spawn(code, String::new())
    }

    fn spawn(code: u16, body: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let endpoint = format!("http://{}", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let mut reader = BufReader::new(stream);

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                let mut header = String::new();
                while reader.read_line(&mut header).is_ok() && header.trim() != "" {
                    header.clear();
                }
                recorded
                    .lock()
                    .expect("request log lock")
                    .push(request_line.trim_end().to_string());

                let response = format!(
                    "HTTP/1.1 {code} Canned\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len(),
                );
                let mut stream = reader.into_inner();
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { endpoint, requests }
    }

    /// Base URL clients should be pointed at.
    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The most recently recorded request line.
    pub(crate) fn recorded_request_line(&self) -> String {
        self.requests
            .lock()
            .expect("request log lock")
            .last()
            .cloned()
            .expect("at least one request should have been served")
    }
}
