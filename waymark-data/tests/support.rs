//! Canned HTTP server for exercising the providers without real services.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Serves the same response to every connection on a loopback port.
///
/// The server runs on a background thread until the process exits; each test
/// starts its own on a fresh ephemeral port.
#[derive(Debug)]
pub struct CannedServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    _handle: JoinHandle<()>,
}

impl CannedServer {
    /// Start answering with `status` (e.g. `"200 OK"`) and a JSON `body`.
    pub fn start(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .unwrap_or_else(|err| panic!("failed to bind canned server: {err}"));
        let address = listener
            .local_addr()
            .unwrap_or_else(|err| panic!("failed to read canned server address: {err}"));
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        let handle = thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let _answered = answer(stream, &response, &seen);
            }
        });
        Self {
            base_url: format!("http://{address}"),
            requests,
            _handle: handle,
        }
    }

    /// Base URL clients should be pointed at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request targets (path and query) received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

/// Read one request head, record its target and send the canned response.
fn answer(stream: TcpStream, response: &str, seen: &Mutex<Vec<String>>) -> Option<()> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    loop {
        let mut header = String::new();
        let read = reader.read_line(&mut header).ok()?;
        if read == 0 || header == "\r\n" {
            break;
        }
    }
    if let Some(target) = request_line.split_whitespace().nth(1) {
        seen.lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(target.to_owned());
    }
    let mut writer = stream;
    writer.write_all(response.as_bytes()).ok()?;
    writer.flush().ok()
}
