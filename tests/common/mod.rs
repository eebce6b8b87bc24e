//! Shared helpers for integration tests
//!
//! Serves a canned HTTP response from a loopback listener and counts the
//! requests it receives.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

pub const FIXTURE: &str = include_str!("../fixtures/eurofxref-daily.xml");

/// Loopback HTTP server answering every request with the same response
pub struct FixtureServer {
    url: String,
    hits: Arc<AtomicUsize>,
}

impl FixtureServer {
    /// Starts a server answering `200 OK` with `body`
    pub fn start(body: &str) -> Self {
        Self::with_status(200, "OK", body)
    }

    /// Starts a server answering with the given status line and body
    pub fn with_status(status: u16, reason: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Listener should have an address");
        let hits = Arc::new(AtomicUsize::new(0));

        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        let counter = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                counter.fetch_add(1, Ordering::SeqCst);
                respond(stream, &response);
            }
        });

        Self {
            url: format!("http://{}/stats/eurofxref/eurofxref-daily.xml", addr),
            hits,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Number of requests served so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn respond(stream: TcpStream, response: &str) {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    // Drain the request head before answering
    while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
        if line == "\r\n" {
            break;
        }
        line.clear();
    }
    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// Returns a single-currency document published on `time`
pub fn single_rate_document(time: &str, currency: &str, rate: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<gesmes:Envelope xmlns:gesmes=\"http://www.gesmes.org/xml/2002-08-01\" xmlns=\"http://www.ecb.int/vocabulary/2002-08-01/eurofxref\"><Cube><Cube time='{}'><Cube currency='{}' rate='{}'/></Cube></Cube></gesmes:Envelope>",
        time, currency, rate
    )
}
