#![allow(dead_code)]

use assert_cmd::Command;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;
use tiny_http::{Header, Response, Server};

pub fn habitual_cmd() -> Command {
    let mut cmd = Command::cargo_bin("habitual").unwrap();
    cmd.env_remove("HABITUAL_ROOT");
    cmd.env_remove("HABITUAL_ENDPOINT");
    cmd.env_remove("GEMINI_API_KEY");
    cmd.env_remove("PORT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Stub breakdown endpoint that answers every request with the same reply.
/// Returns its URL and the request bodies it has seen.
pub fn stub_endpoint(status: u16, body: &'static str) -> (String, Arc<Mutex<Vec<String>>>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&seen);

    thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let mut received = String::new();
            request.as_reader().read_to_string(&mut received).unwrap();
            recorded.lock().unwrap().push(received);

            let header =
                Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(header);
            let _ = request.respond(response);
        }
    });

    (format!("http://{}/api/generate-breakdown", addr), seen)
}
