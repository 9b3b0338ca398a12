//! A canned-response planner service for exercising the real client
//!
//! Runs a tiny_http server on a background thread and records every request.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Header, Response, Server};

/// A request as received by the server
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    /// Path plus query string
    pub target: String,
    pub body: String,
}

impl Recorded {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Canned response for a method and path
#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn new(method: &'static str, path: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self {
            method,
            path,
            status,
            body: body.into(),
        }
    }
}

pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("start test server");
        let addr = server.server_addr().to_ip().expect("ip listen address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);

                let seen = Recorded {
                    method: request.method().to_string(),
                    target: request.url().to_string(),
                    body,
                };

                let (status, response_body) = routes
                    .iter()
                    .find(|r| r.method == seen.method && r.path == seen.path())
                    .map(|r| (r.status, r.body.clone()))
                    .unwrap_or((404, r#"{"detail":"Not Found"}"#.to_string()));

                recorded.lock().unwrap().push(seen);

                let content_type =
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).expect("valid header");
                let response = Response::from_string(response_body)
                    .with_status_code(status)
                    .with_header(content_type);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

/// A base URL nothing is listening on
pub fn closed_base_url() -> String {
    let server = Server::http("127.0.0.1:0").expect("start test server");
    let addr = server.server_addr().to_ip().expect("ip listen address");
    drop(server);
    format!("http://{addr}")
}

pub const ONE_SESSION_PLAN: &str = r#"{
    "plan": {"plan_uuid": "p1", "user_id": "user1", "start_date": "2024-01-01", "end_date": "2024-01-15",
             "hours_per_day": 3.0, "session_length_minutes": 50},
    "subjects": [{"name": "CSA", "weight": 3, "topics_count": null}],
    "sessions": [
        {"session_uuid": "a", "date": "2024-01-01", "subject": "CSA", "topic": null, "minutes": 50, "status": "pending"}
    ]
}"#;
