use std::collections::VecDeque;
use std::error::Error as StdError;
use std::io;
use std::sync::{Arc, Mutex};

use url::Url;

use super::{BoxFuture, Credentials, HttpResponse, HttpTransport, SmsAeroClient};
use crate::domain::Signature;
use crate::transport::{DEFAULT_GATEWAYS, parse_gateway};

/// Scripted outcome of one gateway attempt.
#[derive(Debug, Clone)]
pub enum FakeReply {
    Status(u16, &'static str),
    Unreachable,
}

#[derive(Debug, Clone)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    replies: VecDeque<FakeReply>,
    requests: Vec<(String, String)>,
}

impl FakeTransport {
    pub fn new(replies: Vec<FakeReply>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                replies: replies.into(),
                requests: Vec::new(),
            })),
        }
    }

    /// Shorthand for a single `200` reply.
    pub fn ok(body: &'static str) -> Self {
        Self::new(vec![FakeReply::Status(200, body)])
    }

    pub fn urls(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.requests.iter().map(|(url, _)| url.clone()).collect()
    }

    /// `(url, body)` of the most recent request.
    pub fn last_request(&self) -> Option<(String, String)> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl HttpTransport for FakeTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a Url,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let reply = {
                let mut state = self.state.lock().unwrap();
                state.requests.push((url.to_string(), body));
                state.replies.pop_front()
            };
            match reply {
                Some(FakeReply::Status(status, body)) => Ok(HttpResponse {
                    status,
                    body: body.to_owned(),
                }),
                Some(FakeReply::Unreachable) => Err("connection refused".into()),
                None => Err("no scripted reply".into()),
            }
        })
    }
}

pub fn make_client(transport: FakeTransport) -> SmsAeroClient {
    SmsAeroClient {
        credentials: Credentials::new("user@example.com", "secret").unwrap(),
        signature: Signature::default(),
        gateways: DEFAULT_GATEWAYS
            .iter()
            .map(|gateway| parse_gateway(gateway).unwrap())
            .collect(),
        test_mode: false,
        logging: false,
        http: Arc::new(transport),
    }
}

/// Path and query of `url`, without gateway host or credentials.
pub fn selector_of(url: &str) -> String {
    let url = Url::parse(url).unwrap();
    let path = url.path().trim_start_matches("/v2/").to_owned();
    match url.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    }
}

/// In-memory sink for `tracing` output, installed for the current thread.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Route every event on this thread into a fresh buffer until the guard drops.
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
