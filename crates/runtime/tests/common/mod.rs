//! In-memory server double for driving the connection worker in tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{self, Instant};

use runtime::{
    ConnectionError, Connector, Event, Runtime, RuntimeConfig, RuntimeHandle, Transport,
};

pub const RECONNECT_DELAY: Duration = Duration::from_millis(2000);

/// What the fake server does with the next connection attempt.
#[derive(Clone, Copy, Debug)]
pub enum Plan {
    Accept,
    Refuse,
}

/// Server end of an accepted link.
pub struct ServerConn {
    pub from_client: mpsc::UnboundedReceiver<String>,
    to_client: Option<mpsc::UnboundedSender<String>>,
}

impl ServerConn {
    pub fn send(&self, frame: impl Into<String>) {
        if let Some(tx) = &self.to_client {
            tx.send(frame.into()).expect("client transport dropped");
        }
    }

    pub fn send_json(&self, value: Value) {
        self.send(value.to_string());
    }

    /// Next frame the client wrote, parsed as JSON.
    pub async fn next_frame(&mut self) -> Value {
        let text = time::timeout(Duration::from_secs(60), self.from_client.recv())
            .await
            .expect("timed out waiting for a client frame")
            .expect("client closed the link");
        serde_json::from_str(&text).expect("client sent invalid JSON")
    }

    /// Asserts no frame is pending right now.
    pub fn assert_silent(&mut self) {
        assert!(
            self.from_client.try_recv().is_err(),
            "unexpected frame from client"
        );
    }

    /// Drop the server side, which the client observes as a close.
    pub fn close(&mut self) {
        self.to_client = None;
    }
}

struct MemoryTransport {
    to_server: mpsc::UnboundedSender<String>,
    from_server: mpsc::UnboundedReceiver<String>,
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn send(&mut self, text: String) -> Result<(), ConnectionError> {
        self.to_server
            .send(text)
            .map_err(|_| ConnectionError::Refused("server end dropped".into()))
    }

    async fn recv(&mut self) -> Option<Result<String, ConnectionError>> {
        self.from_server.recv().await.map(Ok)
    }

    async fn close(&mut self) {
        self.from_server.close();
    }
}

pub struct MemoryConnector {
    plan: Arc<Mutex<VecDeque<Plan>>>,
    attempts: mpsc::UnboundedSender<Instant>,
    accepted: mpsc::UnboundedSender<ServerConn>,
}

#[async_trait]
impl Connector for MemoryConnector {
    async fn connect(&self, _url: &str) -> Result<Box<dyn Transport>, ConnectionError> {
        let _ = self.attempts.send(Instant::now());
        let next = self
            .plan
            .lock()
            .expect("plan lock poisoned")
            .pop_front()
            .unwrap_or(Plan::Refuse);

        match next {
            Plan::Refuse => Err(ConnectionError::Refused("scripted refusal".into())),
            Plan::Accept => {
                let (to_server, from_client) = mpsc::unbounded_channel();
                let (to_client, from_server) = mpsc::unbounded_channel();
                let _ = self.accepted.send(ServerConn {
                    from_client,
                    to_client: Some(to_client),
                });
                Ok(Box::new(MemoryTransport {
                    to_server,
                    from_server,
                }))
            }
        }
    }
}

pub struct Harness {
    pub runtime: Runtime,
    pub handle: RuntimeHandle,
    pub events: broadcast::Receiver<Event>,
    pub attempts: mpsc::UnboundedReceiver<Instant>,
    pub accepted: mpsc::UnboundedReceiver<ServerConn>,
    pub plan: Arc<Mutex<VecDeque<Plan>>>,
}

impl Harness {
    pub fn start(plan: impl IntoIterator<Item = Plan>) -> Self {
        let plan = Arc::new(Mutex::new(plan.into_iter().collect::<VecDeque<_>>()));
        let (attempts_tx, attempts) = mpsc::unbounded_channel();
        let (accepted_tx, accepted) = mpsc::unbounded_channel();

        let config = RuntimeConfig {
            server_url: "ws://test.invalid".into(),
            reconnect_delay: RECONNECT_DELAY,
            event_buffer_size: 256,
            ..RuntimeConfig::default()
        };
        let runtime = Runtime::builder()
            .config(config)
            .seed(7)
            .connector(MemoryConnector {
                plan: Arc::clone(&plan),
                attempts: attempts_tx,
                accepted: accepted_tx,
            })
            .build();
        let handle = runtime.handle();
        let events = handle.subscribe();

        Self {
            runtime,
            handle,
            events,
            attempts,
            accepted,
            plan,
        }
    }

    pub fn push_plan(&self, next: Plan) {
        self.plan.lock().expect("plan lock poisoned").push_back(next);
    }

    pub async fn next_attempt(&mut self) -> Instant {
        time::timeout(Duration::from_secs(60), self.attempts.recv())
            .await
            .expect("timed out waiting for a connection attempt")
            .expect("connector dropped")
    }

    pub async fn next_connection(&mut self) -> ServerConn {
        time::timeout(Duration::from_secs(60), self.accepted.recv())
            .await
            .expect("timed out waiting for a connection")
            .expect("connector dropped")
    }

    /// Skip events until one matches.
    pub async fn wait_for(&mut self, mut predicate: impl FnMut(&Event) -> bool) -> Event {
        time::timeout(Duration::from_secs(60), async {
            loop {
                let event = self.events.recv().await.expect("event bus closed");
                if predicate(&event) {
                    return event;
                }
            }
        })
        .await
        .expect("timed out waiting for event")
    }
}
