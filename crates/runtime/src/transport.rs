//! Connection seams between the connection worker and the game server.
//!
//! [`Connector`] opens links and [`Transport`] moves text frames over one.
//! [`WsConnector`] is the production implementation on top of
//! `tokio-tungstenite`; tests plug in in-memory doubles.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("websocket failure")]
    WebSocket(#[from] tungstenite::Error),

    #[error("connection refused: {0}")]
    Refused(String),
}

/// An open, bidirectional text-frame link.
#[async_trait]
pub trait Transport: Send {
    async fn send(&mut self, text: String) -> Result<(), ConnectionError>;

    /// Next text frame. `None` once the peer has closed the link.
    ///
    /// Must be cancel-safe: the worker polls it inside `select!`.
    async fn recv(&mut self) -> Option<Result<String, ConnectionError>>;

    async fn close(&mut self);
}

/// Opens transports to a server URL.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, url: &str) -> Result<Box<dyn Transport>, ConnectionError>;
}

/// WebSocket connector for `ws://` and `wss://` URLs.
#[derive(Clone, Copy, Debug, Default)]
pub struct WsConnector;

#[async_trait]
impl Connector for WsConnector {
    async fn connect(&self, url: &str) -> Result<Box<dyn Transport>, ConnectionError> {
        let (stream, response) = connect_async(url).await?;
        debug!(status = %response.status(), "websocket handshake complete");
        Ok(Box::new(WsTransport { stream }))
    }
}

struct WsTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait]
impl Transport for WsTransport {
    async fn send(&mut self, text: String) -> Result<(), ConnectionError> {
        self.stream.send(Message::Text(text)).await?;
        Ok(())
    }

    async fn recv(&mut self) -> Option<Result<String, ConnectionError>> {
        loop {
            match self.stream.next().await? {
                Ok(Message::Text(text)) => return Some(Ok(text)),
                Ok(Message::Close(frame)) => {
                    debug!(?frame, "close frame received");
                    return None;
                }
                Ok(Message::Binary(bytes)) => {
                    debug!(len = bytes.len(), "ignoring binary frame");
                }
                // Pings are answered by tungstenite itself.
                Ok(_) => {}
                Err(error) => return Some(Err(error.into())),
            }
        }
    }

    async fn close(&mut self) {
        if let Err(error) = self.stream.close(None).await {
            debug!(%error, "websocket close failed");
        }
    }
}
