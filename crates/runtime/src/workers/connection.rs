//! Connection worker that owns the authoritative [`Session`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), relays
//! frames to and from the game server, and publishes [`Event`]s. The link
//! cycles through three states: connecting, open, and waiting to reconnect.
//! Each state awaits the command channel alongside its own work, so a shutdown
//! (or the last handle going away) interrupts any of them.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant};
use tracing::{debug, error, info, warn};

use game_core::{EditRequest, Grid, MoveRequest, Request};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus};
use crate::protocol::{ClientMessage, ServerMessage};
use crate::session::{Dispatch, Effects, Session, SessionSnapshot};
use crate::theme::ThemeKind;
use crate::transport::{Connector, Transport};

/// Commands that can be sent to the connection worker
pub enum Command {
    StartGame {
        size: usize,
        reply: oneshot::Sender<Result<Dispatch>>,
    },
    Move {
        request: MoveRequest,
        reply: oneshot::Sender<Dispatch>,
    },
    Edit {
        request: EditRequest,
        reply: oneshot::Sender<Dispatch>,
    },
    /// Renderer's copy of the board after a redraw.
    SyncGrid {
        grid: Grid,
        reply: oneshot::Sender<()>,
    },
    SetTheme {
        theme: ThemeKind,
        reply: oneshot::Sender<()>,
    },
    QueryStatus {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

enum Link {
    Connecting,
    Open(Box<dyn Transport>),
    Reconnecting(Instant),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Writing to the transport failed; the link must be torn down.
    LinkLost,
    Stop,
}

/// Background task that owns the server link.
pub struct ConnectionWorker {
    session: Session,
    connector: Arc<dyn Connector>,
    server_url: String,
    reconnect_delay: Duration,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    rng: StdRng,
}

impl ConnectionWorker {
    pub fn new(
        session: Session,
        connector: Arc<dyn Connector>,
        server_url: String,
        reconnect_delay: Duration,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        rng: StdRng,
    ) -> Self {
        Self {
            session,
            connector,
            server_url,
            reconnect_delay,
            command_rx,
            event_bus,
            rng,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        let theme = self.session.theme_effects();
        self.publish(theme.events);

        let mut link = Link::Connecting;
        loop {
            let next = match link {
                Link::Connecting => self.connect().await,
                Link::Open(transport) => self.drive(transport).await,
                Link::Reconnecting(deadline) => self.wait_for_reconnect(deadline).await,
            };
            match next {
                Some(next) => link = next,
                None => break,
            }
        }

        info!("connection worker stopped");
    }

    async fn connect(&mut self) -> Option<Link> {
        let effects = self.session.connecting();
        self.publish(effects.events);

        let connector = Arc::clone(&self.connector);
        let url = self.server_url.clone();
        let attempt = async move { connector.connect(&url).await };
        tokio::pin!(attempt);

        loop {
            tokio::select! {
                result = &mut attempt => {
                    return Some(match result {
                        Ok(transport) => {
                            info!(url = %self.server_url, "connected to game server");
                            self.open(transport).await
                        }
                        Err(error) => {
                            warn!(url = %self.server_url, %error, "connection attempt failed");
                            self.lost()
                        }
                    });
                }
                command = self.command_rx.recv() => {
                    let command = command?;
                    if self.handle_command(command, None).await == Flow::Stop {
                        return None;
                    }
                }
            }
        }
    }

    async fn open(&mut self, mut transport: Box<dyn Transport>) -> Link {
        let effects = self.session.opened();
        match self.apply(effects, Some(transport.as_mut())).await {
            Flow::LinkLost => self.lost(),
            _ => Link::Open(transport),
        }
    }

    async fn drive(&mut self, mut transport: Box<dyn Transport>) -> Option<Link> {
        loop {
            tokio::select! {
                frame = transport.recv() => match frame {
                    Some(Ok(text)) => {
                        if self.on_frame(&text, transport.as_mut()).await == Flow::LinkLost {
                            return Some(self.lost());
                        }
                    }
                    Some(Err(error)) => {
                        warn!(%error, "websocket error");
                        transport.close().await;
                        return Some(self.lost());
                    }
                    None => {
                        info!("game server closed the connection");
                        return Some(self.lost());
                    }
                },
                command = self.command_rx.recv() => {
                    let Some(command) = command else {
                        transport.close().await;
                        return None;
                    };
                    match self.handle_command(command, Some(transport.as_mut())).await {
                        Flow::Continue => {}
                        Flow::LinkLost => return Some(self.lost()),
                        Flow::Stop => {
                            transport.close().await;
                            return None;
                        }
                    }
                }
            }
        }
    }

    async fn wait_for_reconnect(&mut self, deadline: Instant) -> Option<Link> {
        let sleep = time::sleep_until(deadline);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                _ = &mut sleep => return Some(Link::Connecting),
                command = self.command_rx.recv() => {
                    let command = command?;
                    if self.handle_command(command, None).await == Flow::Stop {
                        return None;
                    }
                }
            }
        }
    }

    /// Record the loss and schedule exactly one reconnect attempt.
    fn lost(&mut self) -> Link {
        let effects = self.session.closed();
        self.publish(effects.events);
        info!(
            delay_ms = self.reconnect_delay.as_millis() as u64,
            "scheduling reconnect"
        );
        Link::Reconnecting(Instant::now() + self.reconnect_delay)
    }

    async fn on_frame(&mut self, text: &str, transport: &mut dyn Transport) -> Flow {
        let message = match ServerMessage::decode(text) {
            Ok(message) => message,
            Err(error) => {
                warn!(%error, frame = %text, "dropping malformed server frame");
                return Flow::Continue;
            }
        };
        debug!(?message, "server message");

        match self.session.receive(message) {
            Ok(effects) => self.apply(effects, Some(transport)).await,
            Err(error) => {
                warn!(%error, "dropping server update");
                Flow::Continue
            }
        }
    }

    async fn handle_command(
        &mut self,
        command: Command,
        transport: Option<&mut dyn Transport>,
    ) -> Flow {
        match command {
            Command::StartGame { size, reply } => match Grid::generate(size, &mut self.rng) {
                Ok(grid) => {
                    info!(size, "starting new game");
                    let (dispatch, effects) = self.session.start_game(grid);
                    let flow = self.apply(effects, transport).await;
                    let _ = reply.send(Ok(settle(dispatch, flow)));
                    flow
                }
                Err(error) => {
                    warn!(size, %error, "rejected new game");
                    let _ = reply.send(Err(RuntimeError::Grid(error)));
                    Flow::Continue
                }
            },
            Command::Move { request, reply } => {
                self.dispatch(Request::Move(request), reply, transport).await
            }
            Command::Edit { request, reply } => {
                self.dispatch(Request::Edit(request), reply, transport).await
            }
            Command::SyncGrid { grid, reply } => {
                self.session.sync_grid(grid);
                let _ = reply.send(());
                Flow::Continue
            }
            Command::SetTheme { theme, reply } => {
                let effects = self.session.set_theme(theme);
                self.publish(effects.events);
                let _ = reply.send(());
                Flow::Continue
            }
            Command::QueryStatus { reply } => {
                let _ = reply.send(self.session.snapshot());
                Flow::Continue
            }
            Command::Shutdown { reply } => {
                info!("shutdown requested");
                let _ = reply.send(());
                Flow::Stop
            }
        }
    }

    async fn dispatch(
        &mut self,
        request: Request,
        reply: oneshot::Sender<Dispatch>,
        transport: Option<&mut dyn Transport>,
    ) -> Flow {
        let label = request.label();
        let tile = request.tile();
        let (dispatch, effects) = self.session.submit(request);
        match dispatch {
            Dispatch::Sent => debug!(request = label, ?tile, "request sent"),
            Dispatch::Busy => {
                warn!(request = label, ?tile, "still waiting for the server, request dropped")
            }
            Dispatch::Offline => warn!(request = label, ?tile, "not connected, request dropped"),
        }

        let flow = self.apply(effects, transport).await;
        let _ = reply.send(settle(dispatch, flow));
        flow
    }

    /// Publish events in order, then write the outbound frame if any.
    async fn apply(&mut self, effects: Effects, transport: Option<&mut dyn Transport>) -> Flow {
        let Effects { events, outbound } = effects;
        self.publish(events);

        let Some(message) = outbound else {
            return Flow::Continue;
        };
        let Some(transport) = transport else {
            debug!(command = message.name(), "no open link for outbound frame");
            return Flow::Continue;
        };
        send(transport, &message).await
    }

    fn publish(&self, events: Vec<Event>) {
        for event in events {
            self.event_bus.publish(event);
        }
    }
}

async fn send(transport: &mut dyn Transport, message: &ClientMessage) -> Flow {
    let text = match message.encode() {
        Ok(text) => text,
        Err(error) => {
            error!(command = message.name(), %error, "failed to encode frame");
            return Flow::Continue;
        }
    };

    match transport.send(text).await {
        Ok(()) => Flow::Continue,
        Err(error) => {
            warn!(command = message.name(), %error, "failed to write frame");
            Flow::LinkLost
        }
    }
}

/// A frame that never reached the socket is reported as offline.
fn settle(dispatch: Dispatch, flow: Flow) -> Dispatch {
    if dispatch == Dispatch::Sent && flow == Flow::LinkLost {
        Dispatch::Offline
    } else {
        dispatch
    }
}
