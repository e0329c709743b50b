//! Push-stream WebSocket client.
//!
//! A [`StreamClient`] owns one WebSocket connection to a server push endpoint
//! (`/ws/logs` or `/ws/directives`). A background Tokio task reads frames and
//! reports every lifecycle transition to a [`StreamHandler`]:
//!
//! ```text
//! ┌──────────────┐   connect   ┌──────────────────────────┐
//! │ StreamClient │────────────▶│ background task          │
//! │              │   cmd chan  │                          │
//! │ shutdown() ──┼────────────▶│  on_open()               │
//! └──────────────┘             │  on_message(text) ...    │──▶ StreamHandler
//!                              │  on_error(detail)        │
//!                              │  on_close()              │
//!                              └──────────────────────────┘
//! ```
//!
//! There is no reconnection: once `on_close` has fired the task exits and the
//! client stays disconnected.

use std::sync::{Arc, RwLock};

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use sentinel_core::Error;
use tracing::{debug, info, warn};
use url::Url;

// ---------------------------------------------------------------------------
// StreamHandler
// ---------------------------------------------------------------------------

/// Receives the lifecycle signals of one stream connection.
///
/// Callbacks for a single client are invoked sequentially from its background
/// task. `on_close` is always the last callback and fires exactly once.
#[trait_variant::make(StreamHandler: Send)]
pub trait LocalStreamHandler {
    /// The WebSocket handshake completed.
    async fn on_open(&mut self);

    /// A text frame arrived. Binary frames are decoded as lossy UTF-8.
    async fn on_message(&mut self, text: String);

    /// The connection attempt or an established connection failed.
    async fn on_error(&mut self, detail: String);

    /// The connection is gone and will not be re-established.
    async fn on_close(&mut self);
}

// ---------------------------------------------------------------------------
// Constants / types
// ---------------------------------------------------------------------------

/// Capacity of the command channel.
const CMD_CHANNEL_CAPACITY: usize = 4;

/// Current connection state of a [`StreamClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Handshake in progress.
    Connecting,
    /// Connected and receiving frames.
    Connected,
    /// Closed, failed, or shut down. Terminal.
    Disconnected,
}

/// Internal messages sent from the public API to the background task.
enum ClientCommand {
    /// Send a Close frame and stop the background task.
    Shutdown,
}

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

// ---------------------------------------------------------------------------
// StreamClient
// ---------------------------------------------------------------------------

/// One persistent push-stream connection.
///
/// Dropping the client closes the command channel, which makes the background
/// task send a Close frame and exit.
pub struct StreamClient {
    url: Url,
    cmd_tx: mpsc::Sender<ClientCommand>,
    state: Arc<RwLock<ConnectionState>>,
    task: JoinHandle<()>,
}

impl std::fmt::Debug for StreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamClient")
            .field("url", &self.url.as_str())
            .field("connection_state", &self.connection_state())
            .finish()
    }
}

impl StreamClient {
    /// Start connecting to `url` in the background.
    ///
    /// Returns immediately; the outcome of the handshake is reported to
    /// `handler` (`on_open`, or `on_error` followed by `on_close`).
    pub fn spawn<H>(url: Url, handler: H) -> Self
    where
        H: StreamHandler + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel(CMD_CHANNEL_CAPACITY);
        let state = Arc::new(RwLock::new(ConnectionState::Connecting));

        let task = tokio::spawn(run_stream_task(
            url.to_string(),
            handler,
            cmd_rx,
            Arc::clone(&state),
        ));

        Self {
            url,
            cmd_tx,
            state,
            task,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Return the current connection state.
    pub fn connection_state(&self) -> ConnectionState {
        *self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Return `true` once the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Close the connection gracefully and wait for the task to exit.
    ///
    /// The handler still receives `on_close`.
    pub async fn shutdown(self) {
        // The task may already have exited; a closed channel is fine.
        let _ = self.cmd_tx.send(ClientCommand::Shutdown).await;
        if let Err(e) = self.task.await {
            warn!("Stream task for {} ended abnormally: {}", self.url, e);
        }
    }
}

// ---------------------------------------------------------------------------
// Background task
// ---------------------------------------------------------------------------

async fn run_stream_task<H: StreamHandler>(
    url: String,
    mut handler: H,
    mut cmd_rx: mpsc::Receiver<ClientCommand>,
    state: Arc<RwLock<ConnectionState>>,
) {
    info!("Connecting to stream at {}", url);

    let ws_stream = tokio::select! {
        result = connect_async(url.as_str()) => match result {
            Ok((ws_stream, _response)) => ws_stream,
            Err(err) => {
                warn!("Stream {}: connect failed: {}", url, err);
                set_state(&state, ConnectionState::Disconnected);
                handler.on_error(Error::connect(&url, err.to_string()).to_string()).await;
                handler.on_close().await;
                return;
            }
        },
        _ = cmd_rx.recv() => {
            debug!("Stream {}: shut down before connecting", url);
            set_state(&state, ConnectionState::Disconnected);
            handler.on_close().await;
            return;
        }
    };

    set_state(&state, ConnectionState::Connected);
    info!("Stream {}: connected", url);
    handler.on_open().await;

    run_io_loop(&url, ws_stream, &mut cmd_rx, &mut handler).await;

    set_state(&state, ConnectionState::Disconnected);
    handler.on_close().await;
    debug!("Stream {}: background task exiting", url);
}

/// Forward frames to the handler until the connection ends or a shutdown is
/// requested.
async fn run_io_loop<H: StreamHandler>(
    url: &str,
    ws_stream: WsStream,
    cmd_rx: &mut mpsc::Receiver<ClientCommand>,
    handler: &mut H,
) {
    let (mut ws_sink, mut ws_stream) = ws_stream.split();

    loop {
        tokio::select! {
            frame = ws_stream.next() => {
                match frame {
                    Some(Ok(WsMessage::Text(text))) => {
                        handler.on_message(text.as_str().to_string()).await;
                    }
                    Some(Ok(WsMessage::Binary(bytes))) => {
                        handler.on_message(String::from_utf8_lossy(&bytes).into_owned()).await;
                    }
                    Some(Ok(WsMessage::Close(frame))) => {
                        debug!("Stream {}: received Close frame {:?}", url, frame);
                        return;
                    }
                    Some(Ok(_)) => {
                        // Ping/Pong/raw frames
                    }
                    Some(Err(err)) => {
                        warn!("Stream {}: read error: {}", url, err);
                        handler.on_error(err.to_string()).await;
                        return;
                    }
                    None => {
                        debug!("Stream {}: ended", url);
                        return;
                    }
                }
            }

            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(ClientCommand::Shutdown) | None => {
                        debug!("Stream {}: shutting down", url);
                        send_close(&mut ws_sink).await;
                        return;
                    }
                }
            }
        }
    }
}

fn set_state(state: &RwLock<ConnectionState>, next: ConnectionState) {
    let mut guard = state.write().unwrap_or_else(|e| e.into_inner());
    *guard = next;
}

/// Send a WebSocket Close frame, ignoring any write errors.
async fn send_close(ws_sink: &mut SplitSink<WsStream, WsMessage>) {
    let _ = ws_sink.send(WsMessage::Close(None)).await;
    let _ = ws_sink.close().await;
}
