//! Stream wiring - connects the two push streams to the event loop.

use sentinel_core::StreamKind;
use sentinel_stream::{Endpoints, StreamClient, StreamHandler};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::message::{Message, StreamEvent};

/// Forwards stream callbacks to the TEA loop as [`Message::Stream`].
pub struct ChannelHandler {
    kind: StreamKind,
    tx: mpsc::Sender<Message>,
}

impl ChannelHandler {
    pub fn new(kind: StreamKind, tx: mpsc::Sender<Message>) -> Self {
        Self { kind, tx }
    }

    async fn forward(&self, event: StreamEvent) {
        let message = Message::Stream {
            kind: self.kind,
            event,
        };
        if self.tx.send(message).await.is_err() {
            debug!("{} stream event dropped: event loop closed", self.kind.label());
        }
    }
}

impl StreamHandler for ChannelHandler {
    async fn on_open(&mut self) {
        self.forward(StreamEvent::Opened).await;
    }

    async fn on_message(&mut self, text: String) {
        self.forward(StreamEvent::Received(text)).await;
    }

    async fn on_error(&mut self, detail: String) {
        self.forward(StreamEvent::Failed(detail)).await;
    }

    async fn on_close(&mut self) {
        self.forward(StreamEvent::Closed).await;
    }
}

/// The two live stream connections
pub struct StreamClients {
    pub logs: StreamClient,
    pub directives: StreamClient,
}

impl StreamClients {
    /// Close both connections and wait for their tasks to finish.
    pub async fn shutdown(self) {
        info!("Closing stream connections");
        tokio::join!(self.logs.shutdown(), self.directives.shutdown());
    }
}

/// Open both push streams. Connection outcomes arrive as messages.
pub fn spawn_streams(endpoints: &Endpoints, tx: mpsc::Sender<Message>) -> StreamClients {
    let logs = StreamClient::spawn(
        endpoints.logs.clone(),
        ChannelHandler::new(StreamKind::Logs, tx.clone()),
    );
    let directives = StreamClient::spawn(
        endpoints.directives.clone(),
        ChannelHandler::new(StreamKind::Directives, tx),
    );
    StreamClients { logs, directives }
}
