//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use sentinel_stream::{DirectiveAction, DirectiveControl};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, control: &Arc<C>)
where
    C: DirectiveControl + Sync + 'static,
{
    match action {
        UpdateAction::RunDirectiveAction { action, id } => {
            spawn_directive_action(Arc::clone(control), action, id, msg_tx);
        }
    }
}

/// Run one directive request and report the outcome to the event loop.
///
/// The task is detached: nothing cancels it once started.
pub fn spawn_directive_action<C>(
    control: Arc<C>,
    action: DirectiveAction,
    id: String,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    C: DirectiveControl + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("{} directive {}", action.label(), id);
        let result = control.perform(action, &id).await.map_err(|e| {
            if e.is_recoverable() {
                warn!("{} directive {} failed: {}", action.label(), id, e);
            } else {
                error!("{} directive {} failed: {}", action.label(), id, e);
            }
            e.to_string()
        });

        if msg_tx
            .send(Message::DirectiveActionCompleted { action, id, result })
            .await
            .is_err()
        {
            warn!("{} result dropped: event loop closed", action.label());
        }
    })
}
