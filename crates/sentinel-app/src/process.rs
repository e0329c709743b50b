//! Message processing - runs the TEA update loop and dispatches actions

use std::sync::Arc;

use sentinel_stream::DirectiveControl;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and its follow-ups through the TEA update function.
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    control: &Arc<C>,
) where
    C: DirectiveControl + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), control);
        }

        msg = result.message;
    }
}
