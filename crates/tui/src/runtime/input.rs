//! Terminal event forwarding.
//!
//! Responsibilities:
//! - Read crossterm's `EventStream` and forward events as `Action`s.
//! - Apply backpressure per event kind.
//!
//! Does NOT handle:
//! - Resolving keys into commands (see `input::keymap`).
//!
//! Invariants:
//! - Keys, clicks, releases, resize and focus events are never dropped; they
//!   await channel space.
//! - Pointer motion (moves and drags) is dropped when the channel is full.

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc::{Sender, error::TrySendError};

use crate::action::Action;

/// Map a terminal event to an action, if it carries one.
pub fn event_to_action(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Action::Input(key)),
        Event::Mouse(mouse) => Some(Action::Mouse(mouse)),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        Event::FocusLost => Some(Action::FocusLost),
        _ => None,
    }
}

/// Forward terminal events to `tx` until the stream ends or the channel closes.
pub async fn forward_events(tx: Sender<Action>) {
    let mut reader = EventStream::new();

    while let Some(event_result) = reader.next().await {
        let event = match event_result {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(error = %e, "Terminal event stream failed");
                break;
            }
        };

        let Some(action) = event_to_action(event) else {
            continue;
        };

        if !forward(&tx, action).await {
            break;
        }
    }
}

/// Send `action` to the app, dropping pointer motion when the channel is full.
/// Returns `false` once the receiver is gone.
async fn forward(tx: &Sender<Action>, action: Action) -> bool {
    if !action.is_pointer_motion() {
        return tx.send(action).await.is_ok();
    }
    match tx.try_send(action) {
        Ok(()) => true,
        Err(TrySendError::Full(_)) => {
            tracing::debug!("Input channel full, dropping pointer motion");
            true
        }
        Err(TrySendError::Closed(_)) => false,
    }
}
