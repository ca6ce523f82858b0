//! Telegram integration: command parsing, routing, and the two transports
//! (long-poll and webhook).

pub mod command;
pub mod format;
pub mod messenger;
pub mod polling;
pub mod router;
pub mod webhook;

use teloxide::types::Message;
use tracing::error;

use crate::domain::UserId;
use crate::error::Result;
use crate::port::outbound::messenger::{Messenger, Outgoing};

use self::router::{render, Router};

/// Handle one inbound chat message.
///
/// This is the handler-error boundary shared by both transports: a failing
/// command handler is logged and answered with the generic apology so no
/// update goes unacknowledged.
///
/// # Errors
///
/// Returns an error only when the apology itself could not be delivered.
pub async fn handle_message(
    router: &Router,
    messenger: &dyn Messenger,
    message: &Message,
) -> Result<()> {
    let Some(text) = message.text() else {
        return Ok(());
    };
    let Some(user) = message.from.as_ref() else {
        return Ok(());
    };
    let caller = UserId::new(user.id.to_string());

    if let Err(err) = router.handle_text(&caller, text).await {
        error!(update = "message", error = %err, "command handler failed");
        messenger
            .send(&caller, &Outgoing::text(render::GENERIC_ERROR))
            .await?;
    }
    Ok(())
}
