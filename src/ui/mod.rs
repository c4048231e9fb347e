pub mod console;

use crate::models::chat::RenderedMessage;
use uuid::Uuid;

/// Render-command sink for the chat session. The session only ever emits
/// commands through this seam; it never reads presentation state back.
pub trait UiSurface: Send + Sync {
    /// Appends a rendered message to the conversation view.
    fn append_message(&self, message: RenderedMessage);

    /// Shows the pending-response indicator and returns a handle for it.
    fn show_pending(&self) -> Uuid;

    /// Removes a previously shown pending indicator.
    fn retract_pending(&self, id: Uuid);

    /// Removes every rendered message from the view.
    fn clear_all(&self);
}
