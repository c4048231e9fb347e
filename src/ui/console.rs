use super::UiSurface;
use crate::models::chat::{ RenderedMessage, Sender };
use log::debug;
use uuid::Uuid;

const WRAP_COLUMNS: usize = 80;

/// Terminal rendering of the chat surface: message HTML is converted to
/// wrapped plain text and printed to stdout with a timestamp line.
pub struct ConsoleSurface {
    columns: usize,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self { columns: WRAP_COLUMNS }
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl UiSurface for ConsoleSurface {
    fn append_message(&self, message: RenderedMessage) {
        let label = match message.sender {
            Sender::User => "you",
            Sender::Bot => "edubot",
            Sender::Error => "error",
        };
        let body = match message.sender {
            // Error messages carry plain text, not HTML.
            Sender::Error => message.html.clone(),
            _ => html2text::from_read(message.html.as_bytes(), self.columns),
        };
        println!("[{}] {}", message.timestamp.format("%H:%M"), label);
        println!("{}", body.trim_end());
        println!();
    }

    fn show_pending(&self) -> Uuid {
        let id = Uuid::new_v4();
        println!("...");
        debug!("pending indicator {} shown", id);
        id
    }

    fn retract_pending(&self, id: Uuid) {
        // stdout is append-only; the cue simply is not repeated.
        debug!("pending indicator {} retracted", id);
    }

    fn clear_all(&self) {
        print!("\x1b[2J\x1b[H");
    }
}
