use crate::backend::{ BackendReply, ChatBackend };
use crate::format::format_educational;
use crate::history::ChatHistory;
use crate::models::chat::{ ChatTurn, RenderedMessage, Role, Sender };
use crate::render::render_markdown;
use crate::ui::UiSurface;
use log::{ debug, warn };
use std::sync::Arc;
use std::time::Duration;

pub const GREETING: &str =
    "Hello! I'm EduBot, your AI education assistant. I can help you with subjects like Math, Science, History, Literature, and more. What would you like to learn about today?";

const CONNECTION_ERROR: &str = "Error: Could not connect to the server. Please try again.";

/// Simulated typing: 10ms per reply character, capped at one second.
const TYPING_DELAY_PER_CHAR_MS: u64 = 10;
const TYPING_DELAY_CAP_MS: u64 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

/// Orchestrates one chat conversation: owns the bounded history, drives the
/// backend, runs replies through the educational formatter and the markdown
/// renderer, and emits render commands to the UI surface.
///
/// Session-scoped; created once at startup and cleared only by an explicit
/// user-initiated [`ChatSession::reset`].
pub struct ChatSession {
    history: ChatHistory,
    backend: Arc<dyn ChatBackend>,
    surface: Arc<dyn UiSurface>,
    state: SessionState,
    simulate_typing: bool,
}

impl ChatSession {
    pub fn new(backend: Arc<dyn ChatBackend>, surface: Arc<dyn UiSurface>) -> Self {
        Self {
            history: ChatHistory::new(),
            backend,
            surface,
            state: SessionState::Idle,
            simulate_typing: true,
        }
    }

    /// Turns the simulated typing delay off (useful for scripted runs).
    pub fn with_typing_simulation(mut self, enabled: bool) -> Self {
        self.simulate_typing = enabled;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Emits the welcome message: once at session start and again after
    /// every reset.
    pub fn greet(&self) {
        self.surface.append_message(RenderedMessage::new(Sender::Bot, render_markdown(GREETING)));
    }

    /// Sends one user message through the full pipeline. Whitespace-only
    /// input is a no-op. Every failure path ends in a user-visible message
    /// and a return to `Idle`; nothing here is fatal to the session.
    pub async fn send(&mut self, message: &str) {
        if message.trim().is_empty() {
            return;
        }
        self.state = SessionState::AwaitingResponse;

        self.history.append(ChatTurn::new(Role::User, message));
        // User text goes straight to the markdown renderer; the educational
        // reformatter applies to replies only.
        self.surface.append_message(RenderedMessage::new(Sender::User, render_markdown(message)));

        let pending = self.surface.show_pending();
        let outcome = self.backend.send_message(message).await;
        self.surface.retract_pending(pending);

        match outcome {
            Ok(BackendReply::Reply(reply)) => {
                self.history.append(ChatTurn::new(Role::Assistant, reply.clone()));
                let html = render_markdown(&format_educational(&reply));
                if self.simulate_typing {
                    tokio::time::sleep(typing_delay(&reply)).await;
                }
                self.surface.append_message(RenderedMessage::new(Sender::Bot, html));
            }
            Ok(BackendReply::AppError(error)) => {
                debug!("backend signalled an application error: {}", error);
                self.surface.append_message(
                    RenderedMessage::new(Sender::Error, format!("Error: {}", error))
                );
            }
            Err(e) => {
                warn!("chat request failed: {}", e);
                self.surface.append_message(RenderedMessage::new(Sender::Error, CONNECTION_ERROR));
            }
        }
        self.state = SessionState::Idle;
    }

    /// Clears the local history and the surface, then re-emits the greeting.
    pub fn reset(&mut self) {
        self.history.clear();
        self.surface.clear_all();
        self.greet();
        debug!("session reset");
    }
}

fn typing_delay(reply: &str) -> Duration {
    let chars = reply.chars().count() as u64;
    Duration::from_millis((chars * TYPING_DELAY_PER_CHAR_MS).min(TYPING_DELAY_CAP_MS))
}
