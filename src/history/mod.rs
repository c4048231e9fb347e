use crate::models::chat::ChatTurn;

/// Hard cap on locally retained turns. Appending past it drops the oldest
/// entries so exactly the most recent `MAX_TURNS` remain.
pub const MAX_TURNS: usize = 20;

/// In-memory conversation history for one session. Not persisted; cleared
/// on explicit reset. Mutation goes through `&mut self`, so any use across
/// tasks must serialize access externally.
#[derive(Clone, Debug, Default)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    pub fn append(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
        if self.turns.len() > MAX_TURNS {
            let excess = self.turns.len() - MAX_TURNS;
            self.turns.drain(..excess);
        }
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Read-only view of the retained turns, oldest first.
    pub fn snapshot(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::Role;

    fn turn(i: usize) -> ChatTurn {
        let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
        ChatTurn::new(role, format!("message {}", i))
    }

    #[test]
    fn starts_empty() {
        let history = ChatHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn appends_in_order_below_the_cap() {
        let mut history = ChatHistory::new();
        for i in 0..5 {
            history.append(turn(i));
        }
        assert_eq!(history.len(), 5);
        assert_eq!(history.snapshot()[0].content, "message 0");
        assert_eq!(history.snapshot()[4].content, "message 4");
    }

    #[test]
    fn cap_keeps_only_the_most_recent_twenty() {
        let mut history = ChatHistory::new();
        for i in 0..27 {
            history.append(turn(i));
        }
        assert_eq!(history.len(), MAX_TURNS);
        let snapshot = history.snapshot();
        assert_eq!(snapshot[0].content, "message 7");
        assert_eq!(snapshot[MAX_TURNS - 1].content, "message 26");
    }

    #[test]
    fn length_never_exceeds_cap_at_any_point() {
        let mut history = ChatHistory::new();
        for i in 0..100 {
            history.append(turn(i));
            assert!(history.len() <= MAX_TURNS);
        }
    }

    #[test]
    fn clear_empties_the_store() {
        let mut history = ChatHistory::new();
        for i in 0..3 {
            history.append(turn(i));
        }
        history.clear();
        assert!(history.is_empty());
        assert!(history.snapshot().is_empty());
    }
}
