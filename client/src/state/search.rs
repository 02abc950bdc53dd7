//! Debounce state for the search input.
//!
//! DESIGN
//! ======
//! The component owns the timer; this type owns the decisions. Every keystroke
//! bumps a token and the timer carries that token back on expiry, so a timer
//! whose token is no longer pending is a no-op. Clearing the input commits
//! immediately instead of scheduling.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Token identifying one scheduled debounce timer.
pub type DebounceToken = u64;

/// What the owner should do after a keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEffect {
    /// Commit this value now without waiting.
    Commit(String),
    /// Start a timer and call [`SearchDraft::settle`] with `token` when it fires.
    Schedule { token: DebounceToken, delay_ms: u32 },
}

/// Draft text of a debounced search box, independent of the committed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchDraft {
    draft: String,
    focused: bool,
    debounce_ms: u32,
    min_chars: usize,
    seq: DebounceToken,
    pending: Option<DebounceToken>,
}

impl SearchDraft {
    #[must_use]
    pub fn new(value: &str, debounce_ms: u32, min_chars: usize) -> Self {
        Self {
            draft: value.to_owned(),
            focused: false,
            debounce_ms,
            min_chars,
            seq: 0,
            pending: None,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a raw keystroke.
    pub fn input(&mut self, text: &str) -> InputEffect {
        text.clone_into(&mut self.draft);
        self.seq += 1;
        if text.is_empty() {
            self.pending = None;
            return InputEffect::Commit(String::new());
        }
        self.pending = Some(self.seq);
        InputEffect::Schedule { token: self.seq, delay_ms: self.debounce_ms }
    }

    /// Timer expiry. Returns the value to commit, at most once per token.
    pub fn settle(&mut self, token: DebounceToken) -> Option<String> {
        if self.pending != Some(token) {
            return None;
        }
        self.pending = None;
        passes_length_gate(&self.draft, self.min_chars).then(|| self.draft.clone())
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Adopt an externally changed value unless the user is typing.
    ///
    /// Returns `true` when the draft was overwritten.
    pub fn sync_external(&mut self, value: &str) -> bool {
        if self.focused || self.draft == value {
            return false;
        }
        value.clone_into(&mut self.draft);
        self.pending = None;
        true
    }

    /// Drop any pending timer; its later expiry commits nothing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// A committed term must be empty or at least `min_chars` characters long.
#[must_use]
pub fn passes_length_gate(value: &str, min_chars: usize) -> bool {
    value.is_empty() || value.chars().count() >= min_chars
}
