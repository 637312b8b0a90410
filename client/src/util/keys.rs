//! Keyboard mapping for the chat input.
//!
//! Plain Enter sends; Shift+Enter falls through to the textarea so it inserts
//! a line break.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// What the input box should do with a keydown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Prevent the default and submit the buffer.
    Submit,
    /// Let the textarea insert a newline.
    InsertNewline,
    /// Not ours; leave the event alone.
    Passthrough,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value and the Shift modifier to an action.
    pub fn from_key(key: &str, shift_held: bool) -> Self {
        match (key, shift_held) {
            ("Enter", false) => Self::Submit,
            ("Enter", true) => Self::InsertNewline,
            _ => Self::Passthrough,
        }
    }
}
