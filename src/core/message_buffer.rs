//! Fixed-capacity rendering of log messages
//!
//! Formatting never allocates on the emit path: arguments are rendered into a
//! stack buffer and anything past the capacity is dropped. An optional
//! prefix (the `line N in F: ` annotation) has its own fixed allowance, so it
//! never eats into the message capacity.

use std::fmt::{self, Write};

/// Size of the render buffer in bytes.
pub const MAX_BUFFER_SIZE: usize = 1024;

/// Longest message, in bytes, that survives rendering.
pub const MAX_MESSAGE_LEN: usize = MAX_BUFFER_SIZE - 1;

/// Longest prefix, in bytes, kept in front of an annotated message.
pub const MAX_PREFIX_LEN: usize = 256;

pub struct MessageBuffer {
    buf: [u8; MAX_PREFIX_LEN + MAX_BUFFER_SIZE],
    len: usize,
    limit: usize,
    truncated: bool,
}

impl MessageBuffer {
    pub fn new() -> Self {
        Self {
            buf: [0; MAX_PREFIX_LEN + MAX_BUFFER_SIZE],
            len: 0,
            limit: MAX_MESSAGE_LEN,
            truncated: false,
        }
    }

    /// Render `args`, truncating at [`MAX_MESSAGE_LEN`].
    pub fn render(args: fmt::Arguments<'_>) -> Self {
        let mut buffer = Self::new();
        // Err only signals that the buffer filled up.
        let _ = buffer.write_fmt(args);
        buffer
    }

    /// Render `prefix` (cut at [`MAX_PREFIX_LEN`]) followed by `args` (cut at
    /// [`MAX_MESSAGE_LEN`]). Only the message part sets
    /// [`is_truncated`](Self::is_truncated).
    pub fn render_prefixed(prefix: fmt::Arguments<'_>, args: fmt::Arguments<'_>) -> Self {
        let mut buffer = Self::new();
        buffer.limit = MAX_PREFIX_LEN;
        let _ = buffer.write_fmt(prefix);

        buffer.limit = buffer.len + MAX_MESSAGE_LEN;
        buffer.truncated = false;
        let _ = buffer.write_fmt(args);
        buffer
    }

    pub fn as_str(&self) -> &str {
        // Writes stop on a char boundary, so this is always valid UTF-8.
        match std::str::from_utf8(&self.buf[..self.len]) {
            Ok(s) => s,
            Err(e) => std::str::from_utf8(&self.buf[..e.valid_up_to()]).unwrap_or_default(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for MessageBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.limit - self.len;
        if s.len() <= remaining {
            self.buf[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
            self.len += s.len();
            return Ok(());
        }

        let mut cut = remaining;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buf[self.len..self.len + cut].copy_from_slice(&s.as_bytes()[..cut]);
        self.len += cut;
        self.truncated = true;
        Err(fmt::Error)
    }
}

impl fmt::Debug for MessageBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuffer")
            .field("text", &self.as_str())
            .field("truncated", &self.truncated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_untouched() {
        let buffer = MessageBuffer::render(format_args!("planner {} took {}ms", "rrt", 42));
        assert_eq!(buffer.as_str(), "planner rrt took 42ms");
        assert!(!buffer.is_truncated());
    }

    #[test]
    fn test_exact_capacity_is_not_truncated() {
        let text = "x".repeat(MAX_MESSAGE_LEN);
        let buffer = MessageBuffer::render(format_args!("{}", text));
        assert_eq!(buffer.len(), MAX_MESSAGE_LEN);
        assert!(!buffer.is_truncated());
    }

    #[test]
    fn test_overlong_message_is_truncated() {
        let text = "y".repeat(MAX_BUFFER_SIZE * 3);
        let buffer = MessageBuffer::render(format_args!("{}", text));
        assert_eq!(buffer.len(), MAX_MESSAGE_LEN);
        assert!(buffer.is_truncated());
        assert!(buffer.as_str().chars().all(|c| c == 'y'));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 3-byte chars never line up with 1023 after a 1-byte lead-in.
        let text = format!("a{}", "€".repeat(MAX_BUFFER_SIZE));
        let buffer = MessageBuffer::render(format_args!("{}", text));
        assert!(buffer.is_truncated());
        assert!(buffer.len() <= MAX_MESSAGE_LEN);
        assert_eq!(buffer.as_str().len(), buffer.len());
        assert!(buffer.as_str().starts_with("a€"));
    }

    #[test]
    fn test_prefix_does_not_use_message_capacity() {
        let text = "m".repeat(MAX_MESSAGE_LEN);
        let buffer = MessageBuffer::render_prefixed(
            format_args!("line {} in {}: ", 42, "foo.rs"),
            format_args!("{}", text),
        );
        assert!(!buffer.is_truncated());
        assert_eq!(buffer.len(), "line 42 in foo.rs: ".len() + MAX_MESSAGE_LEN);
        assert!(buffer.as_str().starts_with("line 42 in foo.rs: mmm"));
    }

    #[test]
    fn test_overlong_prefix_is_cut_separately() {
        let name = "f".repeat(MAX_PREFIX_LEN * 2);
        let buffer = MessageBuffer::render_prefixed(
            format_args!("line 1 in {}: ", name),
            format_args!("kept whole"),
        );
        assert!(!buffer.is_truncated());
        assert_eq!(buffer.len(), MAX_PREFIX_LEN + "kept whole".len());
        assert!(buffer.as_str().ends_with("fkept whole"));
    }

    #[test]
    fn test_prefixed_message_truncation_is_reported() {
        let text = "n".repeat(MAX_BUFFER_SIZE * 2);
        let buffer =
            MessageBuffer::render_prefixed(format_args!("line 3 in a.rs: "), format_args!("{}", text));
        assert!(buffer.is_truncated());
        assert_eq!(buffer.len(), "line 3 in a.rs: ".len() + MAX_MESSAGE_LEN);
    }

    #[test]
    fn test_pieces_accumulate_until_full() {
        let mut buffer = MessageBuffer::new();
        for _ in 0..100 {
            let _ = buffer.write_str("0123456789");
        }
        assert_eq!(buffer.len(), 1000);
        assert!(buffer.write_str(&"z".repeat(50)).is_err());
        assert_eq!(buffer.len(), MAX_MESSAGE_LEN);
        assert!(buffer.as_str().ends_with(&"z".repeat(23)));
    }
}
