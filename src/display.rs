//! Where customer-facing messages go.
//!
//! The machine never prints. It hands every message to a [`MessageSink`],
//! which the embedding program implements for its own output.

/// Receiver for text shown to the customer.
pub trait MessageSink {
    fn display_message(&mut self, text: &str);
}

/// Writes every message to standard output, one per line.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn display_message(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Keeps every message in memory, in the order it was shown.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    messages: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Whether any message so far contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    /// Drop and return everything recorded so far.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl MessageSink for RecordingSink {
    fn display_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

impl<T: MessageSink + ?Sized> MessageSink for &mut T {
    fn display_message(&mut self, text: &str) {
        (**self).display_message(text);
    }
}

impl<T: MessageSink + ?Sized> MessageSink for Box<T> {
    fn display_message(&mut self, text: &str) {
        (**self).display_message(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.display_message("first");
        sink.display_message("second");

        assert_eq!(sink.messages(), &["first".to_string(), "second".to_string()]);
        assert_eq!(sink.last(), Some("second"));
        assert!(sink.contains("fir"));
    }

    #[test]
    fn drain_empties_the_sink() {
        let mut sink = RecordingSink::new();
        sink.display_message("hello");

        assert_eq!(sink.drain(), vec!["hello".to_string()]);
        assert!(sink.messages().is_empty());
        assert!(sink.last().is_none());
    }

    #[test]
    fn boxed_sink_forwards_messages() {
        let mut recording = RecordingSink::new();
        {
            let mut boxed: Box<dyn MessageSink + '_> = Box::new(&mut recording);
            boxed.display_message("through a box");
        }
        assert_eq!(recording.last(), Some("through a box"));
    }
}
