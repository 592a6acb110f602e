use super::ports::TextSource;

/// The leaf of every decorator chain: a fixed piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for Message {
    fn text(&self) -> String {
        self.text.clone()
    }
}
