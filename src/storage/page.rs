//! Page entity.

/// A titled page body.
///
/// The body is raw bytes; nothing is interpreted or escaped until render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// A page with no content yet.
    pub fn empty(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    /// File name this page persists under.
    pub fn file_name(&self) -> String {
        file_name_for(&self.title)
    }

    /// Body as text, replacing invalid UTF-8 sequences.
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// File name for a title: `<title>.txt`.
pub fn file_name_for(title: &str) -> String {
    format!("{title}.txt")
}
