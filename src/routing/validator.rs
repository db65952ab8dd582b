//! Page path validation.
//!
//! # Responsibilities
//! - Match the request path against the page route pattern
//! - Extract the action and title from the capture groups
//! - Reject everything else before any file is touched
//!
//! # Design Decisions
//! - Pattern compiled once, shared read-only across requests
//! - Titles are alphanumeric only, so a title can never name a path outside the storage directory
//! - Titles always come from the capture group, never from slicing the path
//! - The pattern sees the percent-decoded path, so `/view/%46oo` is page `Foo`;
//!   encoded `/`, `.` or whitespace decode to characters the pattern rejects

use std::fmt;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::error::WikiError;

/// Allow-list pattern for page paths.
pub const PAGE_PATH_PATTERN: &str = r"^/(view|edit|save)/([A-Za-z0-9]+)$";

/// Page lifecycle step named by the first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Edit,
    Save,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Edit => "edit",
            Action::Save => "save",
        }
    }

    /// Path for this action on the given title (e.g. `/view/Foo`).
    pub fn path_for(&self, title: &str) -> String {
        format!("/{}/{}", self.as_str(), title)
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "view" => Some(Action::View),
            "edit" => Some(Action::Edit),
            "save" => Some(Action::Save),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful path match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    pub action: Action,
    pub title: String,
}

/// Compiled page path validator.
#[derive(Debug, Clone)]
pub struct TitleValidator {
    pattern: Regex,
}

impl TitleValidator {
    pub fn new() -> Self {
        Self {
            // The pattern is a literal checked by the tests below.
            pattern: Regex::new(PAGE_PATH_PATTERN).expect("page path pattern is valid"),
        }
    }

    /// Match a request path, returning the action and title.
    ///
    /// `path` is the raw URI path; it is percent-decoded before matching and a
    /// path that does not decode to UTF-8 is rejected.
    pub fn match_path(&self, path: &str) -> Result<PageRoute, WikiError> {
        let invalid = || WikiError::InvalidTitle(path.to_string());
        let decoded = percent_decode_str(path).decode_utf8().map_err(|_| invalid())?;
        let caps = self.pattern.captures(&decoded).ok_or_else(invalid)?;
        let action = caps
            .get(1)
            .and_then(|m| Action::from_segment(m.as_str()))
            .ok_or_else(invalid)?;
        let title = caps.get(2).ok_or_else(invalid)?.as_str().to_string();
        Ok(PageRoute { action, title })
    }

    /// Extract the title for a handler bound to `expected`.
    ///
    /// A path whose action segment differs from `expected` is rejected.
    pub fn title_for(&self, expected: Action, path: &str) -> Result<String, WikiError> {
        let route = self.match_path(path)?;
        if route.action != expected {
            return Err(WikiError::InvalidTitle(path.to_string()));
        }
        Ok(route.title)
    }
}

impl Default for TitleValidator {
    fn default() -> Self {
        Self::new()
    }
}
