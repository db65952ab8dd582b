//! Page templates.
//!
//! # Responsibilities
//! - Parse template sources into text and field segments
//! - Substitute a page's `Title` and `Body` into a parsed template
//! - Hold the fixed set of named templates (`view`, `edit`)
//!
//! # Template Syntax
//! ```text
//! {{.Title}}   page title
//! {{.Body}}    page body as text
//! ```
//! Whitespace inside the braces is ignored. Substituted values are HTML-escaped.
//!
//! # Design Decisions
//! - All templates parsed once at startup; a bad template fails startup
//! - The set is immutable after construction and shared via `Arc`

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::WikiError;
use crate::storage::Page;

/// Names of the templates every set must provide.
pub const TEMPLATE_NAMES: [&str; 2] = ["view", "edit"];

const BUILTIN_VIEW: &str = include_str!("../../templates/view.html");
const BUILTIN_EDIT: &str = include_str!("../../templates/edit.html");

/// Errors raised while loading or parsing templates.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to read template {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template {name}: {message}")]
    Parse { name: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(Field),
}

/// A parsed template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source.
    pub fn parse(name: &str, source: &str) -> Result<Self, TemplateError> {
        let parse_error = |message: String| TemplateError::Parse {
            name: name.to_string(),
            message,
        };

        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after_open = &rest[start + 2..];
            let end = after_open
                .find("}}")
                .ok_or_else(|| parse_error("unclosed action".to_string()))?;

            let field = match after_open[..end].trim() {
                ".Title" => Field::Title,
                ".Body" => Field::Body,
                other => return Err(parse_error(format!("unknown field {other:?}"))),
            };
            segments.push(Segment::Field(field));
            rest = &after_open[end + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            segments,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Substitute `page` into the template.
    pub fn render(&self, page: &Page) -> String {
        let body = page.body_text();
        let mut html = String::with_capacity(self.len_hint() + page.title.len() + body.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => html.push_str(text),
                Segment::Field(Field::Title) => html.push_str(&escape(&page.title)),
                Segment::Field(Field::Body) => html.push_str(&escape(&body)),
            }
        }
        html
    }

    fn len_hint(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Text(t) => t.len(),
                Segment::Field(_) => 0,
            })
            .sum()
    }
}

/// Named, pre-parsed templates.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: HashMap<String, Template>,
}

impl TemplateSet {
    /// Templates compiled into the binary.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_sources([("view", BUILTIN_VIEW), ("edit", BUILTIN_EDIT)])
    }

    /// Load `view.html` and `edit.html` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, TemplateError> {
        let mut sources = Vec::with_capacity(TEMPLATE_NAMES.len());
        for name in TEMPLATE_NAMES {
            let path = dir.join(format!("{name}.html"));
            let source = std::fs::read_to_string(&path)
                .map_err(|source| TemplateError::Io { path: path.clone(), source })?;
            tracing::debug!(template = name, path = %path.display(), "Template loaded");
            sources.push((name, source));
        }
        Self::from_sources(sources)
    }

    /// Parse a set from `(name, source)` pairs.
    pub fn from_sources<I, S>(sources: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = (&'static str, S)>,
        S: AsRef<str>,
    {
        let mut templates = HashMap::new();
        for (name, source) in sources {
            templates.insert(name.to_string(), Template::parse(name, source.as_ref())?);
        }
        for name in TEMPLATE_NAMES {
            if !templates.contains_key(name) {
                return Err(TemplateError::Parse {
                    name: name.to_string(),
                    message: "template missing".to_string(),
                });
            }
        }
        Ok(Self { templates })
    }

    /// Render the template called `name` with `page`.
    pub fn render(&self, name: &str, page: &Page) -> Result<String, WikiError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| WikiError::Render(format!("template {name:?} not defined")))?;
        Ok(template.render(page))
    }
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&#34;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
