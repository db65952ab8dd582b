//! File-backed page store.
//!
//! # Responsibilities
//! - Read `<title>.txt` from the storage directory
//! - Write `<title>.txt`, creating or truncating it
//!
//! # Design Decisions
//! - No cache: every request hits the file system
//! - Writes go straight to the target file, no temp file + rename; a failed write may leave it truncated
//! - Concurrent saves to one title are not serialized (last writer wins)
//! - Any read failure is reported as `NotFound`, absence is not distinguished from other errors

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::WikiError;
use crate::storage::page::{file_name_for, Page};

/// Permission bits for newly created page files.
#[cfg(unix)]
const PAGE_FILE_MODE: u32 = 0o600;

/// Page store rooted at a directory.
#[derive(Debug, Clone)]
pub struct PageStore {
    root: PathBuf,
}

impl PageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `title`.
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.root.join(file_name_for(title))
    }

    /// Create the storage directory if it is missing.
    ///
    /// Fails if the path exists and is not a directory.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        match fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", self.root.display()),
            )),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.root.display(), "Creating storage directory");
                fs::create_dir_all(&self.root).await
            }
            Err(e) => Err(e),
        }
    }

    /// Load a page by title.
    pub async fn load(&self, title: &str) -> Result<Page, WikiError> {
        let path = self.path_for(title);
        match fs::read(&path).await {
            Ok(body) => {
                tracing::debug!(title = %title, bytes = body.len(), "Page loaded");
                Ok(Page::new(title, body))
            }
            Err(source) => Err(WikiError::NotFound {
                title: title.to_string(),
                source,
            }),
        }
    }

    /// Persist a page, replacing any previous content.
    pub async fn save(&self, page: &Page) -> Result<(), WikiError> {
        let path = self.path_for(&page.title);

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(PAGE_FILE_MODE);

        let mut file = options.open(&path).await?;
        file.write_all(&page.body).await?;
        file.flush().await?;

        tracing::debug!(title = %page.title, bytes = page.body.len(), "Page saved");
        Ok(())
    }
}
