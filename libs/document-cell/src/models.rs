use serde::Serialize;
use thiserror::Error;

use shared_models::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Template,
    Report,
}

impl DocumentKind {
    /// Button caption on the documents screen.
    pub fn action_label(&self) -> &'static str {
        match self {
            DocumentKind::Template => "Скачать",
            DocumentKind::Report => "Просмотр",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: DocumentKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    #[serde(flatten)]
    pub entry: DocumentEntry,
    pub action_label: &'static str,
}

impl From<DocumentEntry> for DocumentView {
    fn from(entry: DocumentEntry) -> Self {
        Self {
            action_label: entry.kind.action_label(),
            entry,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentCatalogView {
    pub templates: Vec<DocumentView>,
    pub reports: Vec<DocumentView>,
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Document {0} not found")]
    NotFound(String),
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::NotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}
