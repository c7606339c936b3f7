use tracing::debug;

use crate::models::{DocumentCatalogView, DocumentEntry, DocumentError, DocumentKind};

const STANDARD_CATALOG: &[DocumentEntry] = &[
    DocumentEntry { id: "medical-record", title: "Медицинская карта пациента", kind: DocumentKind::Template },
    DocumentEntry { id: "health-certificate", title: "Справка о состоянии здоровья", kind: DocumentKind::Template },
    DocumentEntry { id: "lab-referral", title: "Направление на анализы", kind: DocumentKind::Template },
    DocumentEntry { id: "discharge-summary", title: "Выписка из стационара", kind: DocumentKind::Template },
    DocumentEntry { id: "prescription", title: "Рецепт на лекарства", kind: DocumentKind::Template },
    DocumentEntry { id: "patient-statistics", title: "Статистика по пациентам", kind: DocumentKind::Report },
    DocumentEntry { id: "doctor-report", title: "Отчет по врачам", kind: DocumentKind::Report },
    DocumentEntry { id: "financial-report", title: "Финансовая отчетность", kind: DocumentKind::Report },
    DocumentEntry { id: "morbidity-analysis", title: "Анализ заболеваемости", kind: DocumentKind::Report },
    DocumentEntry { id: "medication-report", title: "Отчет по лекарствам", kind: DocumentKind::Report },
];

/// Fixed list of document templates and reports. Entries are listed only;
/// rendering and export live outside this service.
pub struct DocumentCatalog {
    entries: Vec<DocumentEntry>,
}

impl Default for DocumentCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl DocumentCatalog {
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_CATALOG.to_vec(),
        }
    }

    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    pub fn of_kind(&self, kind: DocumentKind) -> Vec<DocumentEntry> {
        self.entries.iter().copied().filter(|entry| entry.kind == kind).collect()
    }

    pub fn get(&self, id: &str) -> Result<DocumentEntry, DocumentError> {
        debug!("Looking up document {}", id);
        self.entries
            .iter()
            .copied()
            .find(|entry| entry.id == id)
            .ok_or_else(|| DocumentError::NotFound(id.to_string()))
    }

    pub fn view(&self) -> DocumentCatalogView {
        DocumentCatalogView {
            templates: self.of_kind(DocumentKind::Template).into_iter().map(Into::into).collect(),
            reports: self.of_kind(DocumentKind::Report).into_iter().map(Into::into).collect(),
        }
    }
}
