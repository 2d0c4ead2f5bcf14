use crate::types::{DocumentId, Label};
use crate::Error;

/// A labeled text document. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: DocumentId,
    text: String,
    label: Label,
}

impl Document {
    /// Creates a document, rejecting labels that cannot be regressed on.
    pub fn new(
        id: impl Into<DocumentId>,
        text: impl Into<String>,
        label: Label,
    ) -> Result<Self, Error> {
        let id = id.into();

        if !label.is_finite() {
            return Err(Error::InvalidInputError(format!(
                "Document `{}` has a non-finite label: {}",
                id, label
            )));
        }

        Ok(Document {
            id,
            text: text.into(),
            label,
        })
    }

    /// Builds a document from optional raw fields, as they come out of a row-oriented source.
    ///
    /// A missing text field is an `InvalidInputError`; an empty string is a valid (empty) text.
    pub fn from_fields(
        id: Option<&str>,
        text: Option<&str>,
        label: Option<&str>,
    ) -> Result<Self, Error> {
        let id = id
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::InvalidInputError("Missing document id".to_string()))?;

        let text = text.ok_or_else(|| {
            Error::InvalidInputError(format!("Document `{}` has no text", id))
        })?;

        let raw_label = label.map(|label| label.trim()).ok_or_else(|| {
            Error::InvalidInputError(format!("Document `{}` has no label", id))
        })?;

        let label = raw_label.parse::<Label>().map_err(|e| {
            Error::InvalidInputError(format!(
                "Document `{}` has an unparsable label `{}`: {}",
                id, raw_label, e
            ))
        })?;

        Document::new(id, text, label)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> Label {
        self.label
    }
}

/// Collects the labels of `documents`, in order.
pub fn labels_of(documents: &[Document]) -> Vec<Label> {
    documents.iter().map(|document| document.label()).collect()
}
