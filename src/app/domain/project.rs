use std::fmt;

use super::language::LocalizedText;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One portfolio project as shown in the lightbox.
///
/// `images` is never empty for records that come out of a
/// [`ContentCatalog`](crate::app::services::catalog::ContentCatalog);
/// tags are rendered in the order they are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub images: Vec<String>,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub tags: Vec<String>,
}

impl ProjectRecord {
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
