use serde::{Deserialize, Serialize};

/// Static content pages editable from the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentPageKind {
    Privacy,
    Returns,
    About,
}

impl ContentPageKind {
    /// Path segment under the `pages` resource
    pub fn slug(&self) -> &'static str {
        match self {
            ContentPageKind::Privacy => "privacy",
            ContentPageKind::Returns => "returns",
            ContentPageKind::About => "about",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContentPageKind::Privacy => "Privacy policy",
            ContentPageKind::Returns => "Returns policy",
            ContentPageKind::About => "About us",
        }
    }

    pub fn all() -> Vec<ContentPageKind> {
        vec![
            ContentPageKind::Privacy,
            ContentPageKind::Returns,
            ContentPageKind::About,
        ]
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.slug() == slug)
    }
}
