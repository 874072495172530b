/// Unique identifier of a category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

/// A node in the category forest. The parent is a back-reference by id; a
/// category without one is a root.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Category {
    id: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<CategoryId>,
}

impl Category {
    /// Display label used wherever a category has no name.
    pub const UNNAMED: &str = "(Unnamed)";

    pub fn new(id: CategoryId, name: Option<String>, parent: Option<CategoryId>) -> Self {
        Self { id, name, parent }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn parent(&self) -> Option<CategoryId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the name, or [`Category::UNNAMED`] if there is none.
    pub fn label(&self) -> &str {
        self.name().unwrap_or(Self::UNNAMED)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Category {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
