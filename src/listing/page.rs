use serde::{Deserialize, Serialize};

/// One renderable page: a display title plus an already-built link target.
///
/// URL construction and encoding belong to the host that produced the entry;
/// the renderer only escapes for HTML context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub title: String,
    pub link: String,
}

impl PageEntry {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        PageEntry {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// The namespace a listing resolves against. The root namespace has no name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Namespace {
    Root,
    Named(String),
}

impl Namespace {
    /// Resolution order: the explicit `namespace` parameter wins, then the
    /// store's current namespace, then root. The literal names `""`, `"root"`
    /// and `"<root>"` all denote the root namespace.
    pub fn resolve(requested: Option<&str>, current: Option<&str>) -> Self {
        match requested.or(current) {
            None | Some("") | Some("root") | Some("<root>") => Namespace::Root,
            Some(name) => Namespace::Named(name.to_string()),
        }
    }

    /// The namespace name, or `None` for root.
    pub fn name(&self) -> Option<&str> {
        match self {
            Namespace::Root => None,
            Namespace::Named(name) => Some(name),
        }
    }

    /// Heading label. Root renders under the placeholder name `<root>`,
    /// which the renderer escapes like any other label.
    pub fn label(&self) -> &str {
        self.name().unwrap_or("<root>")
    }
}
