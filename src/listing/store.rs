use super::page::{Namespace, PageEntry};
use crate::params::ParameterSet;

/// The page repository the engine is wired to at construction.
///
/// Implementations are expected to be cheap to call repeatedly and to
/// resolve unknown namespaces however the host sees fit (typically to an
/// empty listing). The engine itself has no opinion.
pub trait PageStore {
    /// Namespace of the document currently being formatted, if the host
    /// tracks one. `None` means the root namespace.
    fn current_namespace(&self) -> Option<String>;

    /// Pages of `namespace` in display order.
    ///
    /// `params` carries the full parameter set of the token being replaced,
    /// so `include`/`exclude` filtering happens where the page data lives.
    fn pages(&self, namespace: &Namespace, params: &ParameterSet) -> Vec<PageEntry>;
}
