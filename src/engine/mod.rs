pub mod config;
pub mod scan;

use thiserror::Error;
use tracing::{debug, trace};

use crate::listing::{render_listing, Namespace, PageStore};
use crate::params::{self, ParamKey};
pub use config::EngineConfig;
pub use scan::{find_token, TokenMatch};

#[derive(Debug, Error)]
pub enum RewriteError {
    /// The replace loop hit its configured bound before the buffer drained.
    /// Reaching this on real input means some replacement keeps regenerating
    /// a literal token marker.
    #[error("substitution did not terminate within {0} passes")]
    PassLimitExceeded(usize),
}

/// The substitution engine. Wired to its page store once, at construction;
/// reusable across documents because each `rewrite` call owns its buffer.
pub struct Rewriter<S> {
    store: S,
    config: EngineConfig,
}

impl<S: PageStore> Rewriter<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// The injected page store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace every `{pagelist ...}` token in `document`.
    ///
    /// Loop: find the leftmost match, splice the generated listing over the
    /// matched span, re-scan the whole buffer from the start. The replacement
    /// rarely has the same length as the span it covers, so offsets found
    /// before an edit are worthless after it. A scan without a match is the
    /// terminal state and returns the buffer as-is.
    pub fn rewrite(&self, document: &str) -> Result<String, RewriteError> {
        let mut buffer = document.to_string();
        let mut passes = 0usize;

        while let Some(token) = scan::find_token(&buffer) {
            if passes == self.config.max_passes {
                return Err(RewriteError::PassLimitExceeded(passes));
            }
            passes += 1;

            let span = token.range();
            debug!(start = span.start, len = token.len(), pass = passes, "replacing pagelist token");

            let replacement = self.build_replacement(token.args());
            buffer.replace_range(span, &replacement);
        }

        trace!(passes, "buffer drained");
        Ok(buffer)
    }

    /// One replacement: parse the captured text, resolve the namespace,
    /// pull the page list from the store, render the markup.
    fn build_replacement(&self, raw_args: &str) -> String {
        let params = params::parse(raw_args);

        let current = self.store.current_namespace();
        let namespace = Namespace::resolve(params.get(ParamKey::Namespace), current.as_deref());

        let pages = self.store.pages(&namespace, &params);
        render_listing(&namespace, &pages)
    }
}
