use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_PASSES: usize = 10_000;

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upper bound on substitutions within one `rewrite` call. A store that
    /// emits a literal token in its own markup would otherwise keep the
    /// scan loop alive forever.
    pub max_passes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}
