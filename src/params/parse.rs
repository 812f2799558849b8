use super::set::{ParamKey, ParameterSet};

/// Split raw parameter text into validated key/value pairs.
///
/// Candidates are whitespace-separated. A candidate survives only when
/// splitting on `=` yields exactly two non-empty halves and its key,
/// case-folded, is on the allow-list. Everything else is dropped without
/// error: a nonsense region just yields an empty set.
pub fn parse(raw: &str) -> ParameterSet {
    let mut params = ParameterSet::new();

    for candidate in raw.split_whitespace() {
        let halves: Vec<&str> = candidate.split('=').collect();
        // Exactly one separator, both sides populated
        if halves.len() != 2 || halves[0].is_empty() || halves[1].is_empty() {
            continue;
        }

        if let Some(key) = ParamKey::from_raw(halves[0]) {
            params.insert(key, halves[1]);
        }
    }

    params
}
