use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

// Opening marker, optional whitespace-prefixed parameter region, closing
// marker. Case-insensitive; the parameter region may span lines.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)\{pagelist(\s+.*?)?\}").unwrap());

/// One located token occurrence in the current buffer state.
///
/// Offsets are byte offsets into the buffer the match was taken from and go
/// stale the moment the buffer is edited, which is why the engine re-scans
/// instead of caching matches across replacements.
#[derive(Debug, Clone, Copy)]
pub struct TokenMatch<'a> {
    start: usize,
    end: usize,
    args: Option<&'a str>,
}

impl<'a> TokenMatch<'a> {
    pub fn start(&self) -> usize {
        self.start
    }

    /// Matched span length in bytes. Never zero: the shortest token is
    /// the bare `{pagelist}`.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The span to splice the replacement over.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Raw captured parameter text, leading whitespace included.
    /// Empty when the token carried no parameters.
    pub fn args(&self) -> &'a str {
        self.args.unwrap_or("")
    }
}

/// Leftmost token in `buffer`, or `None` when the buffer is drained.
pub fn find_token(buffer: &str) -> Option<TokenMatch<'_>> {
    TOKEN.captures(buffer).map(|caps| {
        let whole = caps.get(0).expect("group 0 always participates");
        TokenMatch {
            start: whole.start(),
            end: whole.end(),
            args: caps.get(1).map(|group| group.as_str()),
        }
    })
}
