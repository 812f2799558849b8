use pagelist_core::engine::Rewriter;
use pagelist_core::listing::{Namespace, PageEntry, PageStore};
use pagelist_core::params::ParameterSet;

struct FixtureStore {
    current: Option<String>,
    pages: Vec<PageEntry>,
}

impl PageStore for FixtureStore {
    fn current_namespace(&self) -> Option<String> {
        self.current.clone()
    }

    fn pages(&self, _namespace: &Namespace, _params: &ParameterSet) -> Vec<PageEntry> {
        self.pages.clone()
    }
}

fn fixture() -> FixtureStore {
    FixtureStore {
        current: Some("wiki".to_string()),
        pages: vec![
            PageEntry::new("Alpha", "wiki/alpha"),
            PageEntry::new("Beta", "wiki/beta"),
        ],
    }
}

const DOCUMENT: &str = "A {pagelist} B {PageList namespace=wiki} C\n{pagelist\n include=Alpha}\n";

#[test]
fn rewrite_is_deterministic_across_engines() {
    let first = Rewriter::new(fixture()).rewrite(DOCUMENT).unwrap();
    let second = Rewriter::new(fixture()).rewrite(DOCUMENT).unwrap();

    assert_eq!(first, second, "rewrite output is not deterministic");
}

#[test]
fn rewrite_is_deterministic_across_calls_on_one_engine() {
    // No state may leak between calls: each invocation owns its buffer.
    let rewriter = Rewriter::new(fixture());

    let first = rewriter.rewrite(DOCUMENT).unwrap();
    let second = rewriter.rewrite(DOCUMENT).unwrap();

    assert_eq!(first, second);
}

#[test]
fn rewrite_of_drained_output_is_identity() {
    // Once every token is gone the engine is a no-op, so rewriting the
    // output again must return it unchanged.
    let rewriter = Rewriter::new(fixture());

    let drained = rewriter.rewrite(DOCUMENT).unwrap();
    let again = rewriter.rewrite(&drained).unwrap();

    assert_eq!(again, drained);
}
