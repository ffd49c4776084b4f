// crates/division-core/src/traits.rs
use crate::model::DbStats;

/// Read-only query surface of a division index.
///
/// Hosting code (request handlers, bindings) can depend on this trait rather
/// than on [`crate::DivisionIndex`] directly. None of the methods fail: an
/// empty, malformed or unknown code simply yields no result.
pub trait DivisionSearch {
    fn stats(&self) -> DbStats;

    /// Pre-encoded JSON array of the direct children of `code`.
    ///
    /// An empty `code` or `"000000"` returns the list of all provinces.
    /// Areas, unknown codes and childless divisions return `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use division_core::{DivisionIndex, DivisionSearch, Record};
    ///
    /// let index = DivisionIndex::build(vec![
    ///     Record::new("110000", "Province A"),
    ///     Record::new("110100", "City B"),
    /// ]).unwrap();
    ///
    /// assert_eq!(
    ///     index.children("110000"),
    ///     Some(&br#"[{"code":"110100","name":"City B"}]"#[..])
    /// );
    /// assert_eq!(index.children("110100"), None);
    /// ```
    fn children(&self, code: &str) -> Option<&[u8]>;

    /// Names from the province down to `code`, outermost first.
    ///
    /// Empty when `code` is unknown or its own level is missing from the
    /// dataset. Only the last entry is checked, so an inconsistent dataset
    /// can yield an empty ancestor name in the middle of the chain.
    fn name_chain(&self, code: &str) -> Vec<&str>;

    /// [`DivisionSearch::name_chain`] joined with `sep`.
    fn name(&self, code: &str, sep: &str) -> String {
        self.name_chain(code).join(sep)
    }

    /// [`DivisionSearch::name`] with no separator.
    fn full_name(&self, code: &str) -> String {
        self.name(code, "")
    }
}
