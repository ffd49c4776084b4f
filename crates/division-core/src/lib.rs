// crates/division-core/src/lib.rs

//! # division-core
//!
//! In-memory index of administrative division codes (province → city → area).
//!
//! Build a [`DivisionIndex`] once from `{code, name}` records, then query it
//! from any number of threads through [`DivisionSearch`]:
//!
//! ```rust
//! use division_core::prelude::*;
//!
//! let index = DivisionIndex::build(vec![
//!     Record::new("110000", "Province A"),
//!     Record::new("110100", "City B"),
//!     Record::new("110101", "Area C"),
//! ])?;
//!
//! assert_eq!(index.name("110101", "/"), "Province A/City B/Area C");
//! assert_eq!(
//!     index.children(""),
//!     Some(&br#"[{"code":"110000","name":"Province A"}]"#[..])
//! );
//! # Ok::<(), division_core::DivisionError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod code;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod traits;

// Re-exports
pub use crate::code::{classify, CodeLevel, ROOT_CODE};
pub use crate::error::{DivisionError, Result};
pub use crate::index::DivisionIndex;
pub use crate::model::{DbStats, Record};
pub use crate::traits::DivisionSearch;

pub mod prelude {
    pub use crate::code::{classify, CodeLevel, ROOT_CODE};
    pub use crate::error::{DivisionError, Result};
    pub use crate::index::DivisionIndex;
    pub use crate::model::{DbStats, Record};
    pub use crate::traits::DivisionSearch;
}
