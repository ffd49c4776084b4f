//! division-cli
//! ============
//!
//! Command-line interface for the `division-core` index.
//!
//! The binary (`division`) is the primary deliverable; this library target
//! only exists so docs.rs renders this overview.
//!
//! ```text
//! division stats
//! division children
//! division children 440000
//! division name 440304 --sep /
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
