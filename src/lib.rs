//! Workspace facade: re-exports `division-core` so demos can use
//! `division_rs::prelude::*`.
pub use division_core::*;
