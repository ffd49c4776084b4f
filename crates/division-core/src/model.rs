// crates/division-core/src/model.rs
use serde::{Deserialize, Serialize};

/// One row of the reference dataset: `{"code": "110000", "name": "..."}`.
///
/// Children lists are encoded as JSON arrays of this struct, so field order
/// and names here define the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub code: String,
    pub name: String,
}

impl Record {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

pub type RecordsRaw = Vec<Record>;

/// Simple aggregate statistics for an index.
///
/// Returned by [`crate::DivisionIndex::stats`]; counts are records ingested
/// per level, duplicates included. Unclassifiable records are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub provinces: usize,
    pub cities: usize,
    pub areas: usize,
}
