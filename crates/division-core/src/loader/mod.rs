// crates/division-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, gzip) and hands the decoded records to
//! [`DivisionIndex::build`]. The index itself never touches the filesystem.

use crate::error::Result;
use crate::index::DivisionIndex;
use crate::model::Record;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod common_io;

pub use common_io::open_stream;

impl DivisionIndex {
    /// Directory of the dataset shipped with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "divisions.json"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Loads a JSON dataset, plain or gzip-compressed, and builds the index.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading division dataset");
        Self::from_json_reader(open_stream(path)?)
    }

    /// Reads a JSON array of `{code, name}` objects from `reader`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        Self::build(records)
    }
}
