// crates/division-core/src/index.rs

//! # Division Index
//!
//! Built once from a flat list of [`Record`]s, immutable afterwards.
//!
//! Every children list is encoded to JSON during [`DivisionIndex::build`], so
//! [`DivisionSearch::children`] is a map lookup returning borrowed bytes that
//! callers can hand straight to a response body.

use crate::code::{city_key, city_prefix, province_key, province_prefix, CodeLevel, ROOT_CODE};
use crate::error::Result;
use crate::model::{DbStats, Record};
use crate::traits::DivisionSearch;
use std::collections::HashMap;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct DivisionIndex {
    /// `PP` -> province name.
    province_names: HashMap<String, String>,
    /// `PPCC` -> city name.
    city_names: HashMap<String, String>,
    /// `PPCCAA` -> area name.
    area_names: HashMap<String, String>,

    /// Province records in dataset order.
    provinces: Vec<Record>,
    /// `PP0000` -> city records in dataset order.
    cities: HashMap<String, Vec<Record>>,
    /// `PPCC00` -> area records in dataset order.
    areas: HashMap<String, Vec<Record>>,

    // Encoded once in `build`, never invalidated.
    province_bytes: Vec<u8>,
    city_bytes: HashMap<String, Vec<u8>>,
    area_bytes: HashMap<String, Vec<u8>>,
}

impl DivisionIndex {
    /// Builds the index from dataset records, preserving their order in every
    /// children list.
    ///
    /// Records whose code does not classify are skipped. Duplicate codes are
    /// not rejected: the last name wins in lookups and every copy stays in its
    /// children list. Fails only if a children list cannot be encoded, in
    /// which case no index is produced.
    pub fn build<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut index = DivisionIndex::default();
        let mut skipped = 0usize;

        for record in records {
            match CodeLevel::classify(&record.code) {
                CodeLevel::Province => {
                    index
                        .province_names
                        .insert(province_prefix(&record.code).to_owned(), record.name.clone());
                    index.provinces.push(record);
                }
                CodeLevel::City => {
                    index
                        .city_names
                        .insert(city_prefix(&record.code).to_owned(), record.name.clone());
                    index
                        .cities
                        .entry(province_key(&record.code))
                        .or_default()
                        .push(record);
                }
                CodeLevel::Area => {
                    index
                        .area_names
                        .insert(record.code.clone(), record.name.clone());
                    index
                        .areas
                        .entry(city_key(&record.code))
                        .or_default()
                        .push(record);
                }
                CodeLevel::Unknown => {
                    trace!(code = %record.code, "skipping unclassifiable record");
                    skipped += 1;
                }
            }
        }

        index.province_bytes = serde_json::to_vec(&index.provinces)?;
        index.city_bytes = encode_lists(&index.cities)?;
        index.area_bytes = encode_lists(&index.areas)?;

        let stats = index.stats();
        debug!(
            provinces = stats.provinces,
            cities = stats.cities,
            areas = stats.areas,
            skipped,
            "division index built"
        );

        Ok(index)
    }

    /// Deserializes a JSON array of `{code, name}` objects and builds the index.
    ///
    /// ```rust
    /// use division_core::{DivisionIndex, DivisionSearch};
    ///
    /// let json = br#"[{"code":"110000","name":"Beijing"},{"code":"110100","name":"Beijing City"}]"#;
    /// let index = DivisionIndex::from_json_slice(json).unwrap();
    /// assert_eq!(index.name("110100", "/"), "Beijing/Beijing City");
    /// ```
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_slice(data)?;
        Self::build(records)
    }
}

fn encode_lists(lists: &HashMap<String, Vec<Record>>) -> Result<HashMap<String, Vec<u8>>> {
    let mut encoded = HashMap::with_capacity(lists.len());
    for (key, records) in lists {
        encoded.insert(key.clone(), serde_json::to_vec(records)?);
    }
    Ok(encoded)
}

/// Missing keys read as the empty name.
fn lookup<'a>(names: &'a HashMap<String, String>, key: &str) -> &'a str {
    names.get(key).map(String::as_str).unwrap_or("")
}

impl DivisionSearch for DivisionIndex {
    fn stats(&self) -> DbStats {
        DbStats {
            provinces: self.provinces.len(),
            cities: self.cities.values().map(Vec::len).sum(),
            areas: self.areas.values().map(Vec::len).sum(),
        }
    }

    fn children(&self, code: &str) -> Option<&[u8]> {
        if code.is_empty() || code == ROOT_CODE {
            return Some(&self.province_bytes);
        }

        match CodeLevel::classify(code) {
            CodeLevel::Province => self.city_bytes.get(code).map(Vec::as_slice),
            CodeLevel::City => self.area_bytes.get(code).map(Vec::as_slice),
            CodeLevel::Area | CodeLevel::Unknown => None,
        }
    }

    fn name_chain(&self, code: &str) -> Vec<&str> {
        let chain = match CodeLevel::classify(code) {
            CodeLevel::Province => vec![lookup(&self.province_names, province_prefix(code))],
            CodeLevel::City => vec![
                lookup(&self.province_names, province_prefix(code)),
                lookup(&self.city_names, city_prefix(code)),
            ],
            CodeLevel::Area => vec![
                lookup(&self.province_names, province_prefix(code)),
                lookup(&self.city_names, city_prefix(code)),
                lookup(&self.area_names, code),
            ],
            CodeLevel::Unknown => return Vec::new(),
        };

        // Only the requested level decides; ancestors are taken as found.
        if chain.last().is_some_and(|name| name.is_empty()) {
            return Vec::new();
        }
        chain
    }
}
