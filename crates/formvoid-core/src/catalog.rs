//! Read-only, ordered collection of content records

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::ContentRecord;

/// The full set of records available to a session.
///
/// Order is the load order and is preserved by every derived view. Ids are
/// unique; there is no way to mutate a catalog once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ContentRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(records: Vec<ContentRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), pos).is_some() {
                return Err(Error::duplicate_record(&record.id));
            }
        }
        Ok(Self { records, index })
    }

    pub fn get(&self, id: &str) -> Option<&ContentRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    /// Like [`Catalog::get`] but an absent id is an error
    pub fn require(&self, id: &str) -> Result<&ContentRecord> {
        self.get(id).ok_or_else(|| Error::unknown_record(id))
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ContentRecord;
    type IntoIter = std::slice::Iter<'a, ContentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
