use std::collections::HashMap;

use memchr::memmem;

use crate::core::types::Topology;

/// Separator used between the parts of a composite name
pub const COMPOSITE_SEPARATOR: u8 = b'&';

/// One parsed row of the lookup table.
///
/// Fields are raw bytes so ids and names outside UTF-8 survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRecord {
    /// Identifier searched for in FASTA header names
    pub id: Vec<u8>,
    pub genome: Vec<u8>,
    pub chromosome: Vec<u8>,
    /// Raw topology flag (`c`, `circular`, `l`, `linear`, ...)
    pub topology: Vec<u8>,
}

impl TableRecord {
    pub fn new(
        id: impl Into<Vec<u8>>,
        genome: impl Into<Vec<u8>>,
        chromosome: impl Into<Vec<u8>>,
        topology: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            id: id.into(),
            genome: genome.into(),
            chromosome: chromosome.into(),
            topology: topology.into(),
        }
    }

    /// Build the `genome&chromosome&topology` replacement name
    #[must_use]
    pub fn composite(&self) -> Vec<u8> {
        let mut composite = Vec::with_capacity(
            self.genome.len() + self.chromosome.len() + self.topology.len() + 2,
        );
        composite.extend_from_slice(&self.genome);
        composite.push(COMPOSITE_SEPARATOR);
        composite.extend_from_slice(&self.chromosome);
        composite.push(COMPOSITE_SEPARATOR);
        composite.extend_from_slice(&self.topology);
        composite
    }

    #[must_use]
    pub fn topology_kind(&self) -> Topology {
        Topology::parse(&String::from_utf8_lossy(&self.topology))
    }
}

/// Insertion-ordered mapping from table id to composite name.
///
/// Lookups scan entries in the order their ids were first inserted. Inserting
/// an id that is already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMap {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    index: HashMap<Vec<u8>, usize>,
}

impl NameMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record's id and composite name.
    ///
    /// Returns the previous composite name if the id was already present.
    pub fn insert_record(&mut self, record: &TableRecord) -> Option<Vec<u8>> {
        self.insert(record.id.clone(), record.composite())
    }

    pub fn insert(
        &mut self,
        id: impl Into<Vec<u8>>,
        composite: impl Into<Vec<u8>>,
    ) -> Option<Vec<u8>> {
        let id = id.into();
        let composite = composite.into();
        if let Some(&i) = self.index.get(&id) {
            return Some(std::mem::replace(&mut self.entries[i].1, composite));
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, composite));
        None
    }

    #[must_use]
    pub fn get(&self, id: impl AsRef<[u8]>) -> Option<&[u8]> {
        self.index
            .get(id.as_ref())
            .map(|&i| self.entries[i].1.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(id, composite)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    /// Find the first id, in insertion order, contained anywhere in `name`
    #[must_use]
    pub fn find_in(&self, name: &[u8]) -> Option<(&[u8], &[u8])> {
        self.iter().find(|(id, _)| memmem::find(name, id).is_some())
    }
}
