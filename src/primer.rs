//! Core types for **primer records** and the **primer table**.
//!
//! This module holds the data model used across the crate. It is intentionally
//! simple: a record per table row, and an ordered `Vec` of records so the
//! input row order survives into the output files. Lookup by primer name is a
//! linear scan; ARTIC schemes are a few hundred primers.
use serde::Deserialize;

/// A single primer definition as read from the input table.
///
/// `length` is the *declared* length column, trusted as given. It is only
/// re-derived when a primer is replaced (see [`crate::patch`]).
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct PrimerRecord {
    /// Primer name, the table's unique key (e.g. `"nCoV-2019_76_RIGHT"`).
    pub name: String,
    /// Amplicon pool identifier, kept exactly as written in the input.
    pub pool: String,
    /// Nucleotide sequence, case as given.
    pub seq: String,
    /// Declared sequence length.
    pub length: usize,
}

/// An ordered primer table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrimerTable {
    /// Records in original input row order.
    pub records: Vec<PrimerRecord>,
}

impl PrimerTable {
    /// Look up a primer by name. Returns the first match.
    pub fn get(&self, name: &str) -> Option<&PrimerRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct pool values in ascending order.
    ///
    /// When every pool value parses as an integer the sort is numeric,
    /// otherwise bytewise on the original strings. The choice is made once
    /// per table, never per pair.
    pub fn sorted_pools(&self) -> Vec<&str> {
        let mut pools: Vec<&str> = Vec::new();
        for r in &self.records {
            if !pools.contains(&r.pool.as_str()) {
                pools.push(r.pool.as_str());
            }
        }
        if pools.iter().all(|p| p.parse::<u64>().is_ok()) {
            pools.sort_unstable_by_key(|p| p.parse::<u64>().unwrap());
        } else {
            pools.sort_unstable();
        }
        pools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, pool: &str, seq: &str) -> PrimerRecord {
        PrimerRecord {
            name: name.to_string(),
            pool: pool.to_string(),
            seq: seq.to_string(),
            length: seq.len(),
        }
    }

    #[test]
    fn get_returns_record_by_name() {
        let t = PrimerTable {
            records: vec![record("a_LEFT", "1", "ACGT"), record("a_RIGHT", "2", "TTGA")],
        };
        assert_eq!(t.get("a_RIGHT").unwrap().pool, "2");
        assert!(t.get("b_LEFT").is_none());
    }

    #[test]
    fn pools_sort_numerically_when_all_integer() {
        let t = PrimerTable {
            records: vec![
                record("a", "2", "AC"),
                record("b", "10", "AC"),
                record("c", "1", "AC"),
                record("d", "2", "AC"),
            ],
        };
        assert_eq!(t.sorted_pools(), vec!["1", "2", "10"]);
    }

    #[test]
    fn pools_sort_bytewise_otherwise() {
        let t = PrimerTable {
            records: vec![
                record("a", "nCoV-2019_2", "AC"),
                record("b", "nCoV-2019_10", "AC"),
                record("c", "nCoV-2019_1", "AC"),
            ],
        };
        assert_eq!(
            t.sorted_pools(),
            vec!["nCoV-2019_1", "nCoV-2019_10", "nCoV-2019_2"]
        );
    }
}
