#![forbid(unsafe_code)]
//! # articfa
//!
//! Generates the ARTIC Network **nCoV-2019** primer FASTA files from the
//! published primer TSV, together with a variant carrying the **Itokawa et
//! al.** replacement for `nCoV-2019_76_RIGHT` (an alternative primer proposed
//! to reduce dropout of amplicon 76).
//!
//! ## Highlights
//! - 🧬 **Deterministic data**: the replacement primer is embedded as a
//!   `&'static str` constant with provenance.
//! - 📄 **Fixed output layout**: FASTA records match the published generator
//!   byte for byte.
//! - 🗂 **Pool-aware**: one combined file plus one file per amplicon pool.
//!
//! ## Primary sources
//! - ARTIC Network nCoV-2019 primer scheme (the input TSV).
//! - *A proposal of an alternative primer for the ARTIC Network's multiplex
//!   PCR to improve coverage of SARS-CoV-2 genome sequencing* — Itokawa,
//!   Sekizuka, Hashino, Tanaka, Kuroda. See [`data::itokawa`].
//!
//! ## Examples
//! ```rust
//! use articfa::primer::{PrimerRecord, PrimerTable};
//!
//! let table = PrimerTable {
//!     records: vec![PrimerRecord {
//!         name: "nCoV-2019_76_RIGHT".into(),
//!         pool: "2".into(),
//!         seq: "ACACCTGTGCCTGTTAAACCAT".into(),
//!         length: 22,
//!     }],
//! };
//! let patched = articfa::itokawa_patch().apply(&table).unwrap();
//! assert_eq!(patched.get("nCoV-2019_76_RIGHT").unwrap().length, 25);
//! ```

pub mod fasta;
pub mod patch;
pub mod primer;
pub mod tableio;
pub mod data { pub mod itokawa; }

use std::path::Path;

use anyhow::Result;

use primer::PrimerTable;

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a primer table from a tab-separated file.
///
/// Requires a header row with `name`, `pool`, `seq` and `length` columns;
/// extra columns are ignored.
pub fn load_primer_table<P: AsRef<Path>>(path: P) -> Result<PrimerTable> {
    tableio::read_primer_tsv(path)
}

/// The hardcoded Itokawa et al. substitution for `nCoV-2019_76_RIGHT`.
pub fn itokawa_patch() -> &'static patch::PatchSpec {
    &data::itokawa::ITOKAWA_76_RIGHT
}


#[cfg(test)]
mod stale_input_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn patch_refuses_a_changed_76_right_sequence() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(
            b"name\tpool\tseq\tlength\nnCoV-2019_76_RIGHT\t2\tAAAACCCCGGGGTTTT\t16\n",
        )
        .unwrap();
        let table = load_primer_table(f.path()).unwrap();
        assert!(itokawa_patch().apply(&table).is_err());
    }
}

#[cfg(test)]
mod missing_input_tests {
    use super::*;

    #[test]
    fn absent_table_path_is_an_error() {
        let err = load_primer_table("/no/such/artic-primers.tsv").unwrap_err();
        assert!(err.to_string().contains("Primers not found"));
    }
}
