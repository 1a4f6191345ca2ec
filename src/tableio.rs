//! TSV input for primer tables.
//!
//! ### Format
//! Tab-separated UTF-8 text with a header row. Required columns: `name`,
//! `pool`, `seq`, `length`; any other column in the header is ignored.
//!
//! ### Errors
//! The whole load succeeds or fails; there is no partial table. Parsing/IO
//! errors are bubbled via `anyhow::Result` to the caller.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::primer::{PrimerRecord, PrimerTable};

/// Read a tab-separated primer table from `path`, preserving row order.
pub fn read_primer_tsv<P: AsRef<Path>>(path: P) -> Result<PrimerTable> {
    let p = path.as_ref();
    if !p.exists() {
        bail!("Primers not found at '{}'", p.display());
    }
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b'\t')
        .from_path(p)
        .with_context(|| format!("Cannot open primer table '{}'", p.display()))?;
    let mut records = Vec::new();
    for rec in rdr.deserialize() {
        let r: PrimerRecord =
            rec.with_context(|| format!("Malformed primer table '{}'", p.display()))?;
        records.push(r);
    }
    Ok(PrimerTable { records })
}
