//! FASTA output.
//!
//! One combined file per table plus one file per amplicon pool. The record
//! layout is fixed: one header line, one sequence line, a newline after each
//! sequence, no blank lines between records. The per-pool files drop the
//! `pool=` field from the header since the pool is named in the filename.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::primer::{PrimerRecord, PrimerTable};

/// Header layout for [`write_fasta_record`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaderStyle {
    /// `>name pool=P length=L`, used in the combined file.
    WithPool,
    /// `>name length=L`, used in the per-pool files.
    PoolImplied,
}

/// Write one FASTA record in the fixed layout.
pub fn write_fasta_record<W: Write>(
    w: &mut W,
    r: &PrimerRecord,
    style: HeaderStyle,
) -> std::io::Result<()> {
    match style {
        HeaderStyle::WithPool => {
            writeln!(w, ">{} pool={} length={}", r.name, r.pool, r.length)?
        }
        HeaderStyle::PoolImplied => writeln!(w, ">{} length={}", r.name, r.length)?,
    }
    writeln!(w, "{}", r.seq)
}

/// Write all FASTA files for one table under the base filename `base`:
/// `<base>.fa` with every record, then `<base>-pool-<pool>.fa` per distinct
/// pool in ascending order, each holding that pool's records in original
/// table order.
///
/// Existing files are overwritten. Each file is flushed and closed before the
/// next is opened. Returns the written paths, combined file first.
pub fn write_fasta_set<P: AsRef<Path>>(table: &PrimerTable, base: P) -> Result<Vec<PathBuf>> {
    let base = base.as_ref();
    let mut written = Vec::new();

    let combined = fasta_path(base, None);
    write_records(&combined, table.records.iter(), HeaderStyle::WithPool)?;
    written.push(combined);

    for pool in table.sorted_pools() {
        let path = fasta_path(base, Some(pool));
        write_records(
            &path,
            table.records.iter().filter(|r| r.pool == pool),
            HeaderStyle::PoolImplied,
        )?;
        written.push(path);
    }
    Ok(written)
}

fn fasta_path(base: &Path, pool: Option<&str>) -> PathBuf {
    let mut s = base.as_os_str().to_os_string();
    match pool {
        Some(p) => s.push(format!("-pool-{}.fa", p)),
        None => s.push(".fa"),
    }
    PathBuf::from(s)
}

fn write_records<'a, I>(path: &Path, records: I, style: HeaderStyle) -> Result<()>
where
    I: Iterator<Item = &'a PrimerRecord>,
{
    let file = File::create(path)
        .with_context(|| format!("Cannot open file '{}' for writing", path.display()))?;
    let mut w = BufWriter::new(file);
    for r in records {
        write_fasta_record(&mut w, r, style)
            .with_context(|| format!("Write failed for '{}'", path.display()))?;
    }
    w.flush()
        .with_context(|| format!("Write failed for '{}'", path.display()))?;
    Ok(())
}
