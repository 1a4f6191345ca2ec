use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use articfa::fasta::write_fasta_set;

/// Base filename for the unpatched outputs.
const PRIMARY_BASE: &str = "artic-ncov2019-primers";
/// Base filename for the Itokawa-patched outputs.
const PATCHED_BASE: &str = "artic-ncov2019-primers-with-itokawa-patch";

/// Articfa CLI
#[derive(Parser)]
#[command(name = "articfa")]
#[command(version)]
#[command(
    about = "Generate ARTIC nCoV-2019 primer FASTA files, with and without the Itokawa 76_RIGHT replacement",
    long_about = None
)]
struct Cli {
    /// Tab-separated primer table with name/pool/seq/length columns
    #[arg(value_name = "FILE", required = true)]
    primers: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let table = articfa::load_primer_table(&cli.primers)?;
    write_fasta_set(&table, PRIMARY_BASE)?;

    let patched = articfa::itokawa_patch().apply(&table)?;
    write_fasta_set(&patched, PATCHED_BASE)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_path_is_required() {
        assert!(Cli::try_parse_from(["articfa"]).is_err());
        assert!(Cli::try_parse_from(["articfa", "primers.tsv"]).is_ok());
    }
}
