//! Primer replacement ("patching").
//!
//! A [`PatchSpec`] is configuration baked into the binary: the primer to
//! replace, the sequence it must currently have, and the published
//! replacement. Applying a patch never mutates the input table; the caller
//! keeps the original for the unpatched outputs.

use anyhow::{bail, Result};

use crate::primer::PrimerTable;

/// Where a replacement sequence came from.
#[derive(Clone, Debug)]
pub struct Provenance {
    /// Human-readable source (e.g. publication title).
    pub source: &'static str,
    /// Public URL for the source.
    pub url: &'static str,
    /// Citation or section reference within the source.
    pub reference: &'static str,
    /// Any helpful notes.
    pub notes: &'static str,
}

/// A single hardcoded primer substitution.
#[derive(Clone, Debug)]
pub struct PatchSpec {
    /// Name of the primer to replace.
    pub primer: &'static str,
    /// Sequence the primer must currently have for the patch to apply.
    /// Guards against stale or mismatched input tables.
    pub expected: &'static str,
    /// Replacement sequence.
    pub replacement: &'static str,
    /// Source information for auditability.
    pub provenance: Provenance,
}

impl PatchSpec {
    /// Apply the substitution, returning a new table.
    ///
    /// The target record keeps its pool; its `seq` becomes
    /// [`PatchSpec::replacement`] and its `length` is re-derived from the
    /// replacement. Every other record is copied unchanged.
    ///
    /// Fails if the target primer is absent, or if its current sequence is
    /// not [`PatchSpec::expected`].
    pub fn apply(&self, table: &PrimerTable) -> Result<PrimerTable> {
        let current = match table.get(self.primer) {
            Some(r) => r,
            None => bail!("Primer '{}' not present in table", self.primer),
        };
        if current.seq != self.expected {
            bail!(
                "Refusing to patch '{}': found sequence {} where {} was expected",
                self.primer,
                current.seq,
                self.expected
            );
        }
        let mut patched = table.clone();
        for r in &mut patched.records {
            if r.name == self.primer {
                r.seq = self.replacement.to_string();
                r.length = self.replacement.len();
                break;
            }
        }
        Ok(patched)
    }
}
