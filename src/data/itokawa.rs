//! Replacement primer proposed by **Itokawa et al.** for the ARTIC nCoV-2019
//! scheme.
//!
//! Source: *A proposal of an alternative primer for the ARTIC Network's
//! multiplex PCR to improve coverage of SARS-CoV-2 genome sequencing* —
//! Kentaro Itokawa, Tsuyoshi Sekizuka, Masanori Hashino, Rina Tanaka,
//! Makoto Kuroda.
//!
//! Notes:
//! - Sequences are uppercase as published.
//! - Only `nCoV-2019_76_RIGHT` is replaced; its pool assignment is unchanged.

use crate::patch::{PatchSpec, Provenance};

const ITOKAWA_2020: Provenance = Provenance {
    source: "A proposal of an alternative primer for the ARTIC Network's multiplex PCR to improve coverage of SARS-CoV-2 genome sequencing",
    url: "https://www.biorxiv.org/content/10.1101/2020.03.10.985150v1",
    reference: "Itokawa K, Sekizuka T, Hashino M, Tanaka R, Kuroda M (2020)",
    notes: "Alternative 76_RIGHT primer to reduce dropout of amplicon 76.",
};

/// The published substitution for `nCoV-2019_76_RIGHT`.
pub const ITOKAWA_76_RIGHT: PatchSpec = PatchSpec {
    primer: "nCoV-2019_76_RIGHT",
    expected: "ACACCTGTGCCTGTTAAACCAT",
    replacement: "TCTCTGCCAAATTGTTGGAAAGGCA",
    provenance: ITOKAWA_2020,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacement_is_25_nt() {
        assert_eq!(ITOKAWA_76_RIGHT.expected.len(), 22);
        assert_eq!(ITOKAWA_76_RIGHT.replacement.len(), 25);
    }
}
