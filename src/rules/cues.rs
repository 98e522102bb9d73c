//! Cue-category tables.
//!
//! Each of the five discourse-cue categories is configured with:
//!
//! - `lemmas`: target lemmas, tested against the normalized token lemma by
//!   equality-or-prefix. More specific targets must precede targets they
//!   extend (e.g. `οὐδείς` before `οὐ`), since the first matching target is
//!   the one reported.
//! - `context_required`: the subset of `lemmas` that are high-frequency
//!   function words, ambiguous on their own. A lemma match on one of these is
//!   accepted only when the sentence also carries a Spirit/God/Jesus signal;
//!   otherwise the detector falls through to the surface test.
//! - `forms`: normalized surface fragments for the fallback path
//!   (starts-with-or-contains). Written pre-normalized: lowercase, no
//!   diacritics.
//!
//! The detector normalizes targets once at first use; see
//! `engine/detector.rs`.

use crate::CueKind;

pub(crate) struct CueCategory {
    pub kind: CueKind,
    pub lemmas: &'static [&'static str],
    pub context_required: &'static [&'static str],
    pub forms: &'static [&'static str],
    pub description: &'static str,
}

/// Lemma whose presence in a sentence satisfies the context gate.
pub(crate) const SPIRIT_LEMMA: &str = "πνεῦμα";

/// Normalized stem accepted on any token surface form for the context gate.
pub(crate) const SPIRIT_STEM: &str = "πνευμ";

/// Normalized stems accepted in the sentence's concatenated surface text.
pub(crate) const CONTEXT_TEXT_STEMS: &[&str] = &["θεο", "ιησου"];

pub(crate) const CATEGORIES: &[CueCategory] = &[
    CueCategory {
        kind: CueKind::Primacy,
        lemmas: &["πρῶτος", "ἀρχή", "ἄρχω", "πρίν"],
        context_required: &[],
        forms: &["πρωτ", "αρχη", "αρχομ"],
        description: "Primacy: beginnings and first mentions that anchor the reader's attention",
    },
    CueCategory {
        kind: CueKind::Causal,
        lemmas: &["γάρ", "διότι", "διό", "ὅτι", "οὖν", "ἵνα"],
        context_required: &["ὅτι", "οὖν"],
        forms: &["γαρ", "διοτι", "ινα"],
        description: "Causal: explicit cause and purpose connectives",
    },
    CueCategory {
        kind: CueKind::Focalization,
        lemmas: &["ὁράω", "βλέπω", "ἐμβλέπω", "περιβλέπω", "θεωρέω", "θεάομαι", "ἰδού", "ἴδε"],
        context_required: &[],
        forms: &["ιδου", "βλεπ", "θεωρ", "ορα"],
        description: "Focalization: perception verbs and presentatives directing the narrative eye",
    },
    CueCategory {
        kind: CueKind::Absence,
        // The bare negators are gated: on their own they mark ordinary
        // negation, not narratively salient absence.
        lemmas: &["οὐδείς", "οὔπω", "οὐκέτι", "ἔρημος", "μόνος", "οὐ", "μή"],
        context_required: &["οὐ", "μή"],
        forms: &["ουδε", "ουπω", "ουκετι", "ερημ"],
        description: "Absence: negation and lack marked by the narrator",
    },
    CueCategory {
        kind: CueKind::Prolepsis,
        lemmas: &["μέλλω", "προλέγω", "προφητεύω"],
        context_required: &[],
        forms: &["μελλ", "προλεγ", "προφητευ", "προερ"],
        description: "Prolepsis: forward references announcing what is yet to come",
    },
];

#[cfg(test)]
mod tests {
    use super::{CATEGORIES, CueCategory};
    use crate::CueKind;
    use crate::greek::normalize;

    #[test]
    fn covers_every_kind_exactly_once() {
        for kind in CueKind::ALL {
            let hits = CATEGORIES.iter().filter(|c| c.kind == kind).count();
            assert_eq!(hits, 1, "{kind} configured {hits} times");
        }
    }

    #[test]
    fn context_required_is_subset_of_lemmas() {
        for CueCategory { kind, lemmas, context_required, .. } in CATEGORIES {
            for gated in *context_required {
                assert!(lemmas.contains(gated), "{kind}: context-required {gated:?} not in lemma set");
            }
        }
    }

    #[test]
    fn form_fragments_are_pre_normalized() {
        for CueCategory { kind, forms, .. } in CATEGORIES {
            for fragment in *forms {
                assert_eq!(normalize(fragment), *fragment, "{kind}: fragment {fragment:?} not normalized");
            }
        }
    }
}
