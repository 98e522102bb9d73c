//! Discourse-cue detection.
//!
//! A single forward pass over every (sentence, category, token) triple. Per
//! triple the matching ladder is:
//!
//! ```text
//! 1. lemma test        normalized token lemma equals, or starts with, a
//!                      normalized target lemma of the category
//! 2. context gate      only for context-required targets: the sentence must
//!                      carry a Spirit/God/Jesus signal; a failed gate
//!                      demotes the lemma match instead of rejecting the
//!                      token, so step 3 still runs
//! 3. surface fallback  normalized token form contains one of the
//!                      category's form fragments
//! ```
//!
//! An accepted match becomes a [`Cue`] keyed by `(sentence, kind, keyword)`
//! where the keyword is the raw token lemma on the lemma path and the raw
//! surface form on the fallback path; duplicates of that triple are dropped
//! by a linear scan over the accumulated list, which is fine at the scale of
//! a single literary text. Categories are evaluated independently, so one
//! token may legitimately cue under several of them.
//!
//! The category tables in `crate::rules::cues` store raw polytonic lemmas;
//! they are normalized once, at first use, into [`COMPILED`].

use once_cell::sync::Lazy;

use crate::greek::normalize;
use crate::rules::cues::{CATEGORIES, CONTEXT_TEXT_STEMS, SPIRIT_LEMMA, SPIRIT_STEM};
use crate::{Corpus, Cue, CueKind, Sentence};

struct CompiledTarget {
    /// Normalized target lemma.
    text: String,
    /// Whether a match on this target must pass the context gate.
    gated: bool,
}

struct CompiledCategory {
    kind: CueKind,
    targets: Vec<CompiledTarget>,
    forms: &'static [&'static str],
    description: &'static str,
}

/// Category tables with target lemmas pre-normalized.
static COMPILED: Lazy<Vec<CompiledCategory>> = Lazy::new(|| {
    CATEGORIES
        .iter()
        .map(|cat| CompiledCategory {
            kind: cat.kind,
            targets: cat
                .lemmas
                .iter()
                .map(|lemma| CompiledTarget { text: normalize(lemma), gated: cat.context_required.contains(lemma) })
                .collect(),
            forms: cat.forms,
            description: cat.description,
        })
        .collect()
});

static SPIRIT_LEMMA_NORM: Lazy<String> = Lazy::new(|| normalize(SPIRIT_LEMMA));

/// Run the cue pass over a finished corpus.
pub(crate) fn detect_cues(corpus: &Corpus) -> Vec<Cue> {
    let mut cues: Vec<Cue> = Vec::new();

    for sentence in &corpus.sentences {
        let text = sentence.surface_text();
        let has_context = has_context_signal(sentence, &normalize(&text));

        for category in COMPILED.iter() {
            for token in &sentence.tokens {
                let Some(keyword) = match_token(category, &token.lemma, &token.form, has_context) else {
                    continue;
                };

                let duplicate = cues
                    .iter()
                    .any(|c| c.sentence == sentence.id && c.kind == category.kind && c.keyword == keyword);
                if duplicate {
                    continue;
                }

                cues.push(Cue {
                    kind: category.kind,
                    keyword,
                    form: token.form.clone(),
                    lemma: token.lemma.clone(),
                    sentence: sentence.id,
                    chapter: sentence.chapter_or_default(),
                    verse: sentence.verse_or_default(),
                    text: text.clone(),
                    description: category.description,
                });
            }
        }
    }

    cues
}

/// Apply the matching ladder to one token for one category.
///
/// Returns the cue keyword on an accepted match: the raw lemma for the lemma
/// path, the raw surface form for the fallback path.
fn match_token(category: &CompiledCategory, lemma: &str, form: &str, has_context: bool) -> Option<String> {
    let lemma_norm = normalize(lemma);
    if let Some(target) = category.targets.iter().find(|t| lemma_norm == t.text || lemma_norm.starts_with(&t.text)) {
        if !target.gated || has_context {
            return Some(lemma.to_string());
        }
        // Gate failed: the lemma match is demoted, not the whole token.
    }

    let form_norm = normalize(form);
    if category.forms.iter().any(|fragment| form_norm.contains(fragment)) {
        return Some(form.to_string());
    }

    None
}

/// Context gate for high-frequency function-word targets.
///
/// Satisfied when the sentence has a token whose lemma is the Spirit word or
/// whose normalized form carries its stem, or when the concatenated surface
/// text carries a God/Jesus stem.
fn has_context_signal(sentence: &Sentence, normalized_text: &str) -> bool {
    let spirit = sentence
        .tokens
        .iter()
        .any(|t| normalize(&t.lemma) == *SPIRIT_LEMMA_NORM || normalize(&t.form).contains(SPIRIT_STEM));
    spirit || CONTEXT_TEXT_STEMS.iter().any(|stem| normalized_text.contains(stem))
}
