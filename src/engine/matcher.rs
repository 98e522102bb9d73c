//! Registry-driven character/entity matching.
//!
//! A single forward pass over every token of every sentence. Each token's
//! raw `lemma` is tested for exact equality against the registry entries in
//! declaration order; the first hit wins and the scan for that token stops,
//! so a token is attributed to at most one character. No normalization is
//! applied here: the registry keys are the lemmas exactly as the annotation
//! writes them.
//!
//! Entries are created lazily, so the returned list is in first-occurrence
//! order.

use crate::rules::characters::REGISTRY;
use crate::{CharacterEntry, Corpus, Occurrence};

/// Run the character pass over a finished corpus.
pub(crate) fn extract_characters(corpus: &Corpus) -> Vec<CharacterEntry> {
    let mut entries: Vec<CharacterEntry> = Vec::new();

    for sentence in &corpus.sentences {
        for token in &sentence.tokens {
            let Some(name) = registry_name(&token.lemma) else {
                continue;
            };

            let idx = match entries.iter().position(|e| e.name == name) {
                Some(idx) => idx,
                None => {
                    entries.push(CharacterEntry {
                        name: name.to_string(),
                        variants: Vec::new(),
                        occurrences: Vec::new(),
                        mentions: 0,
                    });
                    entries.len() - 1
                }
            };
            let entry = &mut entries[idx];

            if !entry.variants.iter().any(|v| v == &token.form) {
                entry.variants.push(token.form.clone());
            }
            entry.occurrences.push(Occurrence {
                sentence: sentence.id,
                chapter: sentence.chapter_or_default(),
                verse: sentence.verse_or_default(),
                token: token.id,
                form: token.form.clone(),
                lemma: token.lemma.clone(),
                role: token.deprel.clone(),
            });
            entry.mentions += 1;
        }
    }

    entries
}

/// First registry entry whose lemma equals `lemma`, in declaration order.
fn registry_name(lemma: &str) -> Option<&'static str> {
    REGISTRY.iter().find(|(target, _)| *target == lemma).map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::extract_characters;
    use crate::engine::parser::DocumentParser;

    #[test]
    fn aggregates_mentions_across_sentences() {
        let input = "\
1\tἸησοῦς\tἸησοῦς\tPROPN\t_\t_\t0\tnsubj\t_\tRef=MARK_1.9
2\tἦλθεν\tἔρχομαι\tVERB\t_\t_\t0\troot\t_\t_

1\tὁ\tὁ\tDET\t_\t_\t2\tdet\t_\tRef=MARK_1.14
2\tἸησοῦν\tἸησοῦς\tPROPN\t_\t_\t0\tobj\t_\t_

";
        let entries = extract_characters(&DocumentParser::parse(input).0);
        assert_eq!(entries.len(), 1);

        let jesus = &entries[0];
        assert_eq!(jesus.name, "Jesus");
        assert_eq!(jesus.mentions, 2);
        assert_eq!(jesus.occurrences.len(), 2);
        assert_eq!(jesus.variants, vec!["Ἰησοῦς", "Ἰησοῦν"]);
        assert_eq!(jesus.occurrences[0].chapter, 1);
        assert_eq!(jesus.occurrences[0].verse, 9);
        assert_eq!(jesus.occurrences[0].role, "nsubj");
        assert_eq!(jesus.occurrences[1].verse, 14);
    }

    #[test]
    fn repeated_surface_forms_collapse_into_one_variant() {
        let input = "\
1\tἸησοῦς\tἸησοῦς\t_\t_\t_\t_\t_\t_\t_

1\tἸησοῦς\tἸησοῦς\t_\t_\t_\t_\t_\t_\t_

";
        let entries = extract_characters(&DocumentParser::parse(input).0);
        assert_eq!(entries[0].mentions, 2);
        assert_eq!(entries[0].variants, vec!["Ἰησοῦς"]);
    }

    #[test]
    fn entries_appear_in_first_occurrence_order() {
        let input = "\
1\tΠέτρος\tΠέτρος\t_\t_\t_\t_\t_\t_\t_
2\tἸησοῦς\tἸησοῦς\t_\t_\t_\t_\t_\t_\t_

";
        let entries = extract_characters(&DocumentParser::parse(input).0);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Peter", "Jesus"]);
    }

    #[test]
    fn matching_is_exact_on_the_raw_lemma() {
        // Accentless or inflected lemma strings are not registry keys.
        let input = "\
1\tΙησους\tΙησους\t_\t_\t_\t_\t_\t_\t_

";
        let entries = extract_characters(&DocumentParser::parse(input).0);
        assert!(entries.is_empty());
    }

    #[test]
    fn unmatched_tokens_leave_no_trace() {
        let input = "\
1\tΚαὶ\tκαί\t_\t_\t_\t_\t_\t_\t_
2\tεὐθὺς\tεὐθύς\t_\t_\t_\t_\t_\t_\t_

";
        let entries = extract_characters(&DocumentParser::parse(input).0);
        assert!(entries.is_empty());
    }
}
