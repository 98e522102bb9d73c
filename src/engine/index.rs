//! Chapter/verse index.
//!
//! A derived, read-only lookup structure built in one pass over the corpus:
//! `chapter → verse → sentence indices`, with insertion order preserved
//! inside each verse. Sentences with no recorded chapter or verse are filed
//! under the default value 1 at build time, so the missing-metadata case
//! never surfaces to queries.
//!
//! The index stores positions into `Corpus::sentences` rather than copies;
//! every query takes the corpus alongside it.

use crate::Corpus;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub(crate) struct ChapterIndex {
    chapters: BTreeMap<u32, BTreeMap<u32, Vec<usize>>>,
}

impl ChapterIndex {
    /// Build the index from a finished corpus. Rebuilt in full on every
    /// parse; there is no incremental path.
    pub fn build(corpus: &Corpus) -> Self {
        let mut chapters: BTreeMap<u32, BTreeMap<u32, Vec<usize>>> = BTreeMap::new();
        for (pos, sentence) in corpus.sentences.iter().enumerate() {
            chapters
                .entry(sentence.chapter_or_default())
                .or_default()
                .entry(sentence.verse_or_default())
                .or_default()
                .push(pos);
        }
        ChapterIndex { chapters }
    }

    /// Chapters with at least one recorded verse, ascending.
    pub fn chapters(&self) -> Vec<u32> {
        self.chapters.keys().copied().collect()
    }

    pub fn has_chapter(&self, chapter: u32) -> bool {
        self.chapters.contains_key(&chapter)
    }

    /// Number of distinct verses recorded in `chapter`.
    pub fn verse_count(&self, chapter: u32) -> usize {
        self.chapters.get(&chapter).map(|verses| verses.len()).unwrap_or(0)
    }

    /// Highest verse number recorded in `chapter`.
    pub fn max_verse(&self, chapter: u32) -> Option<u32> {
        self.chapters.get(&chapter).and_then(|verses| verses.keys().next_back().copied())
    }

    /// Sentence positions in `chapter`, ascending by verse and in insertion
    /// order within each verse.
    pub fn sentences_in_chapter(&self, chapter: u32) -> Vec<usize> {
        match self.chapters.get(&chapter) {
            Some(verses) => verses.values().flatten().copied().collect(),
            None => Vec::new(),
        }
    }

    /// Concatenated surface text of `chapter`, verses `start..=end`.
    ///
    /// Verses iterate in ascending numeric order and sentences within a
    /// verse in insertion order; token forms are single-space-joined and the
    /// result trimmed. Absent chapters and empty ranges yield `""`.
    pub fn text_range(&self, corpus: &Corpus, chapter: u32, start: u32, end: u32) -> String {
        let Some(verses) = self.chapters.get(&chapter) else {
            return String::new();
        };
        if start > end {
            return String::new();
        }

        let mut out = String::new();
        for positions in verses.range(start..=end).map(|(_, positions)| positions) {
            for &pos in positions {
                let Some(sentence) = corpus.sentences.get(pos) else { continue };
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&sentence.surface_text());
            }
        }
        out.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::ChapterIndex;
    use crate::engine::parser::DocumentParser;

    fn fixture() -> (crate::Corpus, ChapterIndex) {
        let input = "\
1\tΚαὶ\tκαί\t_\t_\t_\t_\t_\t_\tRef=MARK_1.2
2\tλέγει\tλέγω\t_\t_\t_\t_\t_\t_\t_

1\tεὐθὺς\tεὐθύς\t_\t_\t_\t_\t_\t_\tRef=MARK_1.1

1\tἦν\tεἰμί\t_\t_\t_\t_\t_\t_\tRef=MARK_1.2

1\tἦλθεν\tἔρχομαι\t_\t_\t_\t_\t_\t_\tRef=MARK_2.1
";
        let (corpus, _) = DocumentParser::parse(input);
        let index = ChapterIndex::build(&corpus);
        (corpus, index)
    }

    #[test]
    fn text_range_orders_by_verse_then_insertion() {
        let (corpus, index) = fixture();
        // Verse 1 precedes verse 2 even though verse 2's first sentence was
        // parsed earlier; within verse 2, document order is kept.
        assert_eq!(index.text_range(&corpus, 1, 1, 2), "εὐθὺς Καὶ λέγει ἦν");
    }

    #[test]
    fn text_range_respects_bounds() {
        let (corpus, index) = fixture();
        assert_eq!(index.text_range(&corpus, 1, 2, 2), "Καὶ λέγει ἦν");
        assert_eq!(index.text_range(&corpus, 2, 1, 1), "ἦλθεν");
    }

    #[test]
    fn text_range_is_empty_for_absent_chapter_or_range() {
        let (corpus, index) = fixture();
        assert_eq!(index.text_range(&corpus, 7, 1, 10), "");
        assert_eq!(index.text_range(&corpus, 1, 5, 9), "");
        assert_eq!(index.text_range(&corpus, 1, 2, 1), "");
    }

    #[test]
    fn missing_metadata_files_under_chapter_one_verse_one() {
        let (corpus, _) = DocumentParser::parse("1\tλέγει\tλέγω\t_\t_\t_\t_\t_\t_\t_\n\n");
        let index = ChapterIndex::build(&corpus);
        assert!(index.has_chapter(1));
        assert_eq!(index.verse_count(1), 1);
        assert_eq!(index.text_range(&corpus, 1, 1, 1), "λέγει");
    }

    #[test]
    fn chapter_accessors() {
        let (_, index) = fixture();
        assert_eq!(index.chapters(), vec![1, 2]);
        assert_eq!(index.verse_count(1), 2);
        assert_eq!(index.max_verse(1), Some(2));
        assert_eq!(index.max_verse(3), None);
        assert_eq!(index.sentences_in_chapter(1), vec![1, 0, 2]);
    }
}
