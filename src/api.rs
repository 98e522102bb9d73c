//! Public analysis surface.
//!
//! [`Analysis`] is the explicitly constructed, explicitly owned value that
//! replaces any notion of a shared parser singleton: build it once from the
//! raw text, then query it by reference. Build-then-query is strict — every
//! derived structure (index, character registry, cue list) is produced
//! inside [`Analysis::build`] and read-only afterwards; changing the source
//! means building a new `Analysis`.
//!
//! Only an unreadable source escapes as an error ([`SourceError`], from the
//! path-loading entry point). Everything downstream of a loaded text is
//! deterministic and infallible: malformed data lines are dropped and
//! counted, missing chapter context defaults to 1 at query time, and
//! non-matches are ordinary negative outcomes.

use crate::engine::detector::detect_cues;
use crate::engine::index::ChapterIndex;
use crate::engine::matcher::extract_characters;
use crate::engine::parser::{DocumentParser, ParseStats};
use crate::{CharacterEntry, Corpus, Cue, Occurrence};
use std::path::Path;
use thiserror::Error;

/// The one failure mode surfaced to callers: the raw text could not be
/// obtained. No corpus is produced in that case.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not load source text: {0}")]
    Unavailable(#[from] std::io::Error),
}

/// Summary of one chapter, as returned by [`Analysis::chapter_summary`].
#[derive(Debug, Clone)]
pub struct ChapterSummary<'a> {
    pub chapter: u32,
    /// Distinct verses recorded in the chapter.
    pub verse_count: usize,
    /// Sentences filed under the chapter.
    pub sentence_count: usize,
    /// Canonical names of characters mentioned in the chapter, in
    /// registry-output (first-occurrence) order.
    pub characters: Vec<String>,
    /// Cues located in the chapter, in detection order.
    pub cues: Vec<&'a Cue>,
}

/// A fully analyzed document: corpus, index, character registry, cue list.
#[derive(Debug)]
pub struct Analysis {
    corpus: Corpus,
    index: ChapterIndex,
    characters: Vec<CharacterEntry>,
    cues: Vec<Cue>,
    stats: ParseStats,
}

impl Analysis {
    /// Run the full pipeline over `text`. Infallible: the result is a
    /// best-effort analysis of whatever well-formed content the text holds.
    pub fn build(text: &str) -> Self {
        let (corpus, stats) = DocumentParser::parse(text);
        let index = ChapterIndex::build(&corpus);
        let characters = extract_characters(&corpus);
        let cues = detect_cues(&corpus);
        Analysis { corpus, index, characters, cues, stats }
    }

    /// Read the annotated source from `path` and build the analysis.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::build(&text))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// The full character registry output, in first-occurrence order.
    pub fn characters(&self) -> &[CharacterEntry] {
        &self.characters
    }

    /// Every detected cue, in detection order.
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Chapters with at least one recorded verse, ascending.
    pub fn chapters(&self) -> Vec<u32> {
        self.index.chapters()
    }

    /// Highest verse number recorded in `chapter`.
    pub fn max_verse(&self, chapter: u32) -> Option<u32> {
        self.index.max_verse(chapter)
    }

    /// Surface text of `chapter`, verses `start..=end`; `""` when the
    /// chapter is absent or the range is empty.
    pub fn text_range(&self, chapter: u32, start: u32, end: u32) -> String {
        self.index.text_range(&self.corpus, chapter, start, end)
    }

    /// Occurrences of the character `name` within `chapter`, in document
    /// order. Empty for unknown names.
    pub fn character_in_chapter(&self, name: &str, chapter: u32) -> Vec<&Occurrence> {
        self.characters
            .iter()
            .filter(|entry| entry.name == name)
            .flat_map(|entry| entry.occurrences.iter())
            .filter(|occ| occ.chapter == chapter)
            .collect()
    }

    /// Cues located in `chapter`, in detection order.
    pub fn cues_in_chapter(&self, chapter: u32) -> Vec<&Cue> {
        self.cues.iter().filter(|cue| cue.chapter == chapter).collect()
    }

    /// Chapter roll-up, or `None` when the chapter has no recorded verses.
    pub fn chapter_summary(&self, chapter: u32) -> Option<ChapterSummary<'_>> {
        if !self.index.has_chapter(chapter) {
            return None;
        }

        let characters = self
            .characters
            .iter()
            .filter(|entry| entry.occurrences.iter().any(|occ| occ.chapter == chapter))
            .map(|entry| entry.name.clone())
            .collect();

        Some(ChapterSummary {
            chapter,
            verse_count: self.index.verse_count(chapter),
            sentence_count: self.index.sentences_in_chapter(chapter).len(),
            characters,
            cues: self.cues_in_chapter(chapter),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Analysis;
    use crate::CueKind;

    /// The opening of Mark, annotated in the ten-field layout.
    fn fixture() -> &'static str {
        "\
# source = Mark 1
# text = Ἀρχὴ τοῦ εὐαγγελίου Ἰησοῦ Χριστοῦ
1\tἈρχὴ\tἀρχή\tNOUN\tN-\t_\t0\troot\t_\tRef=MARK_1.1
2\tτοῦ\tὁ\tDET\tRA\t_\t3\tdet\t_\t_
3\tεὐαγγελίου\tεὐαγγέλιον\tNOUN\tN-\t_\t1\tnmod\t_\t_
4\tἸησοῦ\tἸησοῦς\tPROPN\tN-\t_\t3\tnmod\t_\t_
5\tΧριστοῦ\tΧριστός\tPROPN\tN-\t_\t4\tflat\t_\t_

1\tκαθὼς\tκαθώς\tADV\tD-\t_\t2\tadvmod\t_\tRef=MARK_1.2
2\tγέγραπται\tγράφω\tVERB\tV-\t_\t0\troot\t_\t_
3\tἐν\tἐν\tADP\tR-\t_\t5\tcase\t_\t_
4\tτῷ\tὁ\tDET\tRA\t_\t5\tdet\t_\t_
5\tἨσαΐᾳ\tἨσαΐας\tPROPN\tN-\t_\t2\tobl\t_\t_

1\tἐγένετο\tγίνομαι\tVERB\tV-\t_\t0\troot\t_\tRef=MARK_1.4
2\tἸωάννης\tἸωάννης\tPROPN\tN-\t_\t1\tnsubj\t_\t_
3\tἐν\tἐν\tADP\tR-\t_\t5\tcase\t_\t_
4\tτῇ\tὁ\tDET\tRA\t_\t5\tdet\t_\t_
5\tἐρήμῳ\tἔρημος\tADJ\tA-\t_\t1\tobl\t_\t_

1\tἦλθεν\tἔρχομαι\tVERB\tV-\t_\t0\troot\t_\tRef=MARK_2.1
2\tἸησοῦς\tἸησοῦς\tPROPN\tN-\t_\t1\tnsubj\t_\t_
3\tεἰς\tεἰς\tADP\tR-\t_\t4\tcase\t_\t_
4\tΚαφαρναούμ\tΚαφαρναούμ\tPROPN\tN-\t_\t1\tobl\t_\t_
"
    }

    #[test]
    fn build_assembles_the_whole_pipeline() {
        let analysis = Analysis::build(fixture());

        assert_eq!(analysis.corpus().len(), 4);
        assert_eq!(analysis.stats().sentences, 4);
        assert_eq!(analysis.stats().malformed, 0);
        assert_eq!(analysis.chapters(), vec![1, 2]);
        assert_eq!(analysis.corpus().book, "Mark");
    }

    #[test]
    fn text_range_over_the_opening_verses() {
        let analysis = Analysis::build(fixture());
        assert_eq!(
            analysis.text_range(1, 1, 2),
            "Ἀρχὴ τοῦ εὐαγγελίου Ἰησοῦ Χριστοῦ καθὼς γέγραπται ἐν τῷ Ἠσαΐᾳ"
        );
        assert_eq!(analysis.text_range(3, 1, 5), "");
    }

    #[test]
    fn character_queries_filter_by_chapter() {
        let analysis = Analysis::build(fixture());

        let jesus_ch1 = analysis.character_in_chapter("Jesus", 1);
        assert_eq!(jesus_ch1.len(), 1);
        assert_eq!(jesus_ch1[0].verse, 1);
        assert_eq!(jesus_ch1[0].form, "Ἰησοῦ");

        let jesus_ch2 = analysis.character_in_chapter("Jesus", 2);
        assert_eq!(jesus_ch2.len(), 1);
        assert_eq!(jesus_ch2[0].form, "Ἰησοῦς");

        assert!(analysis.character_in_chapter("Nicodemus", 1).is_empty());
    }

    #[test]
    fn registry_export_carries_variants_and_counts() {
        let analysis = Analysis::build(fixture());
        let jesus = analysis.characters().iter().find(|e| e.name == "Jesus").unwrap();
        assert_eq!(jesus.mentions, 2);
        assert_eq!(jesus.variants, vec!["Ἰησοῦ", "Ἰησοῦς"]);

        let names: Vec<&str> = analysis.characters().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Jesus", "Christ", "Isaiah", "John"]);
    }

    #[test]
    fn chapter_summary_rolls_up_the_chapter() {
        let analysis = Analysis::build(fixture());
        let summary = analysis.chapter_summary(1).unwrap();

        assert_eq!(summary.chapter, 1);
        assert_eq!(summary.verse_count, 3);
        assert_eq!(summary.sentence_count, 3);
        assert_eq!(summary.characters, vec!["Jesus", "Christ", "Isaiah", "John"]);
        assert!(summary.cues.iter().any(|c| c.kind == CueKind::Primacy && c.keyword == "ἀρχή"));

        assert!(analysis.chapter_summary(9).is_none());
    }

    #[test]
    fn cues_in_chapter_keeps_detection_order() {
        let analysis = Analysis::build(fixture());
        let cues = analysis.cues_in_chapter(1);
        assert!(!cues.is_empty());
        for pair in cues.windows(2) {
            assert!(pair[0].sentence <= pair[1].sentence);
        }
        assert!(analysis.cues_in_chapter(7).is_empty());
    }

    #[test]
    fn load_surfaces_missing_sources_as_errors() {
        let err = Analysis::load("/definitely/not/here.conllu").unwrap_err();
        assert!(err.to_string().starts_with("could not load source text"));
    }
}
