extern crate self as diegesis;

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

pub mod greek;

pub use api::{Analysis, ChapterSummary, SourceError};
pub use engine::parser::ParseStats;

// --- Core data model ---------------------------------------------------------

/// One annotated word: a single ten-field data line of the source text.
///
/// Fields follow the annotation layout positionally. The dependency fields
/// (`head`, `deprel`, `deps`) are carried verbatim; the core never interprets
/// them beyond reporting `deprel` as an occurrence role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Position within the sentence, as given by the annotation.
    pub id: u32,
    /// Surface form: the word exactly as written in the source.
    pub form: String,
    /// Dictionary (citation) form.
    pub lemma: String,
    /// Universal part-of-speech tag.
    pub upos: String,
    /// Language-specific part-of-speech tag.
    pub xpos: String,
    /// Morphological feature string.
    pub feats: String,
    /// Dependency head index (kept as written).
    pub head: String,
    /// Dependency relation label.
    pub deprel: String,
    /// Enhanced-dependency string.
    pub deps: String,
    /// Key=value metadata; only the `Ref=` entry is interpreted.
    pub misc: String,
}

/// An assembled sentence: an ordered run of tokens between blank lines.
///
/// Immutable once flushed by the parser. `chapter`/`verse` are fixed at
/// assembly time; consumers default missing values to 1 at query time.
#[derive(Debug, Clone)]
pub struct Sentence {
    /// 0-based, strictly sequential in document order.
    pub id: usize,
    pub tokens: Vec<Token>,
    pub book: String,
    pub chapter: Option<u32>,
    pub verse: Option<u32>,
    /// Literal source text from a `# text =` directive, when present.
    pub text: Option<String>,
}

impl Sentence {
    /// Chapter with the query-time default applied.
    pub fn chapter_or_default(&self) -> u32 {
        self.chapter.unwrap_or(1)
    }

    /// Verse with the query-time default applied.
    pub fn verse_or_default(&self) -> u32 {
        self.verse.unwrap_or(1)
    }

    /// Token surface forms joined by single spaces.
    pub fn surface_text(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&token.form);
        }
        out
    }
}

/// The root aggregate: every sentence of the document, in order.
///
/// Built once by the parser and read-only thereafter. Derived structures
/// refer to sentences by index into `sentences`.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub sentences: Vec<Sentence>,
    pub book: String,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A single attested mention of a registered character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Id of the sentence containing the mention.
    pub sentence: usize,
    pub chapter: u32,
    pub verse: u32,
    /// Token id within the sentence.
    pub token: u32,
    /// Surface form as attested.
    pub form: String,
    pub lemma: String,
    /// Dependency relation label of the token (its syntactic role).
    pub role: String,
}

/// Aggregated mentions of one registered character.
#[derive(Debug, Clone)]
pub struct CharacterEntry {
    /// Canonical display name (unique key).
    pub name: String,
    /// Distinct surface forms, in first-seen order.
    pub variants: Vec<String>,
    /// Every mention, in document order.
    pub occurrences: Vec<Occurrence>,
    /// Total mention count (== `occurrences.len()`).
    pub mentions: usize,
}

/// The five narrative-discourse cue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueKind {
    /// First mentions and beginnings that anchor a reader's attention.
    Primacy,
    /// Explicit cause/purpose connectives.
    Causal,
    /// Perception verbs and presentatives steering the narrative eye.
    Focalization,
    /// Negation and lack: what the narrator marks as missing.
    Absence,
    /// Forward reference: announcements of what is yet to happen.
    Prolepsis,
}

impl CueKind {
    pub const ALL: [CueKind; 5] =
        [CueKind::Primacy, CueKind::Causal, CueKind::Focalization, CueKind::Absence, CueKind::Prolepsis];

    pub fn label(self) -> &'static str {
        match self {
            CueKind::Primacy => "primacy",
            CueKind::Causal => "causal",
            CueKind::Focalization => "focalization",
            CueKind::Absence => "absence",
            CueKind::Prolepsis => "prolepsis",
        }
    }
}

impl std::fmt::Display for CueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One detected discourse cue.
///
/// Invariant: no two cues in an analysis share the same
/// `(sentence, kind, keyword)` triple.
#[derive(Debug, Clone)]
pub struct Cue {
    pub kind: CueKind,
    /// The lemma (lemma-path match) or surface form (surface-path match)
    /// that triggered the detection.
    pub keyword: String,
    /// Surface form of the matched token.
    pub form: String,
    /// Lemma of the matched token.
    pub lemma: String,
    pub sentence: usize,
    pub chapter: u32,
    pub verse: u32,
    /// Concatenated surface text of the containing sentence.
    pub text: String,
    /// Human-readable category description.
    pub description: &'static str,
}
