//! Line tokenizer, sentence assembler, and metadata extractor.
//!
//! [`DocumentParser`] consumes the raw annotated text line by line and
//! produces the [`Corpus`]. Each line is classified as one of three things:
//!
//! ```text
//! "# source = Mark 1"   comment   directives update tracking state
//! ""                    blank     flush the token buffer into a Sentence
//! "1\tλέγει\tλέγω\t…"   data      ten tab-separated fields -> Token
//! ```
//!
//! Chapter/verse assignment has two signal sources, applied as each line is
//! seen:
//!
//! - `# source = <book> <chapter>` sets the tracked chapter (the last integer
//!   on the line) for all following sentences until the next directive.
//! - A `Ref=<BOOK>_<chapter>.<verse>` entry in the `misc` field of a
//!   sentence's *first* token overrides both chapter and verse for that
//!   sentence only. Ref entries on later tokens are ignored for assignment.
//!
//! A sentence that never receives either signal keeps `None`; consumers
//! default to 1 at query time.
//!
//! Data lines with fewer than ten fields are dropped (counted in
//! [`ParseStats::malformed`], never fatal). Sentence ids are assigned at
//! flush time and are strictly sequential from 0 regardless of how many
//! comment or blank lines intervene.

use crate::{Corpus, Sentence, Token};

/// Per-parse line tallies.
///
/// Collected for reporting only; never consulted by parse logic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseStats {
    /// Total lines seen.
    pub lines: usize,
    /// Comment lines (leading `#`).
    pub comments: usize,
    /// Well-formed data lines that produced a token.
    pub data_lines: usize,
    /// Data lines dropped for having fewer than ten fields.
    pub malformed: usize,
    /// Sentences flushed.
    pub sentences: usize,
}

/// Number of tab-separated fields in a well-formed data line.
const FIELD_COUNT: usize = 10;

/// Stateful single-pass document parser.
///
/// Usage: `DocumentParser::parse(text)` runs the whole pipeline stage and
/// returns the finished corpus; the struct itself is an implementation
/// detail of that one call.
#[derive(Debug, Default)]
pub(crate) struct DocumentParser {
    sentences: Vec<Sentence>,
    buffer: Vec<Token>,
    /// Book name from the most recent `# source` directive (or the first
    /// `Ref=` entry when no directive ever names one).
    book: String,
    /// Tracked chapter from `# source` directives; persists across flushes.
    chapter: Option<u32>,
    /// Literal text from a `# text` directive; cleared at every flush.
    pending_text: Option<String>,
    /// Chapter/verse from the pending sentence's first-token `Ref=` entry;
    /// scoped to that sentence and cleared at flush.
    ref_chapter: Option<u32>,
    ref_verse: Option<u32>,
    stats: ParseStats,
}

impl DocumentParser {
    /// Parse the full raw text into a corpus.
    ///
    /// Never fails: anomalies short of an unreadable source are absorbed
    /// (malformed lines dropped, missing metadata defaulted downstream) and
    /// the result is a best-effort corpus.
    pub fn parse(text: &str) -> (Corpus, ParseStats) {
        let mut parser = DocumentParser::default();
        for line in text.lines() {
            parser.take_line(line);
        }
        // A missing trailing blank line must not lose the last sentence.
        parser.flush();

        let DocumentParser { sentences, book, stats, .. } = parser;
        (Corpus { sentences, book }, stats)
    }

    fn take_line(&mut self, line: &str) {
        self.stats.lines += 1;
        if line.starts_with('#') {
            self.stats.comments += 1;
            self.take_comment(line);
        } else if line.trim().is_empty() {
            self.flush();
        } else {
            self.take_data(line);
        }
    }

    /// Interpret the `source` and `text` directives; other comments pass by.
    fn take_comment(&mut self, line: &str) {
        if let Some(rest) = line.strip_prefix("# text =") {
            self.pending_text = Some(rest.trim().to_string());
            return;
        }

        if regex!(r"^#\s*source\s*=").is_match(line) {
            // The chapter is the last integer on the line; the book name is
            // whatever sits between the `=` and that integer.
            let Some(m) = regex!(r"\d+").find_iter(line).last() else { return };
            if let Ok(chapter) = m.as_str().parse::<u32>() {
                self.chapter = Some(chapter);
            }
            if let Some((_, after_eq)) = line.split_once('=') {
                let offset = line.len() - after_eq.len();
                if let Some(len) = m.start().checked_sub(offset) {
                    let book = after_eq[..len].trim();
                    if !book.is_empty() {
                        self.book = book.to_string();
                    }
                }
            }
        }
    }

    /// Split a data line into a token and append it to the sentence buffer.
    fn take_data(&mut self, line: &str) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < FIELD_COUNT {
            self.stats.malformed += 1;
            return;
        }
        self.stats.data_lines += 1;

        let token = Token {
            // Multiword-range ids ("1-2") are not positional and come out as 0.
            id: fields[0].parse().unwrap_or(0),
            form: fields[1].to_string(),
            lemma: fields[2].to_string(),
            upos: fields[3].to_string(),
            xpos: fields[4].to_string(),
            feats: fields[5].to_string(),
            head: fields[6].to_string(),
            deprel: fields[7].to_string(),
            deps: fields[8].to_string(),
            misc: fields[9].to_string(),
        };

        // First-token-wins: only the opening token of a sentence may set the
        // sentence's reference.
        if self.buffer.is_empty() {
            if let Some((book, chapter, verse)) = parse_ref(&token.misc) {
                self.ref_chapter = Some(chapter);
                self.ref_verse = Some(verse);
                if self.book.is_empty() {
                    self.book = book;
                }
            }
        }

        self.buffer.push(token);
    }

    /// Flush a non-empty buffer into the next sentence.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            // A `# text` directive followed by no tokens must not leak into
            // the next sentence.
            self.pending_text = None;
            return;
        }

        let sentence = Sentence {
            id: self.sentences.len(),
            tokens: std::mem::take(&mut self.buffer),
            book: self.book.clone(),
            chapter: self.ref_chapter.or(self.chapter),
            verse: self.ref_verse.take(),
            text: self.pending_text.take(),
        };
        self.ref_chapter = None;
        self.sentences.push(sentence);
        self.stats.sentences += 1;
    }
}

/// Extract the `Ref=<BOOK>_<chapter>.<verse>` entry from a `misc` field.
///
/// `misc` holds `;`/`&`-delimited key=value pairs; every key other than
/// `Ref` is carried verbatim and ignored here.
fn parse_ref(misc: &str) -> Option<(String, u32, u32)> {
    for pair in misc.split([';', '&']) {
        let Some(caps) = regex!(r"^Ref=([A-Za-z]+)_(\d+)\.(\d+)$").captures(pair.trim()) else {
            continue;
        };
        let book = caps[1].to_string();
        let chapter = caps[2].parse().ok()?;
        let verse = caps[3].parse().ok()?;
        return Some((book, chapter, verse));
    }
    None
}
