use diegesis::Analysis;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_overview(analysis: &Analysis, color: bool) {
    let palette = ansi::Palette::new(color);
    let book = if analysis.corpus().book.is_empty() { "<unnamed>" } else { &analysis.corpus().book };
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Analyzed: {book}"), ansi::CYAN)));

    let stats = analysis.stats();
    println!("\n{}", palette.paint("━━━ Source ━━━", ansi::GRAY));
    println!(
        "  Lines: {}  │  Comments: {}  │  Tokens: {}  │  Dropped: {}  │  Sentences: {}",
        palette.paint(stats.lines.to_string(), ansi::GREEN),
        palette.dim(stats.comments.to_string()),
        palette.paint(stats.data_lines.to_string(), ansi::GREEN),
        if stats.malformed > 0 {
            palette.paint(stats.malformed.to_string(), ansi::YELLOW)
        } else {
            palette.dim("0")
        },
        palette.paint(stats.sentences.to_string(), ansi::GREEN),
    );

    println!("\n{}", palette.paint("━━━ Chapters ━━━", ansi::GRAY));
    for chapter in analysis.chapters() {
        let Some(summary) = analysis.chapter_summary(chapter) else { continue };
        println!(
            "  {} {} verses, {} sentences, {} characters, {} cues",
            palette.paint(format!("[{chapter}]"), ansi::BLUE),
            summary.verse_count,
            summary.sentence_count,
            summary.characters.len(),
            summary.cues.len(),
        );
    }
    println!();
}

pub fn print_chapter(analysis: &Analysis, chapter: u32, color: bool) {
    let palette = ansi::Palette::new(color);
    let Some(summary) = analysis.chapter_summary(chapter) else {
        println!("{}", palette.dim(format!("No recorded verses for chapter {chapter}")));
        return;
    };

    println!("\n{}", palette.bold(palette.paint(format!("⚙  Chapter {chapter}"), ansi::CYAN)));
    println!(
        "  {} verses  │  {} sentences",
        palette.paint(summary.verse_count.to_string(), ansi::GREEN),
        palette.paint(summary.sentence_count.to_string(), ansi::GREEN),
    );

    println!("\n{}", palette.paint("━━━ Characters ━━━", ansi::GRAY));
    if summary.characters.is_empty() {
        println!("{}", palette.dim("  none"));
    }
    for name in &summary.characters {
        let mentions = analysis.character_in_chapter(name, chapter).len();
        println!("  {} {}", palette.paint(name, ansi::BLUE), palette.dim(format!("×{mentions}")));
    }

    println!("\n{}", palette.paint("━━━ Cues ━━━", ansi::GRAY));
    if summary.cues.is_empty() {
        println!("{}", palette.dim("  none"));
    }
    for cue in &summary.cues {
        println!(
            "  {} {} {}",
            palette.paint(format!("{}:{}", cue.chapter, cue.verse), ansi::YELLOW),
            palette.bold(palette.paint(&cue.keyword, ansi::GREEN)),
            palette.paint(cue.kind.label(), ansi::BLUE),
        );
        println!("      {}", palette.dim(&cue.text));
    }
    println!();
}

pub fn print_characters(analysis: &Analysis, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.paint("━━━ Character registry ━━━", ansi::GRAY));
    if analysis.characters().is_empty() {
        println!("{}", palette.dim("  no registered characters attested"));
    }
    for entry in analysis.characters() {
        println!(
            "  {} {}",
            palette.bold(palette.paint(&entry.name, ansi::BLUE)),
            palette.dim(format!("×{}", entry.mentions)),
        );
        println!("      {} {}", palette.dim("variants:"), entry.variants.join(" "));
    }
    println!();
}

pub fn print_cues(analysis: &Analysis, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.paint("━━━ Discourse cues ━━━", ansi::GRAY));
    if analysis.cues().is_empty() {
        println!("{}", palette.dim("  none detected"));
    }
    for (idx, cue) in analysis.cues().iter().enumerate() {
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            palette.paint(format!("{}:{}", cue.chapter, cue.verse), ansi::YELLOW),
            palette.bold(palette.paint(&cue.keyword, ansi::GREEN)),
            palette.dim("│"),
            palette.paint(cue.kind.label(), ansi::BLUE),
        );
        println!("      {}", palette.dim(cue.description));
    }
    println!();
}
