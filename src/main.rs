mod report;

use diegesis::Analysis;
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let analysis = match &config.input {
        Input::Path(path) => match Analysis::load(path) {
            Ok(analysis) => analysis,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
        Input::Stdin(text) => Analysis::build(text),
    };

    match config.action {
        Action::Overview => report::print_overview(&analysis, config.color),
        Action::Chapter(chapter) => report::print_chapter(&analysis, chapter, config.color),
        Action::Characters => report::print_characters(&analysis, config.color),
        Action::Cues => report::print_cues(&analysis, config.color),
    }
}

enum Input {
    Path(String),
    Stdin(String),
}

enum Action {
    Overview,
    Chapter(u32),
    Characters,
    Cues,
}

struct CliConfig {
    input: Input,
    action: Action,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut path: Option<String> = None;
    let mut action = Action::Overview;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("diegesis {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--characters" => action = Action::Characters,
            "--cues" => action = Action::Cues,
            "--chapter" => {
                let value = args.next().ok_or_else(|| "error: --chapter expects a number".to_string())?;
                action = Action::Chapter(parse_chapter(&value)?);
            }
            _ if arg.starts_with("--chapter=") => {
                let value = arg.trim_start_matches("--chapter=");
                action = Action::Chapter(parse_chapter(value)?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if path.is_some() {
                    return Err("error: input path provided multiple times".to_string());
                }
                path = Some(arg);
            }
        }
    }

    let input = match path {
        Some(path) => Input::Path(path),
        None => Input::Stdin(read_stdin_input()?),
    };

    Ok(CliConfig { input, action, color })
}

fn parse_chapter(value: &str) -> Result<u32, String> {
    value.parse().map_err(|_| format!("error: invalid chapter '{value}'"))
}

fn read_stdin_input() -> Result<String, String> {
    if io::stdin().is_terminal() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn help_text() -> String {
    format!(
        "diegesis {version}

Narrative-discourse analyzer for token-per-line annotated Greek texts.

Usage:
  diegesis [OPTIONS] [path]

Reads the annotated source from <path>, or from stdin when no path is given.

Options:
  --chapter <n>    Print the summary of one chapter.
  --characters     Print the character registry with variants and mentions.
  --cues           Print every detected discourse cue.
  --color          Force ANSI color output.
  --no-color       Disable ANSI color output.
  -h, --help       Show this help message.
  -V, --version    Print version information.

Exit codes:
  0  Success.
  1  Source text could not be loaded.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
