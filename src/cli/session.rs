//! Interactive session: analyze repeatedly and browse this session's history

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, error};

use crate::cli::{render, validate_input};
use crate::content::{AnalyzedContent, ContentKind};
use crate::history::HistoryBuffer;
use crate::synth::{ContentSynthesizer, RandomSource};

const HELP: &str = "\
Commands:
  text <content>   Analyze article text
  url <address>    Analyze an article URL
  history          List previously analyzed content
  show [n|id]      Show a history entry again (number from the list or id
                   prefix; the latest analysis when omitted)
  help             Show this help
  quit             Leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Analyze { kind: ContentKind, content: String },
    History,
    Show(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim_start();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed.trim_end(), ""),
        };

        match word.to_lowercase().as_str() {
            "" => Command::Empty,
            "text" => Command::Analyze {
                kind: ContentKind::Text,
                content: rest.to_string(),
            },
            "url" => Command::Analyze {
                kind: ContentKind::Url,
                content: rest.trim().to_string(),
            },
            "history" | "h" => Command::History,
            "show" => Command::Show(rest.trim().to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Session state owned by the caller for the lifetime of the loop
pub struct Session<'a, R: ?Sized> {
    synthesizer: &'a ContentSynthesizer,
    rng: &'a mut R,
    history: HistoryBuffer,
}

impl<'a, R: RandomSource + ?Sized> Session<'a, R> {
    pub fn new(synthesizer: &'a ContentSynthesizer, rng: &'a mut R, history: HistoryBuffer) -> Self {
        Self {
            synthesizer,
            rng,
            history,
        }
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Run one command. Returns `false` when the session should end.
    pub async fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Analyze { kind, content } => self.analyze(kind, &content).await,
            Command::History => println!("{}", render::history(&self.history)),
            Command::Show(target) => self.show(&target),
            Command::Help => println!("{}", HELP),
            Command::Quit => return false,
            Command::Empty => {}
            Command::Unknown(word) => {
                println!("Unknown command '{}'. Type 'help' for a list of commands.", word)
            }
        }
        true
    }

    async fn analyze(&mut self, kind: ContentKind, raw: &str) {
        let content = match validate_input(raw) {
            Ok(content) => content,
            Err(e) => {
                println!("{}", e);
                return;
            }
        };

        println!("🔎 Analyzing... checking multiple sources to verify this information");
        match self.synthesizer.synthesize(content, kind, &mut *self.rng).await {
            Ok(record) => {
                print!("{}", render::report(&record));
                println!("\n{}", render::notice(&record));
                self.history.push(record);
            }
            Err(e) => {
                error!(error = %e, "analysis failed");
                println!("Analysis failed: There was an error analyzing your content. Please try again.");
            }
        }
    }

    /// Entry named by a `show` argument
    fn select(&self, target: &str) -> Option<&AnalyzedContent> {
        if target.is_empty() {
            return self.history.latest();
        }
        match target.parse::<usize>() {
            Ok(n) if n >= 1 => self.history.get(n - 1),
            Ok(_) => None,
            Err(_) => self.history.find(target),
        }
    }

    fn show(&self, target: &str) {
        match self.select(target) {
            Some(record) => print!("{}", render::report(record)),
            None if target.is_empty() => println!("{}", render::history(&self.history)),
            None => println!("No history entry '{}'. Type 'history' to list entries.", target),
        }
    }
}

/// Read commands from `input` until EOF or `quit`
pub async fn run<R, I>(session: &mut Session<'_, R>, input: I) -> Result<()>
where
    R: RandomSource + ?Sized,
    I: AsyncBufRead + Unpin,
{
    println!("TruthGuard session. Type 'help' for commands.");
    let mut lines = input.lines();
    loop {
        let Some(line) = lines.next_line().await? else {
            debug!("input closed");
            break;
        };
        if !session.handle(Command::parse(&line)).await {
            break;
        }
    }
    println!("Session ended ({} analyses kept in memory, now discarded).", session.history().len());
    Ok(())
}

/// Interactive session on stdin
pub async fn run_stdin<R: RandomSource + ?Sized>(session: &mut Session<'_, R>) -> Result<()> {
    run(session, BufReader::new(tokio::io::stdin())).await
}
