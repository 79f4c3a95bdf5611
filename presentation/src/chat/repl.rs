//! REPL (Read-Eval-Print Loop) for interactive queries

use crate::config::ReplConfig;
use crate::form::terminal::TerminalForm;
use colored::Colorize;
use query_form_application::{Activation, QueryFormController, QueryGateway, SubmitOutcome};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// A line entered at the prompt
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Help,
    Server,
    Unknown(&'a str),
    Question(&'a str),
}

impl<'a> Input<'a> {
    /// Lines starting with `/` are commands; anything else, including the
    /// empty line, is a submit with that line as the question.
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if !trimmed.starts_with('/') {
            return Self::Question(line);
        }
        match trimmed {
            "/quit" | "/exit" | "/q" => Self::Quit,
            "/help" | "/h" | "/?" => Self::Help,
            "/server" => Self::Server,
            other => Self::Unknown(other),
        }
    }
}

/// File-backed history at `path`, creating its directory first
fn open_history(path: &Path) -> Option<FileBackedHistory> {
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!("Could not create history directory {}: {}", parent.display(), e);
        return None;
    }
    FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf())
        .map_err(|e| warn!("Could not open history file {}: {}", path.display(), e))
        .ok()
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive query REPL
pub struct QueryRepl<G: QueryGateway + 'static> {
    controller: Arc<QueryFormController<G, TerminalForm>>,
    form: Arc<TerminalForm>,
    endpoint: String,
    config: ReplConfig,
}

impl<G: QueryGateway + 'static> QueryRepl<G> {
    /// Create a new QueryRepl
    pub fn new(
        controller: Arc<QueryFormController<G, TerminalForm>>,
        form: Arc<TerminalForm>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            controller,
            form,
            endpoint: endpoint.into(),
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    ///
    /// Submits run as background tasks, so the prompt keeps accepting lines
    /// (and activations) while a request is pending. Requires the
    /// multi-threaded runtime.
    pub async fn run(&self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(history) = self.config.history_path().as_deref().and_then(open_history) {
            line_editor = line_editor.with_history(Box::new(history));
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("query-form".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        let mut pending = JoinSet::new();
        loop {
            let signal = tokio::task::block_in_place(|| line_editor.read_line(&prompt))?;
            Self::reap(&mut pending);

            let flow = match signal {
                Signal::Success(line) => self.dispatch(&line, &mut pending),
                Signal::CtrlD => Flow::Quit,
                _ => Flow::Continue,
            };
            if flow == Flow::Quit {
                println!("Bye!");
                break;
            }
        }

        if !pending.is_empty() {
            debug!("Abandoning {} pending request(s)", pending.len());
        }
        pending.shutdown().await;

        Ok(())
    }

    /// Act on one line from the prompt
    fn dispatch(&self, line: &str, pending: &mut JoinSet<SubmitOutcome>) -> Flow {
        match Input::parse(line) {
            Input::Quit => return Flow::Quit,
            Input::Help => self.print_help(),
            Input::Server => println!("Endpoint: {}", self.endpoint),
            Input::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
            Input::Question(question) => self.submit(question, pending),
        }
        Flow::Continue
    }

    /// Activate the controller; the request itself runs on `pending`
    fn submit(&self, question: &str, pending: &mut JoinSet<SubmitOutcome>) {
        self.form.set_question(question);
        match self.controller.begin_submit() {
            Activation::Started(submit) => {
                let controller = Arc::clone(&self.controller);
                pending.spawn(async move { controller.finish_submit(submit).await });
            }
            Activation::Finished(SubmitOutcome::Busy) => {
                println!("{}", "A request is already pending".yellow());
            }
            Activation::Finished(_) => {}
        }
    }

    fn reap(pending: &mut JoinSet<SubmitOutcome>) {
        while let Some(joined) = pending.try_join_next() {
            if let Err(e) = joined {
                warn!("Query task failed: {}", e);
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           query-form - Interactive          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Endpoint: {}", self.endpoint);
        println!("Policy:   {}", self.controller.config().policy);
        println!();
        self.print_help();
    }

    fn print_help(&self) {
        println!("Type a question and press Enter to submit it.");
        println!();
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /server          - Show the query endpoint");
        println!("  /quit, /exit, /q - Exit");
        println!();
    }
}
