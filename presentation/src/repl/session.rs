//! Interactive debate session over reedline

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use crate::cli::OutputFormat;
use colored::Colorize;
use council_application::{DebateParams, ModelGateway, RunDebateInput, RunDebateUseCase};
use council_domain::DebateMode;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;

/// Interactive council REPL
///
/// Each submitted line runs one debate with the session's mode and
/// parameters. Colon commands (`:models`, `:recommend`, `:quit`) are
/// handled locally without touching any backend.
pub struct CouncilRepl<G: ModelGateway + 'static> {
    use_case: RunDebateUseCase<G>,
    models: Vec<String>,
    mode: DebateMode,
    params: DebateParams,
    synthesizer: Option<String>,
    output: OutputFormat,
    show_progress: bool,
}

impl<G: ModelGateway + 'static> CouncilRepl<G> {
    /// Create a new REPL around an already-wired use case
    pub fn new(use_case: RunDebateUseCase<G>, mode: DebateMode, params: DebateParams) -> Self {
        Self {
            use_case,
            models: Vec::new(),
            mode,
            params,
            synthesizer: None,
            output: OutputFormat::Answer,
            show_progress: true,
        }
    }

    /// Restrict debates to these model ids (empty means all registered)
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    /// Set the synthesizer model override
    pub fn with_synthesizer(mut self, synthesizer: Option<String>) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    /// Set the output format for debate results
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Set whether to show progress bars
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL until `:quit` or Ctrl-D
    pub async fn run(&self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = Self::history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(history) = FileBackedHistory::with_file(200, path) {
                line_editor = line_editor.with_history(Box::new(history));
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("council".into()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with(':') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    self.process_question(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("council").join("history.txt"))
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          AI Council - Interactive           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        if self.models.is_empty() {
            println!("Models: all registered ({})", self.use_case.registry().all().len());
        } else {
            println!("Models: {}", self.models.join(", "));
        }
        println!("Mode:   {}", self.mode);
        println!();
        println!("Type a question to start a debate.");
        println!();
        println!("Commands:");
        println!("  :help            - Show this help");
        println!("  :models          - List registered models");
        println!("  :recommend <q>   - Suggest models for a question");
        println!("  :quit            - Exit");
        println!();
    }

    /// Handle colon commands. Returns true if the REPL should exit.
    fn handle_command(&self, line: &str) -> bool {
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            ":quit" | ":exit" | ":q" => {
                println!("Bye!");
                true
            }
            ":help" | ":h" | ":?" => {
                println!();
                println!("Commands:");
                println!("  :help, :h, :?    - Show this help");
                println!("  :models          - List registered models");
                println!("  :recommend <q>   - Suggest models for a question");
                println!("  :quit, :exit, :q - Exit");
                println!();
                false
            }
            ":models" => {
                println!();
                println!("Registered models:");
                for model in self.use_case.registry().all() {
                    let status = if model.is_configured() {
                        "ready".green()
                    } else {
                        "not configured".yellow()
                    };
                    println!(
                        "  {} ({}, {}) [{}]",
                        model.id().bold(),
                        model.display_name(),
                        model.backend_kind().as_str(),
                        status
                    );
                }
                println!();
                false
            }
            ":recommend" => {
                if rest.is_empty() {
                    println!("Usage: :recommend <question>");
                    return false;
                }
                let recommendation = self.use_case.recommend_models(rest);
                println!();
                println!("Domain: {}", recommendation.domain.as_str().bold());
                println!("Recommended models:");
                for model in &recommendation.models {
                    println!("  - {}", model.id());
                }
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type :help for available commands");
                false
            }
        }
    }

    async fn process_question(&self, question: &str) {
        println!();

        let mut input =
            RunDebateInput::new(question.to_string(), self.mode).with_params(self.params.clone());

        if !self.models.is_empty() {
            input = input.with_models(self.models.clone());
        }
        if let Some(ref synthesizer) = self.synthesizer {
            input = input.with_synthesizer(synthesizer.clone());
        }

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute(input).await
        };

        match result {
            Ok(result) => {
                let text = match self.output {
                    OutputFormat::Full => ConsoleFormatter::format(&result),
                    OutputFormat::Answer => ConsoleFormatter::format_answer_only(&result),
                    OutputFormat::Json => ConsoleFormatter::format_json(&result),
                };
                println!("{}", text);
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
            }
        }
        println!();
    }
}
