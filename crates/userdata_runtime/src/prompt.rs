//! Interactive driver.
//!
//! Reads single-key commands from a [`LineEditor`]: `g` measures, `q` quits.
//! A failed measurement ends the loop with the error; correctness defects are
//! never swallowed.

use tracing::debug;

use userdata_foundation::Result;

use crate::app::App;
use crate::bench::BenchReport;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Hint printed for unrecognised input.
pub const HELP: &str = "press 'g' to measure userdata access, 'q' to quit";

/// What a line of input asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A measurement ran.
    Report(BenchReport),
    /// The session ended.
    Quit,
    /// The input was not a command.
    Help,
    /// Blank input.
    Ignore,
}

/// The interactive prompt around a session.
pub struct Prompt<E: LineEditor = RustylineEditor> {
    editor: E,
    app: App,
    json: bool,
    prompt: String,
}

impl Prompt<RustylineEditor> {
    /// Creates a prompt reading from the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(app: App) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, app))
    }
}

impl<E: LineEditor> Prompt<E> {
    /// Creates a prompt reading from the given editor.
    pub fn with_editor(editor: E, app: App) -> Self {
        let prompt = format!("{}> ", app.config().kind);
        Self {
            editor,
            app,
            json: false,
            prompt,
        }
    }

    /// Prints reports as JSON instead of text.
    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Returns the session.
    #[must_use]
    pub const fn app(&self) -> &App {
        &self.app
    }

    /// Interprets one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error if a measurement fails.
    pub fn handle_line(&mut self, line: &str) -> Result<Action> {
        match line.trim() {
            "" => Ok(Action::Ignore),
            "g" | "G" => self.app.benchmark().map(Action::Report),
            "q" | "Q" => {
                self.app.quit();
                Ok(Action::Quit)
            }
            other => {
                debug!(input = other, "unrecognised input");
                Ok(Action::Help)
            }
        }
    }

    /// Renders a report the way the prompt prints it.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, report: &BenchReport) -> Result<String> {
        if self.json {
            report.to_json()
        } else {
            Ok(report.to_string())
        }
    }

    /// Runs until `q`, end of input, or a failed measurement.
    ///
    /// Returns the number of measurements taken.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or a measurement fails.
    pub fn run(&mut self) -> Result<usize> {
        println!("{}", self.app.config().kind);
        println!("{HELP}");

        let mut runs = 0;
        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => {
                    self.app.quit();
                    break;
                }
            };
            if !line.trim().is_empty() {
                self.editor.add_history(&line);
            }

            match self.handle_line(&line)? {
                Action::Report(report) => {
                    runs += 1;
                    println!("{}", self.render(&report)?);
                }
                Action::Quit => break,
                Action::Help => println!("{HELP}"),
                Action::Ignore => {}
            }
        }
        Ok(runs)
    }
}
