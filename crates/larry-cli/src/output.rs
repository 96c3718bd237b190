use console::{Style, Term};

use crate::cli::GlobalOpts;
use crate::diagnostic::render_diagnostic;
use crate::error::CliError;

/// How results and messages are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Readable summary, colored when stderr is a terminal
    #[default]
    Human,
    /// One JSON document on stdout, JSON objects on stderr
    Json,
    /// Tab-separated rows
    Plain,
}

/// Label attached to a one-line stderr message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Ok,
    Warning,
    Error,
}

impl Tone {
    fn label(self) -> &'static str {
        match self {
            Tone::Ok => "ok",
            Tone::Warning => "warning",
            Tone::Error => "error",
        }
    }

    fn style(self) -> Style {
        let style = match self {
            Tone::Ok => Style::new().green(),
            Tone::Warning => Style::new().yellow(),
            Tone::Error => Style::new().red(),
        };
        style.bold()
    }
}

/// Where the global flags say output should go, and how it should look.
pub struct OutputContext {
    pub mode: OutputMode,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    pub fn from_global(global: &GlobalOpts) -> Self {
        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode: global.format,
            quiet: global.quiet,
            use_color,
        }
    }

    /// `ok <msg>` after a command finishes; human mode only.
    pub fn success(&self, msg: &str) {
        if !self.quiet && self.mode == OutputMode::Human {
            eprintln!("{}", self.labelled(Tone::Ok, msg));
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Human => eprintln!("{}", self.labelled(Tone::Warning, msg)),
            OutputMode::Json => eprintln!("{}", serde_json::json!({ "warning": msg })),
            OutputMode::Plain => eprintln!("warning\t{msg}"),
        }
    }

    /// Report a failed command on stderr. Never suppressed by `--quiet`.
    ///
    /// A parse error becomes a source-annotated report in human mode and the
    /// bare `[Line No. N] message` line in plain mode.
    pub fn print_error(&self, err: &CliError) {
        match (self.mode, err) {
            (OutputMode::Json, _) => eprintln!("{}", err.to_json()),
            (
                OutputMode::Human,
                CliError::Parse {
                    error,
                    source_text,
                    file,
                },
            ) => {
                let report = render_diagnostic(error, source_text, &file.display().to_string());
                eprintln!("{report:?}");
            }
            (OutputMode::Human, _) => eprintln!("{}", self.labelled(Tone::Error, &err.to_string())),
            (OutputMode::Plain, CliError::Parse { error, .. }) => eprintln!("{error}"),
            (OutputMode::Plain, _) => eprintln!("error\t{err}"),
        }
    }

    /// Pretty-printed JSON on stdout.
    pub fn print_json(&self, value: &serde_json::Value) {
        if let Ok(s) = serde_json::to_string_pretty(value) {
            println!("{s}");
        }
    }

    /// Bold when color is on; used for section titles on stdout.
    pub fn heading(&self, text: &str) -> String {
        if self.use_color {
            Style::new().bold().apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn labelled(&self, tone: Tone, msg: &str) -> String {
        let label = if tone == Tone::Ok {
            tone.label().to_string()
        } else {
            format!("{}:", tone.label())
        };
        if self.use_color {
            format!("{} {msg}", tone.style().apply_to(label))
        } else {
            format!("{label} {msg}")
        }
    }
}
