use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Notes for one release.
pub struct Release {
    pub version: &'static str,
    pub notes: &'static [&'static str],
}

/// Releases, newest first.
pub const RELEASES: &[Release] = &[Release {
    version: "0.1.0",
    notes: &[
        "Line-oriented entity DSL with has-one, has-many, belongs-to and many-to-many relations",
        "Foreign keys resolved after the whole file is read, so relations may name later entities",
        "Every error reports its line and underlines the offending text",
        "Resolved graph as a readable summary, JSON, tab-separated rows or canonical DSL",
    ],
}];

/// Run the `version` command: print the running version and the release notes.
pub fn run(output: &OutputContext) -> Result<(), CliError> {
    match output.mode {
        OutputMode::Json => {
            let releases: Vec<serde_json::Value> = RELEASES
                .iter()
                .map(|r| serde_json::json!({ "version": r.version, "notes": r.notes }))
                .collect();
            output.print_json(&serde_json::json!({
                "version": VERSION,
                "releases": releases,
            }));
        }
        OutputMode::Plain => {
            for release in RELEASES {
                for note in release.notes {
                    println!("{}\t{note}", release.version);
                }
            }
        }
        OutputMode::Human => print!("{}", render_human(output)),
    }
    Ok(())
}

fn render_human(output: &OutputContext) -> String {
    let mut out = format!("larry {VERSION}\n\n");
    for release in RELEASES {
        out.push_str(&output.heading(&format!("Version {}", release.version)));
        out.push('\n');
        for note in release.notes {
            out.push_str(&format!("  - {note}\n"));
        }
        out.push('\n');
    }
    out
}
