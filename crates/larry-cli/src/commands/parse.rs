use larry_core::types::{Entity, FieldOrigin, Schema};
use tracing::info;

use crate::cli::ParseArgs;
use crate::config::LarryConfig;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `parse` command: compile one DSL file and emit the resolved graph.
///
/// Nothing is written to stdout unless the whole file compiles.
pub fn run(args: ParseArgs, config: &LarryConfig, output: &OutputContext) -> Result<(), CliError> {
    let source_text = std::fs::read_to_string(&args.file).map_err(|e| CliError::Io {
        path: args.file.clone(),
        source: e,
    })?;

    let filename = args.file.display().to_string();
    let options = config.parse_options();
    info!(file = %filename, duplicate_entities = %options.duplicate_entities, "compiling");

    let schema = match larry_dsl::parse_with(&source_text, &options) {
        Ok(schema) => schema,
        Err(error) => {
            return Err(CliError::Parse {
                error,
                source_text,
                file: args.file,
            });
        }
    };

    if schema.entities.is_empty() {
        output.warn(&format!("no entities declared in {filename}"));
    }

    if args.print {
        print!("{}", larry_dsl::print(&schema));
    } else {
        match output.mode {
            OutputMode::Human => print!("{}", render_human(&schema, output)),
            OutputMode::Json => {
                let value = serde_json::to_value(&schema)
                    .map_err(|e| CliError::Other(format!("failed to serialize schema: {e}")))?;
                output.print_json(&value);
            }
            OutputMode::Plain => print!("{}", render_plain(&schema)),
        }
    }

    output.success(&format!(
        "{filename}: {} entities, {} link tables",
        schema.entities.len(),
        schema.links.len()
    ));
    Ok(())
}

/// One block per entity, then the link tables.
fn render_human(schema: &Schema, output: &OutputContext) -> String {
    let mut out = String::new();

    for entity in &schema.entities {
        out.push_str(&output.heading(&format!(
            "{} ({})",
            entity.name, entity.table_name
        )));
        out.push('\n');
        render_relations(entity, &mut out);
        for field in &entity.fields {
            out.push_str(&format!("    {field}"));
            if field.origin == FieldOrigin::ForeignKey {
                out.push_str(" (foreign key)");
            }
            out.push('\n');
        }
        if entity.timestamps {
            out.push_str("    timestamps\n");
        }
        out.push('\n');
    }

    if !schema.links.is_empty() {
        out.push_str(&output.heading("link tables"));
        out.push('\n');
        for link in &schema.links {
            out.push_str(&format!("    {link}\n"));
        }
    }

    out
}

fn render_relations(entity: &Entity, out: &mut String) {
    let relations: Vec<String> = entity
        .all_relations()
        .map(|(kind, target)| format!("{kind} {target}"))
        .collect();
    if !relations.is_empty() {
        out.push_str(&format!("  {}\n", relations.join(", ")));
    }
}

/// Tab-separated rows: `entity`, `field`, `relation` and `link`.
fn render_plain(schema: &Schema) -> String {
    let mut out = String::new();

    for entity in &schema.entities {
        out.push_str(&format!(
            "entity\t{}\t{}\t{}\t{}\n",
            entity.name,
            entity.table_name,
            entity.fields.len(),
            entity.timestamps
        ));
        for field in &entity.fields {
            out.push_str(&format!(
                "field\t{}\t{}\t{}\t{}\n",
                entity.name,
                field.name,
                field.field_type,
                field.origin.as_str()
            ));
        }
        for (kind, target) in entity.all_relations() {
            out.push_str(&format!("relation\t{}\t{kind}\t{target}\n", entity.name));
        }
    }

    for link in &schema.links {
        out.push_str(&format!(
            "link\t{}\t{}\t{}\n",
            link.table_name, link.from, link.to
        ));
    }

    out
}
