//! # Cricket Catalog CLI
//!
//! Terminal access to the same catalog file the GUI edits: list the size
//! groups, inspect, add, remove and reorder records, and classify values.

mod cli;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use cricket_core::category::{classify_value, Category};
use cricket_core::config::CatalogConfig;
use cricket_core::display::{render_groups, RecordRow};
use cricket_core::errors::{CatalogError, CatalogResult};
use cricket_core::form::{save_form, FormState};
use cricket_core::logging::init_logging;
use cricket_core::record::{Attribute, SizeClass};
use cricket_core::store::{self, load_crickets};

use cli::{Cli, Command, MoveDirection};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let config = CatalogConfig::default().with_data_file(&cli.file);
    debug!(data_file = %config.data_file.display(), "using catalog");

    match run(cli.command, &config.data_file) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute one command and return what should be printed.
fn run(command: Command, path: &Path) -> CatalogResult<String> {
    match command {
        Command::List { size } => {
            let filter = size
                .map(|label| {
                    SizeClass::from_label(&label)
                        .ok_or_else(|| CatalogError::invalid_input("size", label, "expected 小, 中 or 大"))
                })
                .transpose()?;
            list(path, filter)
        }
        Command::Show { name } => {
            let matches: Vec<_> = load_crickets(path)?
                .into_iter()
                .filter(|c| c.name == name)
                .collect();
            if matches.is_empty() {
                return Ok(format!("No cricket named '{}'", name));
            }
            serde_json::to_string_pretty(&matches).map_err(|e| CatalogError::SerializationError {
                reason: e.to_string(),
            })
        }
        Command::Add { name, breed, level, size, attrs } => add(path, name, breed, level, size, attrs),
        Command::Remove { name } => {
            let removed = store::remove_cricket(path, &name)?;
            Ok(format!("Removed {} record(s) named '{}'", removed, name))
        }
        Command::Move { name, direction } => {
            let moved = store::move_cricket(path, &name, direction.into())?;
            let word = match direction {
                MoveDirection::Up => "up",
                MoveDirection::Down => "down",
            };
            Ok(if moved {
                format!("Moved '{}' {}", name, word)
            } else {
                format!("'{}' was not moved", name)
            })
        }
        Command::Classify { value } => Ok(match classify_value(&value) {
            Some(category) => format!("{} ({})", category, category.default_value()),
            None => "unknown".to_string(),
        }),
    }
}

fn list(path: &Path, filter: Option<SizeClass>) -> CatalogResult<String> {
    let groups = render_groups(&load_crickets(path)?);

    let mut sections = Vec::new();
    for size in SizeClass::ALL {
        if filter.is_some_and(|wanted| wanted != size) {
            continue;
        }
        let rows = groups.get(size);
        let mut section = format!("{} ({})", size.tab_title(), rows.len());
        for record in rows {
            section.push('\n');
            section.push_str(&format_row(record));
        }
        sections.push(section);
    }
    Ok(sections.join("\n\n"))
}

fn format_row(record: &RecordRow) -> String {
    let mut fields = vec![
        record.name().to_string(),
        record.cricket.breed.clone(),
        record.level_label.clone(),
    ];
    fields.extend(record.attributes.iter().map(|cell| cell.text.clone()));
    format!("  {}", fields.join("  "))
}

/// Build the record through the same form logic the GUI uses.
fn add(
    path: &Path,
    name: String,
    breed: String,
    level: String,
    size: String,
    attrs: Vec<(Attribute, String)>,
) -> CatalogResult<String> {
    if load_crickets(path)?.iter().any(|c| c.name == name) {
        return Err(CatalogError::invalid_input("name", name, "a cricket with this name already exists"));
    }

    let mut form = FormState::new();
    form.name = name;
    form.breed = breed;
    form.level = level;
    form.size = size;

    for (attribute, value) in attrs {
        match Category::from_label(&value) {
            Some(category) => form.select_category(attribute, category),
            None => {
                if let Some(category) = classify_value(&value) {
                    form.select_category(attribute, category);
                }
                form.select_value(attribute, value);
            }
        }
    }

    let saved = form.to_cricket();
    save_form(&mut form, path)?;
    Ok(format_row(&RecordRow::from_cricket(&saved)))
}
