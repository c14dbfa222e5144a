//! CB-009: CLI subcommands — init, validate, list, summary, parse.

use crate::core::catalog::Catalog;
use crate::core::normalize::normalize_name;
use crate::core::parser;
use crate::core::types::{Item, ItemKind, Summary};
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a starter cookbook.yaml
    Init {
        /// Directory to initialize (default: current)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Validate and load a cookbook without summarizing anything
    Validate {
        /// Path to cookbook.yaml
        #[arg(short, long, default_value = "cookbook.yaml")]
        file: PathBuf,
    },

    /// List every ingredient and recipe in a cookbook
    List {
        /// Path to cookbook.yaml
        #[arg(short, long, default_value = "cookbook.yaml")]
        file: PathBuf,
    },

    /// Flatten a recipe into base ingredients and total cook time
    Summary {
        /// Recipe name
        name: String,

        /// Path to cookbook.yaml
        #[arg(short, long, default_value = "cookbook.yaml")]
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize free-text into a canonical recipe name
    Parse {
        /// Handwritten name
        text: String,
    },
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::Init { path } => cmd_init(&path),
        Commands::Validate { file } => cmd_validate(&file),
        Commands::List { file } => cmd_list(&file),
        Commands::Summary { name, file, json } => cmd_summary(&file, &name, json),
        Commands::Parse { text } => cmd_parse(&text),
    }
}

const TEMPLATE: &str = r#"version: "1.0"
name: my-cookbook
description: "Managed by cookbook"

entries:
  - type: ingredient
    name: Egg
    cookTime: 5
  - type: ingredient
    name: Flour
    cookTime: 2
  - type: recipe
    name: Batter
    requiredItems:
      - { name: Egg, quantity: 2 }
      - { name: Flour, quantity: 1 }
  - type: recipe
    name: Pancake
    requiredItems:
      - { name: Batter, quantity: 3 }
"#;

fn cmd_init(path: &Path) -> Result<(), String> {
    let config_path = path.join("cookbook.yaml");
    if config_path.exists() {
        return Err(format!("{} already exists", config_path.display()));
    }
    std::fs::create_dir_all(path)
        .map_err(|e| format!("cannot create {}: {}", path.display(), e))?;
    std::fs::write(&config_path, TEMPLATE)
        .map_err(|e| format!("cannot write {}: {}", config_path.display(), e))?;

    println!("Initialized cookbook at {}", path.display());
    println!("  Created: {}", config_path.display());
    Ok(())
}

/// Parse, validate, and load a cookbook file into a catalog.
fn load(file: &Path) -> Result<(String, Catalog), String> {
    let config = parser::parse_cookbook_file(file)?;
    let errors = parser::validate_cookbook(&config);
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("  ERROR: {}", e);
        }
        return Err(format!("{} validation error(s)", errors.len()));
    }
    let catalog = parser::build_catalog(&config)?;
    Ok((config.name, catalog))
}

fn cmd_validate(file: &Path) -> Result<(), String> {
    let (name, catalog) = load(file)?;
    println!(
        "OK: {} ({} ingredients, {} recipes)",
        name,
        catalog.count(ItemKind::Ingredient),
        catalog.count(ItemKind::Recipe)
    );
    Ok(())
}

fn cmd_list(file: &Path) -> Result<(), String> {
    let (name, catalog) = load(file)?;
    println!("{} ({} items)", name, catalog.len());
    for item in catalog.items() {
        println!("  {}", describe_item(item));
    }
    Ok(())
}

fn describe_item(item: &Item) -> String {
    match item {
        Item::Ingredient(i) => format!("ingredient {} (cook time {})", i.name, i.cook_time),
        Item::Recipe(r) => {
            let parts: Vec<String> = r
                .required_items
                .iter()
                .map(|(name, q)| format!("{} x{}", name, q))
                .collect();
            format!("recipe {} <- {}", r.name, parts.join(", "))
        }
    }
}

fn cmd_summary(file: &Path, name: &str, json: bool) -> Result<(), String> {
    let (_, catalog) = load(file)?;
    let summary = catalog.summarize(name).map_err(|e| e.to_string())?;
    println!("{}", render_summary(&summary, json)?);
    Ok(())
}

/// Human-readable lines, or pretty JSON with `json`.
fn render_summary(summary: &Summary, json: bool) -> Result<String, String> {
    if json {
        return serde_json::to_string_pretty(summary)
            .map_err(|e| format!("serialize error: {}", e));
    }
    let mut out = format!("{}: cook time {}", summary.name, summary.cook_time);
    for entry in &summary.ingredients {
        out.push_str(&format!("\n  {} x{}", entry.name, entry.quantity));
    }
    Ok(out)
}

fn cmd_parse(text: &str) -> Result<(), String> {
    let name = normalize_name(text).ok_or_else(|| "invalid recipe name".to_string())?;
    println!("{}", name);
    Ok(())
}
