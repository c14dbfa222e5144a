//! CB-007: Cookbook YAML parsing, validation, and loading.
//!
//! Parses cookbook.yaml and validates the request-level constraints that the
//! catalog itself does not check:
//! - Version must be "1.0"
//! - Cookbook and entry names must be non-empty
//! - Ingredient cook times must be finite and >= 0
//! - Recipes must list at least one required item, each with a name

use super::catalog::Catalog;
use super::types::*;
use std::path::Path;

/// Validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Parse a cookbook.yaml file from disk.
pub fn parse_cookbook_file(path: &Path) -> Result<CookbookConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_cookbook(&content)
}

/// Parse a cookbook.yaml from a string.
pub fn parse_cookbook(yaml: &str) -> Result<CookbookConfig, String> {
    serde_yaml_ng::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
}

/// Validate a parsed cookbook. Returns a list of errors (empty = valid).
pub fn validate_cookbook(config: &CookbookConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.version != "1.0" {
        errors.push(ValidationError {
            message: format!("version must be \"1.0\", got \"{}\"", config.version),
        });
    }

    if config.name.trim().is_empty() {
        errors.push(ValidationError {
            message: "name must not be empty".to_string(),
        });
    }

    for (index, entry) in config.entries.iter().enumerate() {
        let position = index + 1;
        if entry.name().trim().is_empty() {
            errors.push(ValidationError {
                message: format!("entry {} ({}) has no name", position, entry.kind()),
            });
        }

        match entry {
            Entry::Ingredient { name, cook_time } => {
                if !cook_time.is_valid_cook_time() {
                    errors.push(ValidationError {
                        message: format!(
                            "ingredient '{}' cookTime must be >= 0, got {}",
                            name, cook_time
                        ),
                    });
                }
            }
            Entry::Recipe {
                name,
                required_items,
            } => {
                if required_items.is_empty() {
                    errors.push(ValidationError {
                        message: format!("recipe '{}' has no requiredItems", name),
                    });
                }
                if required_items.iter().any(|r| r.name.trim().is_empty()) {
                    errors.push(ValidationError {
                        message: format!("recipe '{}' has a required item with no name", name),
                    });
                }
            }
        }
    }

    errors
}

/// Insert every entry, in order, into a fresh catalog.
///
/// Stops at the first rejected entry.
pub fn build_catalog(config: &CookbookConfig) -> Result<Catalog, String> {
    let mut catalog = Catalog::new();
    for (index, entry) in config.entries.iter().enumerate() {
        let result = match entry {
            Entry::Ingredient { name, cook_time } => catalog.insert_ingredient(name, *cook_time),
            Entry::Recipe {
                name,
                required_items,
            } => catalog.insert_recipe(name, required_items.iter().cloned()),
        };
        if let Err(e) = result {
            tracing::warn!(entry = entry.name(), kind = e.kind(), "entry rejected");
            return Err(format!(
                "entry {} ({} '{}') rejected: {}",
                index + 1,
                entry.kind(),
                entry.name(),
                e
            ));
        }
    }
    tracing::info!(
        cookbook = %config.name,
        items = catalog.len(),
        "cookbook loaded"
    );
    Ok(catalog)
}
