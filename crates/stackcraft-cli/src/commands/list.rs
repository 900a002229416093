//! Implementation of the `stackcraft list` command.

use serde::Serialize;

use stackcraft_core::domain::{
    Category, Feature, Framework,
    catalog::{CategoryDef, selectable_categories},
};

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct Catalog {
    frameworks: Vec<FrameworkEntry>,
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Serialize)]
struct FrameworkEntry {
    id: Framework,
    name: &'static str,
}

#[derive(Debug, Serialize)]
struct CategoryEntry {
    id: Category,
    title: &'static str,
    multi_select: bool,
    features: &'static [Feature],
}

impl From<&CategoryDef> for CategoryEntry {
    fn from(def: &CategoryDef) -> Self {
        Self {
            id: def.category,
            title: def.title,
            multi_select: def.multi_select,
            features: def.features,
        }
    }
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let catalog = build_catalog(args.category.as_deref())?;

    match args.format {
        ListFormat::Table => {
            if args.category.is_none() {
                output.header("Frameworks:")?;
                for fw in &catalog.frameworks {
                    output.print(&format!("  {:<14} {}", fw.id.as_str(), fw.name))?;
                }
                output.print("")?;
            }
            output.header("Features:")?;
            for category in &catalog.categories {
                let ids: Vec<&str> = category.features.iter().map(Feature::as_str).collect();
                let mode = if category.multi_select { "any" } else { "one" };
                output.print(&format!(
                    "  {:<14} {:<4} {}",
                    category.id.as_str(),
                    mode,
                    ids.join(", ")
                ))?;
            }
        }

        ListFormat::List => {
            for feature in catalog.categories.iter().flat_map(|c| c.features) {
                output.print(feature.as_str())?;
            }
        }

        ListFormat::Json => output.json(&catalog)?,
    }

    Ok(())
}

fn build_catalog(category: Option<&str>) -> CliResult<Catalog> {
    let categories: Vec<CategoryEntry> = selectable_categories()
        .filter(|def| category.is_none_or(|c| def.category.as_str() == c))
        .map(CategoryEntry::from)
        .collect();

    if let Some(requested) = category {
        if categories.is_empty() {
            let known: Vec<&str> = selectable_categories().map(|d| d.category.as_str()).collect();
            return Err(CliError::InvalidInput {
                message: format!(
                    "unknown category '{requested}' (expected one of: {})",
                    known.join(", ")
                ),
                source: None,
            });
        }
    }

    let frameworks = Framework::ALL
        .iter()
        .map(|fw| FrameworkEntry {
            id: *fw,
            name: fw.display_name(),
        })
        .collect();

    Ok(Catalog {
        frameworks,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_catalog_skips_unconditional_categories() {
        let catalog = build_catalog(None).unwrap();
        assert_eq!(catalog.frameworks.len(), Framework::ALL.len());
        assert!(catalog.categories.iter().all(|c| !c.id.is_unconditional()));
        assert_eq!(catalog.categories.first().map(|c| c.id), Some(Category::Database));
    }

    #[test]
    fn category_filter_keeps_one_category() {
        let catalog = build_catalog(Some("auth")).unwrap();
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.categories[0].id, Category::Auth);
    }

    #[test]
    fn unknown_category_is_invalid_input() {
        assert!(matches!(
            build_catalog(Some("payments")),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn catalog_serialises_identifiers() {
        let json = serde_json::to_value(build_catalog(Some("database")).unwrap()).unwrap();
        assert_eq!(json["frameworks"][2]["id"], "bun-native");
        assert_eq!(json["categories"][0]["id"], "database");
        assert_eq!(json["categories"][0]["features"][0], "postgres");
    }
}
