//! The destination project's `package.json`.
//!
//! [`Manifest`] keeps the whole document as an insertion-ordered JSON object
//! so fields it does not own (`name`, `version`, `type`, anything a template
//! author added) survive a read-modify-write unchanged and in place.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// Package name → version range.
pub type PackageMap = BTreeMap<String, String>;

pub const DEPENDENCIES: &str = "dependencies";
pub const DEV_DEPENDENCIES: &str = "devDependencies";
pub const SCRIPTS: &str = "scripts";

#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Map<String, Value>,
}

impl Manifest {
    /// Parse a manifest. The top level must be a JSON object.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| DomainError::MalformedManifest {
                reason: e.to_string(),
            })?;
        match value {
            Value::Object(document) => Ok(Self { document }),
            other => Err(DomainError::MalformedManifest {
                reason: format!("expected an object, found {}", json_kind(&other)),
            }),
        }
    }

    /// The manifest written when a base template ships none.
    pub fn minimal(name: &str) -> Self {
        let mut document = Map::new();
        document.insert("name".into(), Value::String(name.to_string()));
        document.insert("version".into(), Value::String("0.1.0".into()));
        document.insert("type".into(), Value::String("module".into()));
        document.insert(
            SCRIPTS.into(),
            Value::Object(Map::from_iter([(
                "dev".to_string(),
                Value::String("bun run --watch src/index.ts".into()),
            )])),
        );
        Self { document }
    }

    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }

    /// Set `name`, keeping its position when the field already exists.
    pub fn set_name(&mut self, name: &str) {
        self.document
            .insert("name".into(), Value::String(name.to_string()));
    }

    /// Union `deps` into `dependencies` and `dev_deps` into `devDependencies`.
    ///
    /// A section is only touched when its contribution is non-empty. Incoming
    /// entries overwrite same-named ones; nothing is ever removed. Both
    /// sections end up sorted by key.
    pub fn merge_dependencies(
        &mut self,
        deps: &PackageMap,
        dev_deps: &PackageMap,
    ) -> Result<(), DomainError> {
        for (section, entries) in [(DEPENDENCIES, deps), (DEV_DEPENDENCIES, dev_deps)] {
            if entries.is_empty() {
                continue;
            }
            let mut merged = self.section_entries(section)?;
            for (name, version) in entries {
                upsert(&mut merged, name, Value::String(version.clone()));
            }
            merged.sort_by(|(a, _), (b, _)| a.cmp(b));
            self.document
                .insert(section.into(), Value::Object(merged.into_iter().collect()));
        }
        Ok(())
    }

    /// Plain key-value merge into `scripts`. Re-declared keys keep their
    /// position and take the new command; new keys are appended.
    pub fn merge_scripts<'a, I>(&mut self, scripts: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut merged = self.section_entries(SCRIPTS)?;
        for (name, command) in scripts {
            upsert(&mut merged, name, Value::String(command.to_string()));
        }
        self.document
            .insert(SCRIPTS.into(), Value::Object(merged.into_iter().collect()));
        Ok(())
    }

    /// Entries of a string-valued section, in document order.
    pub fn section(&self, section: &str) -> Vec<(String, String)> {
        self.document
            .get(section)
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(k, v)| (k.clone(), v.as_str().unwrap_or_default().to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.document.get(field)
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, DomainError> {
        let mut out =
            serde_json::to_string_pretty(&self.document).map_err(|e| {
                DomainError::Serialization {
                    document: "package.json",
                    reason: e.to_string(),
                }
            })?;
        out.push('\n');
        Ok(out)
    }

    fn section_entries(&self, section: &str) -> Result<Vec<(String, Value)>, DomainError> {
        match self.document.get(section) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Object(map)) => Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
            Some(other) => Err(DomainError::MalformedManifest {
                reason: format!("'{section}' must be an object, found {}", json_kind(other)),
            }),
        }
    }
}

fn upsert(entries: &mut Vec<(String, Value)>, key: &str, value: Value) {
    match entries.iter_mut().find(|(k, _)| k == key) {
        Some((_, existing)) => *existing = value,
        None => entries.push((key.to_string(), value)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packages(entries: &[(&str, &str)]) -> PackageMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn keys(manifest: &Manifest, section: &str) -> Vec<String> {
        manifest.section(section).into_iter().map(|(k, _)| k).collect()
    }

    const BASE: &str = r#"{
  "name": "template",
  "version": "1.0.0",
  "type": "module",
  "scripts": { "dev": "bun run --watch src/index.ts" },
  "dependencies": { "zeta": "1.0.0", "hono": "^4.0.0" }
}"#;

    #[test]
    fn merge_sorts_and_preserves_existing_keys() {
        let mut manifest = Manifest::parse(BASE).unwrap();
        manifest
            .merge_dependencies(&packages(&[("drizzle-orm", "^0.29.3")]), &PackageMap::new())
            .unwrap();

        assert_eq!(keys(&manifest, DEPENDENCIES), ["drizzle-orm", "hono", "zeta"]);
        assert_eq!(manifest.name(), Some("template"));
        assert_eq!(manifest.get("version"), Some(&Value::String("1.0.0".into())));
    }

    #[test]
    fn empty_contribution_leaves_section_absent() {
        let mut manifest = Manifest::parse(BASE).unwrap();
        manifest
            .merge_dependencies(&packages(&[("zod", "^3.22.4")]), &PackageMap::new())
            .unwrap();
        assert!(manifest.get(DEV_DEPENDENCIES).is_none());
    }

    #[test]
    fn incoming_versions_win() {
        let mut manifest = Manifest::parse(BASE).unwrap();
        manifest
            .merge_dependencies(&packages(&[("hono", "^4.1.0")]), &PackageMap::new())
            .unwrap();
        assert!(manifest.section(DEPENDENCIES).contains(&("hono".into(), "^4.1.0".into())));
    }

    #[test]
    fn disjoint_merges_commute() {
        let a = packages(&[("postgres", "^3.4.4"), ("drizzle-orm", "^0.29.3")]);
        let b = packages(&[("vitest", "^1.2.0"), ("supertest", "^6.3.4")]);

        let mut first = Manifest::parse(BASE).unwrap();
        first.merge_dependencies(&a, &PackageMap::new()).unwrap();
        first.merge_dependencies(&b, &PackageMap::new()).unwrap();

        let mut second = Manifest::parse(BASE).unwrap();
        second.merge_dependencies(&b, &PackageMap::new()).unwrap();
        second.merge_dependencies(&a, &PackageMap::new()).unwrap();

        assert_eq!(
            first.to_pretty_string().unwrap(),
            second.to_pretty_string().unwrap()
        );
    }

    #[test]
    fn scripts_keep_insertion_order() {
        let mut manifest = Manifest::parse(BASE).unwrap();
        manifest
            .merge_scripts([("db:migrate", "drizzle-kit migrate"), ("build", "bun build")])
            .unwrap();
        manifest.merge_scripts([("dev", "bun --hot src/index.ts")]).unwrap();

        assert_eq!(
            manifest.section(SCRIPTS),
            vec![
                ("dev".to_string(), "bun --hot src/index.ts".to_string()),
                ("db:migrate".to_string(), "drizzle-kit migrate".to_string()),
                ("build".to_string(), "bun build".to_string()),
            ]
        );
    }

    #[test]
    fn set_name_keeps_field_position() {
        let mut manifest = Manifest::parse(BASE).unwrap();
        manifest.set_name("my-api");
        let rendered = manifest.to_pretty_string().unwrap();
        assert!(rendered.starts_with("{\n  \"name\": \"my-api\""));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn non_object_documents_are_rejected() {
        assert!(matches!(
            Manifest::parse("[1, 2]"),
            Err(DomainError::MalformedManifest { .. })
        ));
        assert!(Manifest::parse("{ not json").is_err());
    }

    #[test]
    fn non_object_section_is_rejected() {
        let mut manifest = Manifest::parse(r#"{"dependencies": "oops"}"#).unwrap();
        let err = manifest
            .merge_dependencies(&packages(&[("zod", "^3.22.4")]), &PackageMap::new())
            .unwrap_err();
        assert!(err.to_string().contains("dependencies"));
    }
}
