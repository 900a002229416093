//! Properties of the shared-file merge engine, driven through the
//! in-memory filesystem.

mod common;

use std::path::{Path, PathBuf};

use serde_json::Value;
use stackcraft_adapters::MemoryFilesystem;
use stackcraft_core::application::Filesystem;
use stackcraft_core::application::services::{
    InstallContext, Installer, InstallerRunner, ManifestMerger, TemplateCopier, build_plan,
    installer_for,
};
use stackcraft_core::domain::{
    Category, DomainError, EnvBlock, Feature, FeatureSelection, Framework, PackageMap,
};
use stackcraft_core::error::StackcraftError;

use common::{project_filesystem, seeded_filesystem, templates};

const ROOT: &str = "/work/api";

fn selection(ids: &[&str]) -> FeatureSelection {
    FeatureSelection::from_features(
        Framework::Hono,
        ids.iter().map(|id| id.parse::<Feature>().unwrap()),
    )
}

fn manifest(fs: &MemoryFilesystem) -> Value {
    serde_json::from_str(&fs.read_file(Path::new(ROOT).join("package.json")).unwrap()).unwrap()
}

fn keys(manifest: &Value, section: &str) -> Vec<String> {
    manifest[section]
        .as_object()
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default()
}

fn packages(entries: &[(&str, &str)]) -> PackageMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn install(fs: &MemoryFilesystem, category: Category, selection: &FeatureSelection) {
    let template_root = templates();
    let ctx = InstallContext::new(fs, &template_root, Path::new(ROOT));
    installer_for(category).install(&ctx, selection).unwrap();
}

// =============================================================================
// Template copy
// =============================================================================

#[test]
fn copying_a_template_twice_equals_copying_once() {
    let fs = project_filesystem(Path::new(ROOT));
    let template_root = templates();
    let copier = TemplateCopier::new(&fs, &template_root);

    let first = copier
        .copy_fragment("extras/database/postgres", Path::new(ROOT), true)
        .unwrap();
    let after_first = fs.snapshot(ROOT);

    let second = copier
        .copy_fragment("extras/database/postgres", Path::new(ROOT), true)
        .unwrap();

    assert_eq!(fs.snapshot(ROOT), after_first);
    assert_eq!(first.copied.len(), 2);
    assert!(second.copied.is_empty());
    assert_eq!(second.skipped.len(), 2);
}

#[test]
fn fragment_copy_takes_source_and_config_files_only() {
    let fs = project_filesystem(Path::new(ROOT));
    let template_root = templates();
    TemplateCopier::new(&fs, &template_root)
        .copy_fragment("extras/database/postgres", Path::new(ROOT), true)
        .unwrap();

    let files = fs.snapshot(ROOT);
    assert!(files.contains_key(Path::new("src/db/index.ts")));
    assert!(files.contains_key(Path::new("drizzle.config.ts")));
    assert!(!files.contains_key(Path::new("README.md")));
}

#[test]
fn existing_destination_file_is_never_overwritten() {
    let fs = project_filesystem(Path::new(ROOT));
    fs.seed(Path::new(ROOT).join("src/db/index.ts"), "// mine\n");
    let template_root = templates();

    let report = TemplateCopier::new(&fs, &template_root)
        .copy_fragment("extras/database/postgres", Path::new(ROOT), false)
        .unwrap();

    assert_eq!(
        fs.read_file(Path::new(ROOT).join("src/db/index.ts")).as_deref(),
        Some("// mine\n")
    );
    assert!(report.copied.is_empty());
}

#[test]
fn missing_template_is_a_soft_no_op() {
    let fs = project_filesystem(Path::new(ROOT));
    let before = fs.write_count();
    let template_root = templates();

    let report = TemplateCopier::new(&fs, &template_root)
        .copy_fragment("extras/cloud/aws", Path::new(ROOT), true)
        .unwrap();

    assert!(report.source_missing);
    assert_eq!(fs.write_count(), before);
}

#[test]
fn config_only_template_copies_its_root_files() {
    let fs = project_filesystem(Path::new(ROOT));
    let template_root = templates();

    let report = TemplateCopier::new(&fs, &template_root)
        .copy_fragment("extras/testing/vitest", Path::new(ROOT), true)
        .unwrap();

    assert!(!report.source_missing);
    assert_eq!(report.copied, [PathBuf::from("vitest.config.ts")]);
    assert!(!fs.is_dir(&Path::new(ROOT).join("src")));
}

// =============================================================================
// Manifest merge
// =============================================================================

#[test]
fn disjoint_installers_commute() {
    let both = selection(&["postgres", "zod"]);

    let forward = project_filesystem(Path::new(ROOT));
    install(&forward, Category::Database, &both);
    install(&forward, Category::Validation, &both);

    let backward = project_filesystem(Path::new(ROOT));
    install(&backward, Category::Validation, &both);
    install(&backward, Category::Database, &both);

    assert_eq!(manifest(&forward), manifest(&backward));
    assert_eq!(
        keys(&manifest(&forward), "dependencies"),
        keys(&manifest(&backward), "dependencies")
    );
}

#[test]
fn merge_preserves_unrelated_keys_and_fields() {
    let fs = MemoryFilesystem::new();
    fs.seed(
        Path::new(ROOT).join("package.json"),
        r#"{
  "name": "my-api",
  "private": true,
  "dependencies": { "left-pad": "^1.0.0" },
  "scripts": { "dev": "bun run dev" }
}"#,
    );
    let merger = ManifestMerger::new(&fs);

    merger
        .merge_dependencies(
            Path::new(ROOT),
            &packages(&[("postgres", "^3.4.4")]),
            &PackageMap::new(),
        )
        .unwrap();

    let doc = manifest(&fs);
    assert_eq!(doc["name"], "my-api");
    assert_eq!(doc["private"], true);
    assert_eq!(doc["dependencies"]["left-pad"], "^1.0.0");
    assert_eq!(doc["dependencies"]["postgres"], "^3.4.4");
    assert_eq!(doc["scripts"]["dev"], "bun run dev");
    assert!(doc.get("devDependencies").is_none());

    let top: Vec<&String> = doc.as_object().unwrap().keys().collect();
    assert_eq!(top, ["name", "private", "dependencies", "scripts"]);
}

#[test]
fn dependency_sections_stay_sorted_after_any_merge_sequence() {
    let fs = project_filesystem(Path::new(ROOT));
    let merger = ManifestMerger::new(&fs);
    let batches = [
        packages(&[("zod", "^3"), ("hono", "^4")]),
        packages(&[("@aws-sdk/client-s3", "^3"), ("mongoose", "^8")]),
        packages(&[("axios", "^1"), ("yup", "^1")]),
    ];

    for batch in &batches {
        merger.merge_dependencies(Path::new(ROOT), batch, batch).unwrap();
        let doc = manifest(&fs);
        for section in ["dependencies", "devDependencies"] {
            let found = keys(&doc, section);
            let mut sorted = found.clone();
            sorted.sort();
            assert_eq!(found, sorted, "{section} out of order");
        }
    }
}

#[test]
fn scripts_are_upserted_in_place() {
    let fs = project_filesystem(Path::new(ROOT));
    let merger = ManifestMerger::new(&fs);

    merger
        .merge_scripts(Path::new(ROOT), &[("test", "vitest"), ("dev", "bun --hot src/index.ts")])
        .unwrap();

    let doc = manifest(&fs);
    assert_eq!(keys(&doc, "scripts"), ["dev", "test"]);
    assert_eq!(doc["scripts"]["dev"], "bun --hot src/index.ts");
}

// =============================================================================
// Env and ignore files
// =============================================================================

#[test]
fn env_file_is_append_only() {
    let fs = project_filesystem(Path::new(ROOT));
    let merger = ManifestMerger::new(&fs);
    let path = Path::new(ROOT).join(".env.example");

    let mut previous = String::new();
    for n in 0..4 {
        let block = EnvBlock::new(format!("Block {n}")).var(format!("KEY_{n}"), "value");
        merger.append_env_block(Path::new(ROOT), &block.render()).unwrap();

        let current = fs.read_file(&path).unwrap();
        assert!(current.starts_with(&previous));
        previous = current;
    }

    let headers: Vec<&str> = previous.lines().filter(|l| l.starts_with("# Block")).collect();
    assert_eq!(headers, ["# Block 0", "# Block 1", "# Block 2", "# Block 3"]);
}

#[test]
fn gitignore_entries_are_added_once() {
    let fs = project_filesystem(Path::new(ROOT));
    fs.seed(Path::new(ROOT).join(".gitignore"), "node_modules\n");
    let merger = ManifestMerger::new(&fs);

    let added = merger
        .ensure_gitignore_entries(Path::new(ROOT), &["node_modules", ".env", "data/"])
        .unwrap();
    assert_eq!(added, [".env", "data/"]);

    assert!(!merger.ensure_gitignore_entry(Path::new(ROOT), ".env").unwrap());

    let content = fs.read_file(Path::new(ROOT).join(".gitignore")).unwrap();
    assert_eq!(content.matches(".env").count(), 1);
    assert!(content.starts_with("node_modules\n"));
}

// =============================================================================
// Plan and installers
// =============================================================================

#[test]
fn category_is_in_use_iff_a_governed_feature_is_selected() {
    for category in Category::ALL.iter().filter(|c| !c.is_unconditional()) {
        let empty = build_plan(&FeatureSelection::new(Framework::Hono));
        let entry = empty.entries().iter().find(|e| e.category == *category).unwrap();
        assert!(!entry.in_use, "{category} in use for empty selection");

        for feature in category.governed_features() {
            let plan = build_plan(&FeatureSelection::new(Framework::Hono).with_feature(*feature));
            let entry = plan.entries().iter().find(|e| e.category == *category).unwrap();
            assert!(entry.in_use, "{category} not in use for {feature}");
        }
    }
}

#[test]
fn installer_without_selected_features_writes_nothing() {
    let fs = project_filesystem(Path::new(ROOT));
    let unrelated = selection(&["zod"]);

    for category in Category::ALL
        .iter()
        .filter(|c| !c.is_unconditional() && **c != Category::Validation)
    {
        let before = fs.write_count();
        install(&fs, *category, &unrelated);
        assert_eq!(fs.write_count(), before, "{category} wrote files");
    }
}

#[test]
fn repeated_installer_run_leaves_manifest_unchanged() {
    let fs = project_filesystem(Path::new(ROOT));
    let postgres = selection(&["postgres"]);

    install(&fs, Category::Database, &postgres);
    let first = manifest(&fs);
    install(&fs, Category::Database, &postgres);

    assert_eq!(manifest(&fs), first);

    // The env block is not deduplicated.
    let env = fs.read_file(Path::new(ROOT).join(".env.example")).unwrap();
    assert_eq!(env.matches("# PostgreSQL Configuration").count(), 2);
}

#[test]
fn sqlite_gets_a_local_data_directory() {
    let fs = project_filesystem(Path::new(ROOT));
    install(&fs, Category::Database, &selection(&["sqlite"]));

    assert!(fs.is_dir(&Path::new(ROOT).join("data")));

    let ignore = fs.read_file(Path::new(ROOT).join(".gitignore")).unwrap();
    assert!(ignore.contains("data/"));
    assert_eq!(manifest(&fs)["scripts"]["db:migrate"], "drizzle-kit migrate");
}

// =============================================================================
// Plan execution
// =============================================================================

#[test]
fn failing_installer_aborts_the_remaining_plan() {
    let fs = seeded_filesystem();
    fs.seed(
        Path::new(ROOT).join("package.json"),
        r#"{"name":"p","devDependencies":"broken"}"#,
    );
    let template_root = templates();
    let ctx = InstallContext::new(&fs, &template_root, Path::new(ROOT));
    let selection = selection(&["postgres", "vitest"]);

    let err = InstallerRunner::run(&build_plan(&selection), &ctx, &selection).unwrap_err();

    assert!(matches!(
        err,
        StackcraftError::Domain(DomainError::MalformedManifest { .. })
    ));
    let files = fs.snapshot(ROOT);
    // The database fragment was copied before its merge failed; no rollback.
    assert!(files.contains_key(Path::new("src/db/index.ts")));
    assert!(!files.contains_key(Path::new("vitest.config.ts")));
    assert!(!files.contains_key(Path::new(".env")));
}
