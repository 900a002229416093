//! Follow-up commands printed after a successful scaffold.

use serde::Serialize;

use crate::domain::catalog::framework_def;
use crate::domain::entities::container::APP_PORT;
use crate::domain::entities::selection::FeatureSelection;
use crate::domain::value_objects::{DatabaseFeature, DocsFeature, Feature};

/// What actually happened during the run, as far as next steps care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub in_place: bool,
    pub installed: bool,
    pub git_initialized: bool,
    pub containerized_databases: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NextSteps {
    /// Shell commands, in the order the user should run them.
    pub commands: Vec<String>,

    /// Extra hints that are not commands.
    pub notes: Vec<String>,
}

impl NextSteps {
    pub fn derive(project_name: &str, selection: &FeatureSelection, outcome: &RunOutcome) -> Self {
        let mut steps = Self::default();

        if !outcome.in_place {
            steps.commands.push(format!("cd {project_name}"));
        }
        if !outcome.installed {
            steps.commands.push("bun install".into());
        }
        steps.commands.push("cp .env.example .env".into());
        if outcome.containerized_databases {
            steps.commands.push("docker compose up -d".into());
        }
        if has_migrations(selection) {
            steps.commands.push("bun run db:migrate".into());
        }
        steps
            .commands
            .push(framework_def(selection.framework()).dev_command.into());

        if selection.contains(Feature::Docs(DocsFeature::Swagger))
            || selection.contains(Feature::Docs(DocsFeature::Scalar))
        {
            steps
                .notes
                .push(format!("API docs: http://localhost:{APP_PORT}/docs"));
        }
        if !outcome.git_initialized {
            steps
                .notes
                .push("Git was not initialised; run 'git init' when ready".into());
        }
        steps
    }
}

/// SQL-backed providers ship drizzle migration scripts.
pub fn has_migrations(selection: &FeatureSelection) -> bool {
    [
        DatabaseFeature::Postgres,
        DatabaseFeature::Mysql,
        DatabaseFeature::Sqlite,
    ]
    .into_iter()
    .any(|db| selection.contains(Feature::Database(db)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Framework;

    const FULL_RUN: RunOutcome = RunOutcome {
        in_place: false,
        installed: true,
        git_initialized: true,
        containerized_databases: false,
    };

    #[test]
    fn minimal_project() {
        let steps = NextSteps::derive("api", &FeatureSelection::new(Framework::Hono), &FULL_RUN);
        assert_eq!(steps.commands, ["cd api", "cp .env.example .env", "bun run dev"]);
        assert!(steps.notes.is_empty());
    }

    #[test]
    fn postgres_with_docker_and_skipped_install() {
        let selection = FeatureSelection::new(Framework::Hono)
            .with_feature(Feature::Database(DatabaseFeature::Postgres));
        let outcome = RunOutcome {
            installed: false,
            containerized_databases: true,
            ..FULL_RUN
        };
        let steps = NextSteps::derive("api", &selection, &outcome);
        assert_eq!(
            steps.commands,
            [
                "cd api",
                "bun install",
                "cp .env.example .env",
                "docker compose up -d",
                "bun run db:migrate",
                "bun run dev",
            ]
        );
    }

    #[test]
    fn in_place_skips_cd_and_notes_docs_and_git() {
        let selection = FeatureSelection::new(Framework::Express)
            .with_feature(Feature::Docs(DocsFeature::Scalar))
            .with_feature(Feature::Database(DatabaseFeature::Mongodb));
        let outcome = RunOutcome {
            in_place: true,
            git_initialized: false,
            ..FULL_RUN
        };
        let steps = NextSteps::derive("api", &selection, &outcome);
        assert!(!steps.commands.iter().any(|c| c.starts_with("cd ")));
        assert!(!steps.commands.iter().any(|c| c.contains("db:migrate")));
        assert_eq!(steps.notes.len(), 2);
        assert!(steps.notes[0].contains("/docs"));
    }
}
