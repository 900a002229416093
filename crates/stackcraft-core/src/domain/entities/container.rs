//! Container descriptors derived from the final selection.
//!
//! Pure model: building a [`ComposeFile`] touches no filesystem. The
//! orchestrator serialises it and writes it only if the project has none.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::selection::{FeatureSelection, ScaffoldOptions};
use crate::domain::error::DomainError;
use crate::domain::value_objects::{DatabaseFeature, Feature};

/// Port the generated app listens on.
pub const APP_PORT: u16 = 3000;

pub const COMPOSE_FILE: &str = "docker-compose.yml";
pub const DOCKERFILE: &str = "Dockerfile";

pub const DOCKERFILE_CONTENTS: &str = r#"FROM oven/bun:1 AS base
WORKDIR /app

FROM base AS install
COPY package.json bun.lockb* ./
RUN bun install --frozen-lockfile --production

FROM base AS release
COPY --from=install /app/node_modules ./node_modules
COPY . .

ENV NODE_ENV=production
EXPOSE 3000
USER bun
CMD ["bun", "run", "src/index.ts"]
"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComposeFile {
    pub services: BTreeMap<String, ComposeService>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub volumes: BTreeMap<String, NamedVolume>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComposeService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    pub restart: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env_file: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// A top-level named volume with default driver settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NamedVolume {}

impl ComposeFile {
    /// Build the compose model for `selection`.
    ///
    /// Returns `None` when there is nothing to containerise.
    pub fn for_selection(
        selection: &FeatureSelection,
        app_name: &str,
        options: &ScaffoldOptions,
    ) -> Option<Self> {
        let mut compose = Self::default();

        if options.dockerize_databases {
            let engines = selection.features().iter().filter_map(|f| match f {
                Feature::Database(db) => database_service(*db, app_name),
                _ => None,
            });
            for (name, service, volume) in engines {
                compose.services.insert(name.into(), service);
                compose.volumes.insert(volume.into(), NamedVolume::default());
            }
        }

        if options.dockerize_app {
            let depends_on: Vec<String> = compose.services.keys().cloned().collect();
            let mut volumes = Vec::new();
            if selection.contains(Feature::Database(DatabaseFeature::Sqlite)) {
                volumes.push("./data:/app/data".to_string());
            }
            compose.services.insert(
                "app".into(),
                ComposeService {
                    build: Some(".".into()),
                    restart: "unless-stopped".into(),
                    ports: vec![format!("{APP_PORT}:{APP_PORT}")],
                    environment: vec!["NODE_ENV=production".into()],
                    env_file: vec![".env".into()],
                    volumes,
                    depends_on,
                    ..ComposeService::default()
                },
            );
        }

        (!compose.services.is_empty()).then_some(compose)
    }

    /// Names of containerised database services.
    pub fn database_services(&self) -> impl Iterator<Item = &str> {
        self.services
            .keys()
            .map(String::as_str)
            .filter(|name| *name != "app")
    }

    pub fn to_yaml(&self) -> Result<String, DomainError> {
        serde_yaml::to_string(self).map_err(|e| DomainError::Serialization {
            document: COMPOSE_FILE,
            reason: e.to_string(),
        })
    }
}

/// Service name, service block and named volume for a database engine.
/// Embedded engines have no service.
fn database_service(
    db: DatabaseFeature,
    app_name: &str,
) -> Option<(&'static str, ComposeService, &'static str)> {
    let service = |image: &str, port: u16, environment: Vec<String>, volume: &str| ComposeService {
        image: Some(image.into()),
        restart: "unless-stopped".into(),
        ports: vec![format!("{port}:{port}")],
        environment,
        volumes: vec![volume.into()],
        ..ComposeService::default()
    };

    match db {
        DatabaseFeature::Postgres => Some((
            "postgres",
            service(
                "postgres:16-alpine",
                5432,
                vec![
                    "POSTGRES_USER=${POSTGRES_USER:-user}".into(),
                    "POSTGRES_PASSWORD=${POSTGRES_PASSWORD:-password}".into(),
                    format!("POSTGRES_DB=${{POSTGRES_DB:-{app_name}}}"),
                ],
                "postgres_data:/var/lib/postgresql/data",
            ),
            "postgres_data",
        )),
        DatabaseFeature::Mysql => Some((
            "mysql",
            service(
                "mysql:8.0",
                3306,
                vec![
                    "MYSQL_ROOT_PASSWORD=${MYSQL_ROOT_PASSWORD:-rootpassword}".into(),
                    format!("MYSQL_DATABASE=${{MYSQL_DATABASE:-{app_name}}}"),
                    "MYSQL_USER=${MYSQL_USER:-user}".into(),
                    "MYSQL_PASSWORD=${MYSQL_PASSWORD:-password}".into(),
                ],
                "mysql_data:/var/lib/mysql",
            ),
            "mysql_data",
        )),
        DatabaseFeature::Mongodb => Some((
            "mongodb",
            service(
                "mongo:7.0",
                27017,
                vec![
                    "MONGO_INITDB_ROOT_USERNAME=${MONGO_INITDB_ROOT_USERNAME:-admin}".into(),
                    "MONGO_INITDB_ROOT_PASSWORD=${MONGO_INITDB_ROOT_PASSWORD:-password}".into(),
                    format!("MONGO_INITDB_DATABASE=${{MONGO_INITDB_DATABASE:-{app_name}}}"),
                ],
                "mongodb_data:/data/db",
            ),
            "mongodb_data",
        )),
        DatabaseFeature::Redis => {
            let mut redis = service("redis:7-alpine", 6379, Vec::new(), "redis_data:/data");
            redis.command = Some("redis-server --appendonly yes".into());
            Some(("redis", redis, "redis_data"))
        }
        DatabaseFeature::Sqlite => None,
    }
}
