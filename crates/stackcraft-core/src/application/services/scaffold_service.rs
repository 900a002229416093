//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Pre-flight destination checks (nothing written on failure)
//! 2. Copy the framework's base template and name the project
//! 3. Build and run the installer plan
//! 4. Write container files
//! 5. Optionally install dependencies (fatal) and init git (warn only)
//! 6. Derive next steps
//!
//! Every step runs to completion before the next one starts.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProcessRunner},
        services::{
            finalize,
            installers::{ENV_FILE, InstallContext},
            manifest_merger::{ENV_EXAMPLE_FILE, MANIFEST_FILE, ManifestMerger},
            plan::{InstallerRunner, PlannedInstaller, build_plan},
            template_copier::TemplateCopier,
        },
    },
    domain::{
        Category, ComposeFile, FeatureSelection, NextSteps, ProjectLocation, RunOutcome,
        ScaffoldOptions,
        catalog::framework_def,
        entities::container::{COMPOSE_FILE, DOCKERFILE, DOCKERFILE_CONTENTS},
    },
    error::StackResult,
};

/// Files that make an in-place scaffold conflict, on top of whatever the
/// base template ships.
pub const RESERVED_FILES: &[&str] = &[
    MANIFEST_FILE,
    ENV_FILE,
    ENV_EXAMPLE_FILE,
    COMPOSE_FILE,
    DOCKERFILE,
];

/// Everything needed to scaffold one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub location: ProjectLocation,
    pub selection: FeatureSelection,
    pub options: ScaffoldOptions,
}

/// What a scaffold run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub name: String,
    pub path: PathBuf,
    pub plan: Vec<PlannedInstaller>,
    pub executed: Vec<Category>,
    pub container_files: Vec<PathBuf>,
    pub installed: bool,
    pub git_initialized: bool,
    pub warnings: Vec<String>,
    pub next_steps: NextSteps,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    process: Box<dyn ProcessRunner>,
    template_root: PathBuf,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        process: Box<dyn ProcessRunner>,
        template_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            process,
            template_root: template_root.into(),
        }
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    /// The installer plan for `request`, without touching the filesystem.
    pub fn plan(&self, request: &ScaffoldRequest) -> Vec<PlannedInstaller> {
        build_plan(&request.selection).summary()
    }

    /// Scaffold a new project.
    #[instrument(
        skip_all,
        fields(
            project = %request.location.name,
            path = %request.location.path.display(),
            framework = %request.selection.framework()
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> StackResult<ScaffoldReport> {
        let location = &request.location;
        let selection = &request.selection;
        let root = location.path.as_path();
        let fs = self.filesystem.as_ref();

        // 1. Pre-flight
        self.preflight(request)?;

        // 2. Base scaffold
        self.scaffold_base(request)?;

        // 3. Installer plan
        let plan = build_plan(selection);
        let ctx = InstallContext::new(fs, &self.template_root, root);
        let executed = InstallerRunner::run(&plan, &ctx, selection)?;

        // 4. Container files
        let compose = ComposeFile::for_selection(selection, &location.name, &request.options);
        let container_files = self.write_container_files(root, compose.as_ref(), &request.options)?;
        let containerized_databases = compose
            .as_ref()
            .is_some_and(|c| c.database_services().next().is_some());

        // 5. External steps
        let mut warnings = Vec::new();
        if request.options.install {
            if let Err(e) = finalize::install_dependencies(self.process.as_ref(), root) {
                warn!(error = %e, "Dependency installation failed");
                return Err(e);
            }
        }

        let mut git_initialized = false;
        if request.options.git {
            match finalize::init_git(self.process.as_ref(), root) {
                Ok(()) => git_initialized = true,
                Err(e) => {
                    warn!(error = %e, "Git initialisation failed, continuing");
                    warnings.push(format!("Git initialisation failed: {e}"));
                }
            }
        }

        // 6. Report
        let outcome = RunOutcome {
            in_place: location.in_place,
            installed: request.options.install,
            git_initialized,
            containerized_databases,
        };
        info!(installers = executed.len(), "Scaffold completed successfully");

        Ok(ScaffoldReport {
            name: location.name.clone(),
            path: location.path.clone(),
            plan: plan.summary(),
            executed,
            container_files,
            installed: request.options.install,
            git_initialized,
            warnings,
            next_steps: NextSteps::derive(&location.name, selection, &outcome),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn base_template(&self, selection: &FeatureSelection) -> &'static str {
        framework_def(selection.framework()).template_dir
    }

    /// Fail before any write if the destination is unusable.
    fn preflight(&self, request: &ScaffoldRequest) -> StackResult<()> {
        let fs = self.filesystem.as_ref();
        let root = &request.location.path;

        let base = self.template_root.join(self.base_template(&request.selection));
        if !fs.is_dir(&base) {
            return Err(ApplicationError::BaseTemplateMissing { path: base }.into());
        }

        if request.location.in_place {
            let mut candidates: Vec<PathBuf> = fs.walk_files(&base)?;
            candidates.extend(RESERVED_FILES.iter().map(|f| PathBuf::from(*f)));
            candidates.sort();
            candidates.dedup();

            let conflicts: Vec<PathBuf> = candidates
                .into_iter()
                .filter(|relative| fs.exists(&root.join(relative)))
                .collect();
            if !conflicts.is_empty() {
                return Err(ApplicationError::ConflictingFiles {
                    root: root.clone(),
                    paths: conflicts,
                }
                .into());
            }
        } else if fs.exists(root) && (!fs.is_dir(root) || !fs.list_dir(root)?.is_empty()) {
            return Err(ApplicationError::DestinationNotEmpty { path: root.clone() }.into());
        }
        Ok(())
    }

    /// Copy the base template and stamp the project name into the manifest.
    fn scaffold_base(&self, request: &ScaffoldRequest) -> StackResult<()> {
        let fs = self.filesystem.as_ref();
        let root = &request.location.path;
        let template = self.base_template(&request.selection);

        fs.create_dir_all(root)?;
        let report = TemplateCopier::new(fs, &self.template_root).copy(template, root)?;
        info!(template, files = report.copied.len(), "Base template copied");

        ManifestMerger::new(fs).set_name(root, &request.location.name)
    }

    fn write_container_files(
        &self,
        root: &Path,
        compose: Option<&ComposeFile>,
        options: &ScaffoldOptions,
    ) -> StackResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        let Some(compose) = compose else {
            return Ok(written);
        };

        if self.write_if_absent(&root.join(COMPOSE_FILE), &compose.to_yaml()?)? {
            written.push(PathBuf::from(COMPOSE_FILE));
        }
        if options.dockerize_app
            && self.write_if_absent(&root.join(DOCKERFILE), DOCKERFILE_CONTENTS)?
        {
            written.push(PathBuf::from(DOCKERFILE));
        }
        Ok(written)
    }

    fn write_if_absent(&self, path: &Path, content: &str) -> StackResult<bool> {
        if self.filesystem.exists(path) {
            info!(path = %path.display(), "Exists, not overwriting");
            return Ok(false);
        }
        self.filesystem.write_file(path, content)?;
        Ok(true)
    }
}
