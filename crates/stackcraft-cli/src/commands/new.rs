//! Implementation of the `stackcraft new` command.
//!
//! Responsibility: translate CLI arguments and config defaults into a
//! `ScaffoldRequest`, call the core scaffold service, and display results.
//! No business logic lives here.

use tracing::{debug, info, instrument};

use stackcraft_adapters::{LocalFilesystem, SystemProcessRunner, resolve_template_root};
use stackcraft_core::{
    application::{ScaffoldReport, ScaffoldRequest, ScaffoldService, services::build_plan},
    domain::{
        DomainValidator, FeatureSelection, Framework, ProjectLocation, ScaffoldOptions,
    },
};

use crate::{
    cli::{FrameworkArg, NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `stackcraft new` command.
///
/// 1. Resolve the destination and name
/// 2. Build the feature selection (flags, config, optional prompts)
/// 3. `--dry-run` prints the installer plan and stops
/// 4. Confirm unless `--yes` or quiet output
/// 5. Locate templates and run `ScaffoldService`
/// 6. Print the report
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    let home = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf());
    let location = ProjectLocation::resolve(&args.name, &cwd, home.as_deref())?;

    let mut selection = build_selection(&args, &config)?;
    if args.interactive {
        selection = prompt_selection(selection)?;
    }

    let request = ScaffoldRequest {
        location,
        selection,
        options: build_options(&args, &config),
    };

    debug!(
        name = %request.location.name,
        path = %request.location.path.display(),
        in_place = request.location.in_place,
        framework = %request.selection.framework(),
        features = request.selection.features().len(),
        "Request resolved"
    );

    if args.dry_run {
        return print_plan(&request, &output);
    }

    if !args.yes && !output.is_quiet() {
        show_configuration(&request, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    let template_root = resolve_template_root(config.templates.local_path.as_deref())
        .ok_or_else(|| CliError::TemplatesNotFound {
            searched: config.templates.local_path.clone(),
        })?;
    debug!(templates = %template_root.display(), "Template root resolved");

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemProcessRunner::new()),
        template_root,
    );

    info!(project = %request.location.name, "Scaffold started");
    let spinner = output.spinner(&format!("Creating '{}'...", request.location.name));
    let result = service.scaffold(&request);
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let report = result.map_err(CliError::Core)?;

    print_report(&report, &output)
}

// ── Request construction ─────────────────────────────────────────────────────

fn framework_from_arg(arg: FrameworkArg) -> Framework {
    match arg {
        FrameworkArg::Hono => Framework::Hono,
        FrameworkArg::Express => Framework::Express,
        FrameworkArg::BunNative => Framework::BunNative,
    }
}

fn build_selection(args: &NewArgs, config: &AppConfig) -> CliResult<FeatureSelection> {
    let framework = match args.framework {
        Some(arg) => framework_from_arg(arg),
        None => config
            .default_framework()
            .map_err(|e| CliError::ConfigError {
                message: format!("defaults.framework: {e}"),
                source: Some(Box::new(e)),
            })?,
    };
    let features = DomainValidator::parse_features(&args.features)?;
    Ok(FeatureSelection::from_features(framework, features))
}

/// Config defaults with the CLI opt-outs applied on top.
fn build_options(args: &NewArgs, config: &AppConfig) -> ScaffoldOptions {
    let defaults = config.scaffold_options();
    ScaffoldOptions {
        install: defaults.install && !args.no_install,
        git: defaults.git && !args.no_git,
        dockerize_databases: defaults.dockerize_databases && !args.no_docker_db,
        dockerize_app: defaults.dockerize_app && !args.no_docker_app,
    }
}

// ── Interactive selection ────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_selection(initial: FeatureSelection) -> CliResult<FeatureSelection> {
    use dialoguer::{MultiSelect, Select, theme::ColorfulTheme};
    use stackcraft_core::domain::catalog::selectable_categories;

    let theme = ColorfulTheme::default();

    let names: Vec<&str> = Framework::ALL.iter().map(|f| f.display_name()).collect();
    let current = Framework::ALL
        .iter()
        .position(|f| *f == initial.framework())
        .unwrap_or(0);
    let picked = Select::with_theme(&theme)
        .with_prompt("Framework")
        .items(&names)
        .default(current)
        .interact()
        .map_err(prompt_failed)?;
    let framework = Framework::ALL.get(picked).copied().unwrap_or_default();

    let mut features = Vec::new();
    for def in selectable_categories() {
        let ids: Vec<&str> = def.features.iter().map(|f| f.as_str()).collect();
        if def.multi_select {
            let chosen: Vec<bool> = def.features.iter().map(|f| initial.contains(*f)).collect();
            let picked = MultiSelect::with_theme(&theme)
                .with_prompt(def.title)
                .items(&ids)
                .defaults(&chosen)
                .interact()
                .map_err(prompt_failed)?;
            features.extend(picked.into_iter().filter_map(|i| def.features.get(i).copied()));
        } else {
            let mut items = vec!["none"];
            items.extend(&ids);
            let current = def
                .features
                .iter()
                .position(|f| initial.contains(*f))
                .map_or(0, |i| i + 1);
            let picked = Select::with_theme(&theme)
                .with_prompt(def.title)
                .items(&items)
                .default(current)
                .interact()
                .map_err(prompt_failed)?;
            if let Some(feature) = picked.checked_sub(1).and_then(|i| def.features.get(i)) {
                features.push(*feature);
            }
        }
    }

    Ok(FeatureSelection::from_features(framework, features))
}

#[cfg(feature = "interactive")]
fn prompt_failed(err: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: "Interactive prompt failed".into(),
        source: std::io::Error::other(err),
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_selection(_initial: FeatureSelection) -> CliResult<FeatureSelection> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn feature_list(selection: &FeatureSelection) -> String {
    if selection.is_empty() {
        return "none".into();
    }
    selection
        .features()
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn show_configuration(request: &ScaffoldRequest, out: &OutputManager) -> CliResult<()> {
    let options = &request.options;
    out.header("Configuration")?;
    out.field("Project", &request.location.name)?;
    out.field("Location", &request.location.path.display().to_string())?;
    out.field("Framework", request.selection.framework().display_name())?;
    out.field("Features", &feature_list(&request.selection))?;
    out.field("Install", yes_no(options.install))?;
    out.field("Git", yes_no(options.git))?;
    out.field(
        "Docker",
        &format!(
            "databases: {}, app: {}",
            yes_no(options.dockerize_databases),
            yes_no(options.dockerize_app)
        ),
    )?;
    out.print("")?;
    Ok(())
}

fn print_plan(request: &ScaffoldRequest, out: &OutputManager) -> CliResult<()> {
    let plan = build_plan(&request.selection).summary();

    if out.format() == OutputFormat::Json {
        out.json(&plan)?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create '{}' at {}",
        request.location.name,
        request.location.path.display()
    ))?;
    out.field("Framework", request.selection.framework().display_name())?;
    out.header("Installers")?;
    for entry in plan.iter().filter(|p| p.in_use) {
        let features: Vec<&str> = request
            .selection
            .in_category(entry.category)
            .map(|f| f.as_str())
            .collect();
        let line = if features.is_empty() {
            format!("  {}", entry.category)
        } else {
            format!("  {:<14} {}", entry.category.as_str(), features.join(", "))
        };
        out.print(&line)?;
    }
    Ok(())
}

fn print_report(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        out.json(report)?;
        return Ok(());
    }

    out.success(&format!(
        "Project '{}' created at {}",
        report.name,
        report.path.display()
    ))?;
    for warning in &report.warnings {
        out.warning(warning)?;
    }
    if !report.container_files.is_empty() {
        let files: Vec<String> = report
            .container_files
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        out.info(&format!("Container files: {}", files.join(", ")))?;
    }

    out.print("")?;
    out.header("Next steps:")?;
    for command in &report.next_steps.commands {
        out.print(&format!("  {command}"))?;
    }
    for note in &report.next_steps.notes {
        out.info(note)?;
    }
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
