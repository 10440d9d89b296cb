//! Charm-style CLI prompts using cliclack

use crate::commands::{
    self, AddOutcome, AddReport, Choice, InitOptions, InitOutcome, InitReport, Prompter,
    RemoveOutcome, RemoveReport,
};
use crate::config::{ProjectLayout, UI_DIR};
use crate::project::PackageInstaller;
use crate::templates::{TemplateResolver, TemplateSource};
use anyhow::Result;
use colored::Colorize;
use std::io;
use std::path::PathBuf;

/// Arguments shared by every command
#[derive(Debug, Clone, Default)]
pub struct CommonArgs {
    /// Project root; defaults to the current directory
    pub project_dir: Option<PathBuf>,
}

impl CommonArgs {
    fn layout(&self) -> ProjectLayout {
        match &self.project_dir {
            Some(dir) => ProjectLayout::new(dir),
            None => ProjectLayout::from_current_dir(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    pub common: CommonArgs,
    /// Install missing dependencies without asking
    pub yes: bool,
    /// Never run the package manager
    pub skip_install: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub common: CommonArgs,
    /// Catalog identifier; prompts when absent
    pub component: Option<String>,
    /// Local directory to use for templates instead of the bundled set
    pub template_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct RemoveArgs {
    pub common: CommonArgs,
    /// Catalog identifier; prompts when absent
    pub component: Option<String>,
    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// [`Prompter`] backed by cliclack; Esc and Ctrl-C count as cancel
#[derive(Debug, Clone, Default)]
pub struct CliPrompter {
    yes: bool,
}

impl CliPrompter {
    pub fn new(yes: bool) -> Self {
        Self { yes }
    }
}

fn cancelled<T>(result: io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Prompter for CliPrompter {
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<Option<String>> {
        let mut select = cliclack::select(message);
        for choice in choices {
            select = select.item(choice.value.clone(), &choice.label, &choice.hint);
        }
        cancelled(select.interact())
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        if self.yes {
            cliclack::log::info(format!("{} (yes)", message))?;
            return Ok(true);
        }
        let answer = cancelled(cliclack::confirm(message).initial_value(default).interact())?;
        Ok(answer.unwrap_or(false))
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }

    fn info(&mut self, message: &str) -> Result<()> {
        cliclack::log::info(message)?;
        Ok(())
    }
}

/// Run `init`
pub async fn run_init(args: InitArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("Yureka UI")?;

    let layout = args.common.layout();
    let mut prompter = CliPrompter::new(args.yes);
    let installer = PackageInstaller::detect(layout.root());
    let options = InitOptions {
        cli_version: cli_version.to_string(),
        install_dependencies: !args.skip_install,
    };

    match commands::init_project(&layout, &mut prompter, &options, Some(&installer)).await? {
        InitOutcome::AlreadyInitialized => {
            cliclack::outro("Yureka UI is already initialized in this project.")?;
        }
        InitOutcome::Initialized(report) => print_init_report(&layout, &report)?,
    }

    Ok(())
}

fn print_init_report(layout: &ProjectLayout, report: &InitReport) -> Result<()> {
    let styling = if report.project.uses_style_framework {
        "Tailwind CSS"
    } else {
        "CSS Modules"
    };
    let language = if report.project.uses_static_types {
        "TypeScript"
    } else {
        "JavaScript"
    };
    cliclack::log::success(format!(
        "Initialized {} ({}, {}, {} files)",
        layout.ui_root().display(),
        styling,
        language,
        report.project.source_extension
    ))?;
    if report.installed_peers {
        cliclack::log::success(format!("Installed {}", report.missing_peers.join(", ")))?;
    }

    println!();
    println!("  Next steps");
    println!();
    println!("  1.  {}", "npx yureka add button".cyan());
    println!(
        "  2.  {}",
        format!("import {{ Button }} from '@/components/{}';", UI_DIR).cyan()
    );

    cliclack::outro("Happy coding!")?;
    Ok(())
}

/// Run `add`
pub async fn run_add(args: AddArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("Yureka UI")?;

    let layout = args.common.layout();
    let source = TemplateSource::from_override(args.template_dir.clone());
    if let TemplateSource::Local(path) = &source {
        cliclack::log::info(format!("Using local templates from {}", path.display()))?;
    }
    let resolver = TemplateResolver::new(source);
    let mut prompter = CliPrompter::default();

    let outcome = commands::add_component(
        &layout,
        &resolver,
        args.component.as_deref(),
        &mut prompter,
        cli_version,
    )
    .await?;

    match outcome {
        AddOutcome::Cancelled => cliclack::outro_cancel("No component added.")?,
        AddOutcome::Added(report) => print_add_report(&report)?,
    }

    Ok(())
}

fn print_add_report(report: &AddReport) -> Result<()> {
    let name = report.component.display_name;

    if report.replaced {
        cliclack::log::warning(format!("Replaced existing {} component", name))?;
    }
    cliclack::log::success(format!(
        "{} component created in {} ({})",
        name,
        report.component_dir.display(),
        report.origin
    ))?;
    for file in &report.files {
        println!("  {} {}", "+".green(), file);
    }
    if report.barrel_updated {
        cliclack::log::info(format!("Exported from {}", report.barrel.display()))?;
    }

    println!();
    println!("{}", "  You can import it with:".blue());
    println!(
        "    import {{ {} }} from '@/components/{}';",
        name, UI_DIR
    );
    println!("{}", "  Or directly:".blue());
    println!(
        "    import {} from '@/components/{}/{}';",
        name, UI_DIR, name
    );
    println!("{}", "  Example usage:".blue());
    println!("    <{}>Click me</{}>", name, name);
    println!();

    cliclack::outro(format!("{} component has been added to your project!", name))?;
    Ok(())
}

/// Run `remove`
pub async fn run_remove(args: RemoveArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("Yureka UI")?;

    let layout = args.common.layout();
    let mut prompter = CliPrompter::new(args.yes);

    let outcome =
        commands::remove_component(&layout, args.component.as_deref(), &mut prompter, cli_version)
            .await?;

    match outcome {
        RemoveOutcome::NothingInstalled => {
            cliclack::outro("No Yureka UI components are installed.")?;
        }
        RemoveOutcome::Cancelled => cliclack::outro_cancel("Removal cancelled.")?,
        RemoveOutcome::Removed(report) => print_remove_report(&report)?,
    }

    Ok(())
}

fn print_remove_report(report: &RemoveReport) -> Result<()> {
    cliclack::log::success(format!(
        "{} component removed successfully",
        report.display_name
    ))?;
    if report.torn_down {
        cliclack::log::success("Yureka UI has been completely removed from your project")?;
    }
    cliclack::outro(format!(
        "{} component has been removed from your project!",
        report.display_name
    ))?;
    Ok(())
}
