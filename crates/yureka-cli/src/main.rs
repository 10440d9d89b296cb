//! Yureka CLI - Add Yureka UI components to a web project

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use yureka_core::tui::{AddArgs, CommonArgs, InitArgs, RemoveArgs};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "yureka")]
#[command(about = "CLI for adding Yureka UI components to your project")]
#[command(version)]
pub struct Args {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize Yureka UI in the current project
    Init(CliInitArgs),
    /// Add a component to your project
    Add(CliAddArgs),
    /// Remove a component from your project
    Remove(CliRemoveArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Install missing dependencies without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Do not run the package manager
    #[arg(long = "skip-install")]
    pub skip_install: bool,
}

#[derive(Parser, Debug)]
pub struct CliAddArgs {
    /// Component to add (e.g. button, card)
    pub component: Option<String>,

    /// Local directory to use for templates instead of the bundled set (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CliRemoveArgs {
    /// Component to remove
    pub component: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "yureka_core=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

async fn run(args: Args) -> anyhow::Result<()> {
    let common = CommonArgs {
        project_dir: args.cwd,
    };

    match args.command {
        Command::Init(init) => {
            let init = InitArgs {
                common,
                yes: init.yes,
                skip_install: init.skip_install,
            };
            yureka_core::run_init(init, CLI_VERSION).await
        }
        Command::Add(add) => {
            let add = AddArgs {
                common,
                component: add.component,
                template_dir: add.template_dir,
            };
            yureka_core::run_add(add, CLI_VERSION).await
        }
        Command::Remove(remove) => {
            let remove = RemoveArgs {
                common,
                component: remove.component,
                yes: remove.yes,
            };
            yureka_core::run_remove(remove, CLI_VERSION).await
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose);

    let result = run(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_add_accepts_optional_component() {
        let args = Args::parse_from(["yureka", "add", "button"]);
        let Command::Add(add) = args.command else {
            panic!("expected add");
        };
        assert_eq!(add.component.as_deref(), Some("button"));

        let args = Args::parse_from(["yureka", "add"]);
        let Command::Add(add) = args.command else {
            panic!("expected add");
        };
        assert!(add.component.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["yureka", "remove", "card", "--cwd", "/tmp/app", "-y"]);
        assert_eq!(args.cwd, Some(PathBuf::from("/tmp/app")));
        let Command::Remove(remove) = args.command else {
            panic!("expected remove");
        };
        assert!(remove.yes);
    }
}
