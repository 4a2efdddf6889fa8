//! create-static-website - scaffold a static website with an optional servemon dev server

use anyhow::Result;
use clap::Parser;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{AnswerSet, ProductConfig};
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// create-static-website product configuration
#[derive(Clone)]
pub struct StaticWebsiteConfig;

impl ProductConfig for StaticWebsiteConfig {
    fn display_name(&self) -> &'static str {
        "Create Static Website"
    }

    fn template_dir_env(&self) -> &'static str {
        "CSW_TEMPLATE_DIR"
    }

    fn docs_url(&self) -> &'static str {
        "https://servemon.netlify.app"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install create-static-website --force"
    }

    fn next_steps(&self, dir: &Path, answers: &AnswerSet) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: start the dev server, or open the page directly
        if answers.use_servemon {
            steps.push("npm start".to_string());
            steps.push(format!("Servemon docs: {}", self.docs_url()));
        } else {
            steps.push("Open index.html in your browser".to_string());
        }

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-static-website")]
#[command(about = "CLI for scaffolding static websites")]
#[command(version)]
pub struct Args {
    /// Project name written to package.json
    #[arg(short, long)]
    pub name: Option<String>,

    /// Project directory to create (must not exist)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Author recorded in log.txt
    #[arg(short, long)]
    pub author: Option<String>,

    /// Template to use (Simple or Bootstrap)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Do not generate servemon.config.js
    #[arg(long = "no-servemon")]
    pub no_servemon: bool,

    /// Install servemon globally after creating the project
    #[arg(long = "install-servemon")]
    pub install_servemon: bool,

    /// Package manager used to install servemon (npm, yarn or pnpm)
    #[arg(short, long = "package-manager")]
    pub package_manager: Option<String>,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Accept defaults for every question not answered by a flag (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            name: args.name,
            directory: args.directory,
            author: args.author,
            template: args.template,
            servemon: args.no_servemon.then_some(false),
            install_servemon: args.install_servemon.then_some(true),
            package_manager: args.package_manager,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
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
    let config = StaticWebsiteConfig;

    let result = scaffolder_core::run(&config, args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
