//! Charm-style CLI prompts using cliclack

use crate::answers::{
    self, AnswerSet, PackageManager, TemplateKind, DEFAULT_AUTHOR, DEFAULT_PROJECT_NAME,
};
use crate::product::ProductConfig;
use crate::project::{InitReport, ProjectInitializer, StepOutcome};
use crate::runtime::check;
use crate::runtime::tool::{servemon_tool, ShellRunner, ToolManager};
use crate::templates::{version, TemplateSource};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Answers supplied up front; anything left `None` is asked interactively
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the bundled ones
    pub template_dir: Option<PathBuf>,

    /// Project name
    pub name: Option<String>,

    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Author recorded in the log
    pub author: Option<String>,

    /// Template name to use
    pub template: Option<String>,

    /// Whether to generate a servemon config
    pub servemon: Option<bool>,

    /// Whether to install servemon globally
    pub install_servemon: Option<bool>,

    /// Package manager used for the install
    pub package_manager: Option<String>,

    /// Accept the default for every question not answered by a flag
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let source = TemplateSource::from_config(config, args.template_dir.clone());
    if let TemplateSource::Local(_) = source {
        cliclack::log::info(format!("Using {}", source.describe()))?;
    }

    let tool = servemon_tool();

    // Step 1: Collect answers
    let answers = collect_answers(config, &source, &tool, &args, cli_version).await?;

    // Step 2: Check the package manager before handing it a global install
    if answers.install_servemon {
        check_package_manager(&answers)?;
    }

    // Step 3: Create project
    cliclack::log::step(format!(
        "Creating {} in {}",
        answers.project_name,
        answers.target_dir.display()
    ))?;
    let report = ProjectInitializer::new(&source, &tool, &ShellRunner)
        .run(&answers)
        .await;

    // Step 4: Report every step, then next steps or failure
    print_report(&report)?;

    let failures = report.failures().count();
    if failures > 0 {
        cliclack::outro_cancel(format!(
            "{} step(s) failed, the project in {} may be incomplete",
            failures,
            answers.target_dir.display()
        ))?;
        anyhow::bail!("Project creation failed.");
    }

    print_next_steps(config, &answers)?;

    Ok(())
}

async fn collect_answers<C: ProductConfig>(
    config: &C,
    source: &TemplateSource,
    tool: &ToolManager,
    args: &CreateArgs,
    cli_version: &str,
) -> Result<AnswerSet> {
    let project_name = ask_project_name(args)?;
    let target_dir = ask_directory(args, &project_name)?;
    let author = ask_author(args)?;
    let template = ask_template(source, args).await?;

    if let Some(kind) = TemplateKind::from_name(&template) {
        if let Ok(manifest) = source.manifest(kind).await {
            if let Some(warning) = version::check_compatibility(
                cli_version,
                &manifest.version,
                config.upgrade_command(),
            ) {
                cliclack::log::warning(warning)?;
            }
        }
    }

    let use_servemon = match args.servemon {
        Some(value) => value,
        None if args.yes => true,
        None => cliclack::confirm("Do you want to use Servemon as dev server? (recommended)")
            .initial_value(true)
            .interact()?,
    };

    let install_servemon = ask_install(tool, args)?;

    let package_manager = match &args.package_manager {
        Some(name) => name.clone(),
        None if args.yes || !install_servemon => PackageManager::Npm.name().to_string(),
        None => {
            let mut select = cliclack::select("Which package manager do you use?");
            for manager in PackageManager::ALL {
                select = select.item(manager, manager.name(), "");
            }
            let manager: PackageManager = select.initial_value(PackageManager::Npm).interact()?;
            manager.name().to_string()
        }
    };

    Ok(AnswerSet {
        project_name,
        target_dir,
        author,
        template,
        use_servemon,
        install_servemon,
        package_manager,
    })
}

fn ask_project_name(args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.name {
        answers::validate_project_name(name).map_err(anyhow::Error::msg)?;
        cliclack::log::info(format!("Project name: {}", name.trim()))?;
        return Ok(name.trim().to_string());
    }
    if args.yes {
        return Ok(DEFAULT_PROJECT_NAME.to_string());
    }

    let name: String = cliclack::input("What is the name of your project?")
        .placeholder(DEFAULT_PROJECT_NAME)
        .default_input(DEFAULT_PROJECT_NAME)
        .validate(|input: &String| answers::validate_project_name(input))
        .interact()?;

    Ok(name.trim().to_string())
}

fn ask_directory(args: &CreateArgs, project_name: &str) -> Result<PathBuf> {
    if let Some(dir) = &args.directory {
        answers::validate_target_dir(dir).map_err(anyhow::Error::msg)?;
        cliclack::log::info(format!("Using directory: {}", dir.display()))?;
        return Ok(dir.clone());
    }

    let default_dir = format!("./{}", project_name);
    if args.yes {
        let dir = PathBuf::from(&default_dir);
        answers::validate_target_dir(&dir).map_err(anyhow::Error::msg)?;
        return Ok(dir);
    }

    let input: String = cliclack::input("Where do you want to create the project?")
        .placeholder(&default_dir)
        .default_input(&default_dir)
        .validate(|input: &String| answers::validate_target_dir(Path::new(input.trim())))
        .interact()?;

    Ok(PathBuf::from(input.trim()))
}

fn ask_author(args: &CreateArgs) -> Result<String> {
    if let Some(author) = &args.author {
        answers::validate_author(author).map_err(anyhow::Error::msg)?;
        cliclack::log::info(format!("Author: {}", author.trim()))?;
        return Ok(author.trim().to_string());
    }
    if args.yes {
        return Ok(DEFAULT_AUTHOR.to_string());
    }

    let author: String = cliclack::input("Who is the author of the project?")
        .placeholder(DEFAULT_AUTHOR)
        .default_input(DEFAULT_AUTHOR)
        .validate(|input: &String| answers::validate_author(input))
        .interact()?;

    Ok(author.trim().to_string())
}

async fn ask_template(source: &TemplateSource, args: &CreateArgs) -> Result<String> {
    if let Some(template) = &args.template {
        if TemplateKind::from_name(template).is_none() {
            cliclack::log::warning(format!("Unknown template: {}", template))?;
        }
        return Ok(template.clone());
    }
    if args.yes {
        return Ok(TemplateKind::Simple.display_name().to_string());
    }

    let mut select = cliclack::select("Which template do you want to use?");
    for kind in TemplateKind::ALL {
        let hint = match source.manifest(kind).await {
            Ok(manifest) => manifest.description,
            Err(_) => String::new(),
        };
        select = select.item(kind, kind.display_name(), hint);
    }

    let kind: TemplateKind = select.initial_value(TemplateKind::Simple).interact()?;
    Ok(kind.display_name().to_string())
}

fn ask_install(tool: &ToolManager, args: &CreateArgs) -> Result<bool> {
    if let Some(value) = args.install_servemon {
        return Ok(value);
    }
    if args.yes {
        return Ok(false);
    }

    let installed = tool.get_version();
    if let Some(version) = &installed {
        cliclack::log::info(format!(
            "{} already installed ({})",
            tool.config().display_name,
            version
        ))?;
    }

    let install = cliclack::confirm(format!(
        "Install {} globally? ({})",
        tool.config().display_name,
        tool.config().docs_url
    ))
    .initial_value(installed.is_none())
    .interact()?;

    Ok(install)
}

fn check_package_manager(answers: &AnswerSet) -> Result<()> {
    let Some(manager) = answers.package_manager_kind() else {
        return Ok(());
    };

    let node = check::check_node();
    let info = check::check_package_manager(manager);
    if node.available && info.available {
        cliclack::log::success(format!(
            "Detected runtimes: {}, {}",
            node.summary(),
            info.summary()
        ))?;
    } else {
        cliclack::log::warning(format!(
            "Installation will likely fail: {}, {}",
            node.summary(),
            info.summary()
        ))?;
    }

    Ok(())
}

fn print_report(report: &InitReport) -> Result<()> {
    for entry in report.steps() {
        match &entry.outcome {
            StepOutcome::Done(detail) => {
                cliclack::log::success(format!("{}: {}", entry.step, detail))?
            }
            StepOutcome::Skipped(reason) => {
                cliclack::log::remark(format!("{}: skipped ({})", entry.step, reason))?
            }
            StepOutcome::Warning(message) => {
                cliclack::log::warning(format!("{}: {}", entry.step, message))?
            }
            StepOutcome::Failed(error) => {
                cliclack::log::error(format!("{}: {}", entry.step, error))?
            }
        }
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, answers: &AnswerSet) -> Result<()> {
    let steps = config.next_steps(&answers.target_dir, answers);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_args() -> CreateArgs {
        CreateArgs {
            yes: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_name_flag_is_rejected() {
        let args = CreateArgs {
            name: Some("  ".into()),
            ..Default::default()
        };
        let err = ask_project_name(&args).unwrap_err();
        assert!(err.to_string().contains("Project name cannot be empty"));
    }

    #[test]
    fn test_blank_author_flag_is_rejected() {
        let args = CreateArgs {
            author: Some(String::new()),
            ..Default::default()
        };
        assert!(ask_author(&args).is_err());
    }

    #[test]
    fn test_existing_directory_flag_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let args = CreateArgs {
            directory: Some(tmp.path().to_path_buf()),
            ..Default::default()
        };

        let err = ask_directory(&args, "site").unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_yes_uses_default_name_and_author() {
        assert_eq!(ask_project_name(&yes_args()).unwrap(), DEFAULT_PROJECT_NAME);
        assert_eq!(ask_author(&yes_args()).unwrap(), DEFAULT_AUTHOR);
    }

    #[test]
    fn test_yes_directory_defaults_to_project_name() {
        let dir = ask_directory(&yes_args(), "csw-unused-project-3b9d").unwrap();
        assert_eq!(dir, PathBuf::from("./csw-unused-project-3b9d"));
    }

    #[tokio::test]
    async fn test_yes_uses_simple_template() {
        let template = ask_template(&TemplateSource::Bundled, &yes_args())
            .await
            .unwrap();
        assert_eq!(template, "Simple");
    }

    #[test]
    fn test_yes_skips_install() {
        assert!(!ask_install(&servemon_tool(), &yes_args()).unwrap());
    }
}
