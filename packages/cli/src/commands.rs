use anyhow::{bail, Context};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use themeloom_common::filesystem::{read_file, write_file};
use themeloom_compiler_react::{generate_components, GenerateOptions};
use themeloom_compiler_theme::process_theme_content;
use themeloom_parser::parse_components;

use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::scheduler::BuildScheduler;
use crate::watcher::{event_touches, FileWatcher};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Config file path, defaults to themeloom.config.json in the current directory
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Config file path, defaults to themeloom.config.json in the current directory
    #[arg(long)]
    config: Option<PathBuf>,
}

pub fn init(args: InitArgs, cwd: &str) -> anyhow::Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        bail!(
            "{} already exists, pass --force to overwrite",
            config_path.display()
        );
    }

    let content = serde_json::to_string_pretty(&Config::default())?;
    write_file(&config_path, &content)
        .with_context(|| format!("cannot write {}", config_path.display()))?;

    println!("{} {}", "Created".green().bold(), config_path.display());

    Ok(())
}

pub fn build(args: BuildArgs, cwd: &str) -> anyhow::Result<()> {
    let config = Config::load(cwd, args.config.as_deref())?;
    run_pass(&config, cwd)
}

pub fn watch(args: WatchArgs, cwd: &str) -> anyhow::Result<()> {
    let config = Config::load(cwd, args.config.as_deref())?;
    let theme_path = config.theme_path(cwd);

    // The startup pass surfaces errors but does not kill the session, so the
    // watcher recovers as soon as the theme parses again.
    if let Err(err) = run_pass(&config, cwd) {
        eprintln!("{} {}", "Error:".red().bold(), err);
    }

    let watcher = FileWatcher::new(&theme_path)?;
    let mut scheduler = BuildScheduler::new();

    println!("{} {}", "Watching".green().bold(), theme_path.display());

    while let Some(event) = watcher.next_event() {
        if !event_touches(&event, &theme_path) {
            continue;
        }

        if !scheduler.request() {
            continue;
        }

        loop {
            if let Err(err) = run_pass(&config, cwd) {
                eprintln!("{} {}", "Error:".red().bold(), err);
            }

            // Edits that landed mid-pass coalesce into one follow-up run.
            while let Some(event) = watcher.try_next_event() {
                if event_touches(&event, &theme_path) {
                    scheduler.request();
                }
            }

            if !scheduler.finish() {
                break;
            }
        }
    }

    Ok(())
}

/// One generation pass: resolve the theme, then emit component files when
/// configured. Component failures are reported per file and never roll back
/// the already-written theme output.
pub(crate) fn run_pass(config: &Config, cwd: &str) -> anyhow::Result<()> {
    let theme_path = config.theme_path(cwd);
    let output_path = config.output_path(cwd);

    let content = read_file(&theme_path)
        .with_context(|| format!("cannot read {}", theme_path.display()))?;

    let resolved = process_theme_content(&content);

    write_file(&output_path, &resolved)
        .with_context(|| format!("cannot write {}", output_path.display()))?;

    println!("{} {}", "Updated".green().bold(), output_path.display());

    let Some(components_config) = &config.components else {
        return Ok(());
    };

    let out_dir = PathBuf::from(cwd).join(&components_config.out_dir);
    let options = GenerateOptions {
        stories: components_config.stories,
    };

    match parse_components(&content) {
        Ok(components) => {
            for file in generate_components(&components, &options) {
                let path = out_dir.join(&file.path);
                match write_file(&path, &file.content) {
                    Ok(()) => println!("{} {}", "Updated".green().bold(), path.display()),
                    Err(err) => {
                        eprintln!("{} {}: {}", "Failed".red().bold(), path.display(), err)
                    }
                }
            }
        }
        Err(err) => {
            eprintln!(
                "{} {}",
                "Skipping component generation:".yellow().bold(),
                err
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const THEME_SOURCE: &str = r#"
const theme = createTheme({
  components: {
    Button: Button.extend({
      classNames: {
        /**
         * @component Button
         * @props children|fullWidth
         * @target root @variant primary [ bg-blue-500 text-white ]
         */
      },
    }),
  },
});

export default theme;
"#;

    fn write_fixture(dir: &std::path::Path) -> Config {
        fs::write(dir.join("theme.ts"), THEME_SOURCE).unwrap();
        Config {
            theme_path: "theme.ts".to_string(),
            output_path: "theme.gen.ts".to_string(),
            components: Some(crate::config::ComponentsConfig {
                out_dir: "components".to_string(),
                stories: true,
            }),
        }
    }

    #[test]
    fn test_run_pass_writes_theme_and_components() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let config = write_fixture(dir.path());

        run_pass(&config, &cwd).unwrap();

        let resolved = fs::read_to_string(dir.path().join("theme.gen.ts")).unwrap();
        assert!(resolved.contains("[&[data-variant='primary']]:bg-blue-500"));
        assert!(!resolved.contains("@component"));

        assert!(dir
            .path()
            .join("components/with-restricted-props.tsx")
            .exists());
        assert!(dir.path().join("components/Button/Button.tsx").exists());
        assert!(dir
            .path()
            .join("components/Button/Button.stories.tsx")
            .exists());
    }

    #[test]
    fn test_run_pass_skips_stories_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let mut config = write_fixture(dir.path());
        config.components.as_mut().unwrap().stories = false;

        run_pass(&config, &cwd).unwrap();

        assert!(dir.path().join("components/Button/Button.tsx").exists());
        assert!(!dir
            .path()
            .join("components/Button/Button.stories.tsx")
            .exists());
    }

    #[test]
    fn test_run_pass_without_components_config_only_writes_theme() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let mut config = write_fixture(dir.path());
        config.components = None;

        run_pass(&config, &cwd).unwrap();

        assert!(dir.path().join("theme.gen.ts").exists());
        assert!(!dir.path().join("components").exists());
    }

    #[test]
    fn test_run_pass_fails_when_theme_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let config = Config::default();

        assert!(run_pass(&config, &cwd).is_err());
    }
}
