use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{read_tree_file, ts_files, InputData};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completions {
        print_completions(shell);
        return Ok(());
    }
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }
    let tree_file = cli
        .tree_file
        .as_deref()
        .ok_or_else(|| CliError::InvalidArgs("the tree file argument is required".into()))?;

    let joined = _files(tree_file, cli, &settings)?;
    output::paths(&mut io::stdout().lock(), &joined)?;
    Ok(())
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Resolve input from flags and settings, then convert the tree.
///
/// Flags win over configuration.
#[instrument(skip(cli, settings))]
fn _files(tree_file: &Path, cli: &Cli, settings: &Settings) -> CliResult<String> {
    if cli.parent.as_deref().is_some_and(|p| p.trim().is_empty()) {
        return Err(CliError::InvalidArgs("the parent path argument is blank".into()));
    }
    let separator = cli.separator().unwrap_or(settings.separator.as_str());
    let parent = cli.parent.as_deref().or(settings.parent_path.as_deref());

    let tree_input = read_tree_file(tree_file, settings.file_size_limit)?;
    let input = InputData::new(tree_input, parent, separator)?;
    Ok(ts_files(&input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_files_flags_override_settings() {
        let dir = TempDir::new().unwrap();
        let tree = dir.path().join("tree.txt");
        fs::write(&tree, "src/\n  a.rs\n  b.rs\n").unwrap();
        let settings = Settings {
            separator: ",".into(),
            parent_path: Some("ignored".into()),
            ..Settings::default()
        };

        let args = cli(&["treescript-files", "tree.txt", "-s", "--parent", "module"]);
        let joined = _files(&tree, &args, &settings).unwrap();
        assert_eq!(joined, format!("module{0}src/a.rs module{0}src/b.rs", std::path::MAIN_SEPARATOR));
    }

    #[test]
    fn test_files_uses_settings_when_no_flags() {
        let dir = TempDir::new().unwrap();
        let tree = dir.path().join("tree.txt");
        fs::write(&tree, "a.rs\nb.rs\n").unwrap();
        let settings = Settings {
            separator: ",".into(),
            ..Settings::default()
        };

        let joined = _files(&tree, &cli(&["treescript-files", "tree.txt"]), &settings).unwrap();
        assert_eq!(joined, "a.rs,b.rs");
    }

    #[test]
    fn test_files_blank_parent_argument() {
        let dir = TempDir::new().unwrap();
        let tree = dir.path().join("tree.txt");
        fs::write(&tree, "a.rs\n").unwrap();

        let args = cli(&["treescript-files", "tree.txt", "--parent", "  "]);
        let err = _files(&tree, &args, &Settings::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgs(_)));
    }
}
