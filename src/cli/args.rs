//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueHint};

/// Obtains the relative path of all files in a TreeScript
#[derive(Parser, Debug)]
#[command(name = "treescript-files")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("separator").args(["space", "comma", "tab"])))]
pub struct Cli {
    /// The file containing the tree node structure
    #[arg(value_hint = ValueHint::FilePath, required_unless_present_any = ["completions", "show_config"])]
    pub tree_file: Option<PathBuf>,

    /// The parent path to prefix files with
    #[arg(long)]
    pub parent: Option<String>,

    /// Use a space as the element separator
    #[arg(short, long)]
    pub space: bool,

    /// Use a comma as the element separator
    #[arg(short, long)]
    pub comma: bool,

    /// Use a tab as the element separator
    #[arg(short, long)]
    pub tab: bool,

    /// Config file (default: $XDG_CONFIG_HOME/treescript-files/treescript-files.toml)
    #[arg(long, value_hint = ValueHint::FilePath, env = "TREESCRIPT_FILES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug output, repeat for more (-d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print the merged settings as TOML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Separator chosen by flags, if any.
    pub fn separator(&self) -> Option<&'static str> {
        if self.space {
            Some(" ")
        } else if self.tab {
            Some("\t")
        } else if self.comma {
            Some(",")
        } else {
            None
        }
    }
}
