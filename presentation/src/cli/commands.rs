//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use nexus_domain::{AudienceMode, PRESET_QUESTIONS};
use std::path::PathBuf;

/// Which description `describe` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AudienceArg {
    /// Warm, jargon-free description for families
    Family,
    /// Technical description for researchers
    Scientist,
}

impl From<AudienceArg> for AudienceMode {
    fn from(arg: AudienceArg) -> Self {
        match arg {
            AudienceArg::Family => AudienceMode::Family,
            AudienceArg::Scientist => AudienceMode::Scientist,
        }
    }
}

/// CLI arguments for cure-nexus
#[derive(Parser, Debug)]
#[command(name = "cure-nexus")]
#[command(author, version, about = "Find and understand medical research projects to fund")]
#[command(long_about = r#"
CureNexus matches what you care about to fundable research projects.

Describe a condition or goal in plain words; a generative AI provider turns it
into search keywords and an optional category. Without a provider credential,
or when the provider fails, a local heuristic is used instead and you still
get results.

Configuration files are loaded from (in priority order):
1. NEXUS_* environment variables
2. --config <path>     Explicit config file
3. ./nexus.toml        Project-level config
4. ~/.config/cure-nexus/config.toml   Global config

The provider credential is read from the env var named by
provider.api_key_env (default: API_KEY).

Example:
  cure-nexus search "I want to fund research for HIE"
  cure-nexus describe p3 --audience scientist
  cure-nexus ask p1 --preset 2
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search projects with a free-text query
    Search {
        /// What you are looking for (words are joined with spaces)
        #[arg(value_name = "QUERY")]
        query: Vec<String>,
    },

    /// Show a project's family or scientist description
    Describe {
        /// Project id (see `projects`)
        project_id: String,

        /// Audience to describe the project for
        #[arg(short, long, value_enum, default_value = "family")]
        audience: AudienceArg,

        /// Ignore any cached description and ask the provider again
        #[arg(long)]
        retry: bool,
    },

    /// Ask one question about a project
    Ask {
        /// Project id (see `projects`)
        project_id: String,

        /// Your question
        #[arg(value_name = "QUESTION", conflicts_with = "preset")]
        question: Option<String>,

        /// Use a preset question instead (1-3, see `suggestions`)
        #[arg(short, long, value_name = "N")]
        preset: Option<usize>,
    },

    /// List every project in the catalog
    Projects,

    /// Show suggested searches and preset questions
    Suggestions,
}

/// Join unquoted query words back into one search text
pub fn join_query(words: &[String]) -> String {
    words.join(" ")
}

/// Look up a preset question by its 1-based number
pub fn preset_question(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|index| PRESET_QUESTIONS.get(index))
        .copied()
}
