//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for tokinfo
#[derive(Parser, Debug)]
#[command(name = "tokinfo")]
#[command(author, version, about = "Two-stage prompt enhancer backed by Gemini")]
#[command(long_about = r#"
tokinfo rewrites a raw prompt into a sharper one in two stages:
1. Analysis: the model picks one technique from your guideline file and
   proposes clarifying questions, each with an example answer
2. Refinement: after you answer, the model rewrites the prompt applying
   that technique and your answers

The prompt may be given inline or as a path to a .txt / .md file.
The enhanced prompt goes to stdout, or to --output when given.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./tokinfo.toml      Project-level config
3. ~/.config/tokinfo/config.toml   Global config

The API key is read from GEMINI_API_KEY (see gemini.api_key_env).

Example:
  tokinfo -p "Explain how transformers work"
  tokinfo -p draft.md -g improved.md
  tokinfo -p notes.txt -m gemini-1.5-pro --guidelines my-guidelines.json
"#)]
pub struct Cli {
    /// Inline prompt text or a path to a .txt / .md file
    #[arg(short, long, value_name = "PROMPT", required_unless_present = "show_config")]
    pub prompt: Option<String>,

    /// Write the enhanced prompt to this file instead of stdout
    #[arg(short = 'g', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Verbosity level (-v = info + progress, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Guideline file to use (overrides guidelines.path)
    #[arg(long, value_name = "PATH")]
    pub guidelines: Option<PathBuf>,

    /// Gemini model to use (overrides gemini.model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Tracing filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether to draw the progress spinner
    pub fn show_progress(&self) -> bool {
        self.verbose > 0
    }
}
