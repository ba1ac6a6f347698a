//! CLI argument definitions

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::automaton::{StateId, TableLayout};

/// Options shared by every binary.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Arguments of an acceptability check.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// First word: symbols separated by any non-digit characters
    pub word1: String,

    /// Second word: symbols separated by any non-digit characters
    pub word2: String,

    /// Automaton to decide against
    #[command(flatten)]
    pub source: AutomatonArgs,
}

/// Where to load the automaton from.
#[derive(Args, Debug, Clone, Default)]
pub struct AutomatonArgs {
    /// Automaton description file
    #[arg(short, long)]
    pub automaton: Option<PathBuf>,

    /// Transition table layout of text descriptions (state-major, legacy)
    #[arg(short, long)]
    pub layout: Option<TableLayout>,

    /// Serialization format (auto-detected if not specified)
    #[arg(short = 'f', long)]
    pub format: Option<SerializationFormat>,
}

/// `dfa-reach WORD1 WORD2`
#[derive(Parser, Debug)]
#[command(name = "dfa-reach")]
#[command(about = "Decide whether two words are acceptable for a DFA")]
#[command(version)]
pub struct ReachCli {
    /// Words and automaton of the check
    #[command(flatten)]
    pub check: CheckArgs,

    /// Config and verbosity options
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// `dfa-tool COMMAND`
#[derive(Parser, Debug)]
#[command(name = "dfa-tool")]
#[command(about = "Inspect, query and convert deterministic finite automata")]
#[command(version)]
pub struct Cli {
    /// Config and verbosity options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands of `dfa-tool`
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decide whether two words are acceptable
    Check(CheckArgs),

    /// Test whether TARGET is reachable from SOURCE, or list every state
    /// reachable from SOURCE when TARGET is omitted
    Reach {
        /// Source state
        source: StateId,

        /// Target state
        target: Option<StateId>,

        /// Automaton to query
        #[command(flatten)]
        automaton: AutomatonArgs,
    },

    /// Display automaton information
    Info {
        /// Automaton to describe
        #[command(flatten)]
        automaton: AutomatonArgs,
    },

    /// Convert an automaton between formats
    Convert {
        /// Input automaton file
        input: PathBuf,

        /// Output automaton file
        output: PathBuf,

        /// Input format (auto-detected if not specified)
        #[arg(long)]
        from_format: Option<SerializationFormat>,

        /// Output format (derived from the output extension if not specified)
        #[arg(long)]
        to_format: Option<SerializationFormat>,

        /// Transition table layout of a text input
        #[arg(short, long)]
        layout: Option<TableLayout>,
    },

    /// Show or update user settings
    Settings {
        /// Set default automaton path
        #[arg(long)]
        set_automaton: Option<PathBuf>,

        /// Set default table layout
        #[arg(long)]
        set_layout: Option<TableLayout>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// On-disk encoding of an automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializationFormat {
    /// Numeric description format
    Text,
    /// Bincode binary format
    Bincode,
    /// JSON format
    Json,
}

impl std::fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Bincode => write!(f, "bincode"),
            Self::Json => write!(f, "json"),
        }
    }
}
