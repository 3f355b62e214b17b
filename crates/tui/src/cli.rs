use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::model::{Importance, Partition};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "taskboard",
    version,
    about = "Pending and completed tasks on a keyboard-driven drag-and-drop board.",
    after_help = "Examples:\n  taskboard             Open the board (same as `taskboard board`)\n  taskboard --empty     Start without the sample tasks\n  taskboard list --pending --json\n  taskboard stats"
)]
pub struct Cli {
    /// Directory for the log file (defaults to a platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Tracing filter for the log file (e.g. "info", "debug", or full directives)
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    /// Start from an empty board instead of the sample tasks
    #[arg(long, global = true)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Open the interactive board (default command)
    Board,
    /// Print the tasks of one or both groups in board order
    List(ListArgs),
    /// Print task counts and completion progress
    Stats(StatsArgs),
}

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("group").args(["pending", "completed"])))]
pub struct ListArgs {
    /// Only pending tasks
    #[arg(long)]
    pub pending: bool,

    /// Only completed tasks
    #[arg(long)]
    pub completed: bool,

    /// Only tasks of this importance
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub importance: Option<Importance>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn partitions(&self) -> Vec<Partition> {
        if self.pending {
            vec![Partition::Pending]
        } else if self.completed {
            vec![Partition::Completed]
        } else {
            Partition::ALL.to_vec()
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}
