use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cohort",
    about = "Cohort: student rosters, census bookkeeping and graduation review",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); overrides COHORT_LOG
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Admit the cohort, sort it by gpa and describe every student
    Roster {
        /// Path to a cohort TOML file (built-in cohort when omitted)
        #[arg(long)]
        config: Option<String>,

        /// Promote every stored student's credential while traversing
        #[arg(long)]
        promote: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the graduation review for one student and exit with its status
    Graduate {
        /// Path to a cohort TOML file (built-in cohort when omitted)
        #[arg(long)]
        config: Option<String>,

        /// Student id to review (first configured student when omitted)
        #[arg(long)]
        student: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report census counts across admission, copying and release
    Census {
        /// Path to a cohort TOML file (built-in cohort when omitted)
        #[arg(long)]
        config: Option<String>,

        /// Blank-path id policy: placeholder, generated, or empty (overrides the file)
        #[arg(long)]
        blank_ids: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
