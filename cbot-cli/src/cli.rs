//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cbot")]
#[command(about = "Clinic chat assistant CLI: chat, demo, analyze, greet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for reply phrase selection (overrides CBOT_RNG_SEED).
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// JSON snapshot of conversation contexts (overrides CBOT_SNAPSHOT_PATH).
    #[arg(long, global = true)]
    pub snapshot: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat on stdin/stdout as one customer; `/quit` ends the session.
    Chat {
        #[arg(short, long)]
        customer: Option<String>,
    },
    /// Run a scripted six-turn consultation and print the report.
    Demo,
    /// Print emotion/intent insights for TEXT as JSON.
    Analyze { text: String },
    /// Print the personalized greeting for a customer.
    Greet {
        #[arg(short, long)]
        customer: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cbot", "chat", "--customer", "c9", "--seed", "3"]).unwrap();
        assert_eq!(cli.seed, Some(3));
        assert!(matches!(cli.command, Commands::Chat { customer: Some(ref c) } if c == "c9"));
    }

    #[test]
    fn analyze_takes_positional_text() {
        let cli = Cli::try_parse_from(["cbot", "analyze", "아우 질만 들었네"]).unwrap();
        assert!(matches!(cli.command, Commands::Analyze { ref text } if text == "아우 질만 들었네"));
        assert!(cli.snapshot.is_none());
    }
}
