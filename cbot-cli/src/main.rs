//! cbot CLI: chat with the clinic assistant, run the scripted demo, analyze a message, greet.

use anyhow::{Context, Result};
use cbot_cli::{
    build_chain, build_tracker, persist, run_demo, run_turn, AppConfig, Cli, Commands,
};
use clap::Parser;
use emotion::generate_insights;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

const QUIT_COMMANDS: &[&str] = &["/quit", "/exit"];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.seed, cli.snapshot)?;
    config.validate()?;
    cbot_core::init_tracing(config.log_file())
        .with_context(|| format!("Init tracing with log file {}", config.log_file()))?;

    match cli.command {
        Commands::Chat { customer } => {
            let customer_id = customer.unwrap_or_else(|| config.default_customer_id().to_string());
            handle_chat(&config, &customer_id).await
        }
        Commands::Demo => handle_demo(&config).await,
        Commands::Analyze { text } => {
            let insights = generate_insights(&text);
            println!(
                "{}",
                serde_json::to_string_pretty(&insights).context("Serialize insights")?
            );
            Ok(())
        }
        Commands::Greet { customer } => {
            let customer_id = customer.unwrap_or_else(|| config.default_customer_id().to_string());
            let tracker = build_tracker(&config)?;
            println!("{}", tracker.greeting(&customer_id).await);
            Ok(())
        }
    }
}

async fn handle_chat(config: &AppConfig, customer_id: &str) -> Result<()> {
    let tracker = build_tracker(config)?;
    let chain = build_chain(&tracker);

    println!("🤖 {}", tracker.greeting(customer_id).await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Read stdin")? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&text) {
            break;
        }
        match run_turn(&chain, customer_id, text).await {
            Ok(Some(reply)) => println!("🤖 {reply}"),
            Ok(None) => {}
            Err(e) => warn!(customer_id = %customer_id, error = %e, "step: turn failed"),
        }
    }

    println!("{}", tracker.report(customer_id).await);
    persist(config, &tracker).await
}

async fn handle_demo(config: &AppConfig) -> Result<()> {
    let tracker = build_tracker(config)?;
    let chain = build_chain(&tracker);
    let customer_id = config.default_customer_id();

    let (transcript, report) = run_demo(&chain, &tracker, customer_id).await?;
    for (i, turn) in transcript.iter().enumerate() {
        println!("\n📝 {}번째 대화", i + 1);
        println!("👤 고객: {}", turn.customer);
        if let Some(reply) = &turn.assistant {
            println!("🤖 상담사: {reply}");
        }
    }
    println!("\n{report}");

    persist(config, &tracker).await
}
