use tokio::io::{AsyncBufReadExt, BufReader};

use travel_planner::config::{API_KEY_VAR, PlannerConfig};
use travel_planner::error::ConfigError;
use travel_planner::planner::DialogueSession;

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "bye"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real env vars still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match PlannerConfig::from_env() {
        Ok(config) => config,
        Err(ConfigError::MissingEnvVar(var)) => {
            eprintln!("Error: {var} not found in environment variables");
            eprintln!("  export {API_KEY_VAR}=gsk_...");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    eprintln!("✈️  Travel Planner v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   Type your answers and press Enter. /reset to start over, quit to exit.\n");

    let mut session = DialogueSession::from_config(&config)?;

    println!("{}", session.start().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("> ");
        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&input.to_lowercase().as_str()) {
            println!("Thank you for using the Travel Planner Bot. Goodbye!");
            break;
        }

        let reply = if input == "/reset" {
            session.reset().await
        } else {
            session.submit(input).await
        };
        println!("\n{reply}\n");
    }

    Ok(())
}
