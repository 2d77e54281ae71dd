use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use prepcoach::analysis::Category;
use prepcoach::session::InMemorySessionStore;
use prepcoach::{AnalyzeRequest, AppConfig, InterviewCoach, OpenAiClient};

struct CliArgs {
    text: Option<String>,
    question: Option<String>,
    category: Option<String>,
    user_id: Option<String>,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = CliArgs {
        text: None,
        question: None,
        category: None,
        user_id: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--question" | "-q" => {
                args.question = Some(iter.next().context("--question requires a value")?);
            }
            "--category" | "-c" => {
                args.category = Some(iter.next().context("--category requires a value")?);
            }
            "--user-id" | "-u" => {
                args.user_id = Some(iter.next().context("--user-id requires a value")?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => anyhow::bail!("Unknown flag: {}", arg),
            _ => args.text = Some(arg),
        }
    }

    Ok(args)
}

fn print_usage() {
    println!(
        r#"PrepCoach - analyze an interview practice response

Usage: prepcoach [OPTIONS] [RESPONSE]

Reads the response from the argument, or from stdin when omitted.
Prints the analysis as JSON.

Options:
  -q, --question <TEXT>   The interview question that was asked
  -c, --category <NAME>   general | behavioral | technical | leadership | situational
  -u, --user-id <ID>      Record the session under this user id
  -h, --help              Show this help

Environment:
  OPENAI_API_KEY          Required provider key (also read from .env)
  OPENAI_MODEL            Model name, default gpt-4
  OPENAI_BASE_URL         API base, default https://api.openai.com/v1
  OPENAI_TIMEOUT_SECS     Request timeout, default 30"#
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args = parse_args()?;

    let config = AppConfig::from_env().context("Configuration error")?;
    info!("Using model {} at {}", config.model, config.base_url);

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read response text from stdin")?;
            buffer
        }
    };
    let text = text.trim().to_string();

    let confidence = prepcoach::transcript::estimate_confidence(&text);
    info!("Transcript confidence estimate: {:.2}", confidence);

    let generator = Arc::new(OpenAiClient::new(&config));
    let store = Arc::new(InMemorySessionStore::new());
    let coach = InterviewCoach::new(generator, store);

    let mut request = AnalyzeRequest::new(text);
    if let Some(question) = args.question {
        request = request.with_question(question);
    }
    if let Some(category) = args.category {
        let category = Category::from_str(&category).with_context(|| {
            format!(
                "Unknown category '{}' (expected general, behavioral, technical, leadership, or situational)",
                category
            )
        })?;
        request = request.with_category(category);
    }
    if let Some(user_id) = args.user_id {
        request = request.with_user_id(user_id);
    }

    let response = coach.analyze(request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
