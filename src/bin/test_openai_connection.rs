use std::time::Instant;

use prepcoach::config::AppConfig;
use prepcoach::generation::{GenerationRequest, OpenAiClient, TextGenerator};

#[tokio::main]
async fn main() {
    env_logger::init();

    println!("🧪 Testing OpenAI connection...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    println!("📊 Provider Configuration:");
    println!("  Model: {}", config.model);
    println!("  Base URL: {}", config.base_url);
    println!("  Timeout: {}s", config.request_timeout_secs);
    println!("  API key: ***set***");

    let client = OpenAiClient::new(&config);
    let request = GenerationRequest {
        system: "You are a connectivity check.".to_string(),
        user: "Reply with the single word: ok".to_string(),
        temperature: 0.0,
        max_tokens: 10,
    };

    println!("\n🔌 Sending a minimal completion request...");
    let started = Instant::now();
    match client.generate(request).await {
        Ok(reply) => {
            println!(
                "✅ Provider replied in {:?}: {}",
                started.elapsed(),
                reply.trim()
            );
            println!("\n✅ OpenAI connection test completed!");
        }
        Err(e) => {
            println!("❌ Completion request failed: {}", e);
            println!("\n💡 Possible solutions:");
            println!("  1. Check OPENAI_API_KEY is valid");
            println!("  2. Verify network access to {}", config.base_url);
            println!("  3. Raise OPENAI_TIMEOUT_SECS for slow networks");
            std::process::exit(1);
        }
    }
}
