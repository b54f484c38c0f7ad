use gemini_client::{Config, GeminiClient, GenerationClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: expects GEMINI_API_KEY in env
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let client = GeminiClient::new(cfg)?;
    match client.generate("Suggest one stretch for tight hamstrings.").await {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("no result: {e}"),
    }
    Ok(())
}
