//! Retrieve command - runs the pipeline for one query and prints the outcome

use clap::Args;

use crate::config::AppConfig;
use crate::domain::{validate_query, RetrievalOutcome, RetrievalResult};
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::HttpClient;

#[derive(Debug, Args)]
pub struct RetrieveArgs {
    /// Question to retrieve context for
    pub query: String,
}

pub async fn run(args: RetrieveArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging);

    let query = validate_query(&args.query, config.chat.max_query_length)?;
    let pipeline = crate::create_pipeline(&config, &HttpClient::new())?;

    let result = pipeline.retrieve_context(&query).await;
    println!("{}", render(&result));

    Ok(())
}

fn render(result: &RetrievalResult) -> String {
    let body = match &result.outcome {
        RetrievalOutcome::Context(text) => text.as_str(),
        RetrievalOutcome::DomainRejected { message } => message.as_str(),
        RetrievalOutcome::Exhausted => "No context found",
    };

    format!("[{}]\n{}", result.stage, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RetrievalStage;

    #[test]
    fn test_render_context() {
        let result = RetrievalResult::context("Walrus stores blobs", RetrievalStage::LocalKnowledge);
        assert_eq!(render(&result), "[local_knowledge]\nWalrus stores blobs");
    }

    #[test]
    fn test_render_exhausted() {
        assert_eq!(
            render(&RetrievalResult::exhausted()),
            "[exhausted]\nNo context found"
        );
    }
}
