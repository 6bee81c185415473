use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use newsbrief::config::Config;
use newsbrief::extract::{
    linguistic::LinguisticPipeline, statistical::RakeExtractor, HybridExtractor, LlmExtractor,
    TopicExtractor,
};
use newsbrief::genai::OpenAiClient;
use newsbrief::store::ArticleStore;
use newsbrief::summarize::Summarizer;

/// Newsbrief: topic extraction and news summarization backend.
///
/// Extracts a search topic from a free-text news query and summarizes
/// fetched articles through an external chat-completion service.
#[derive(Parser)]
#[command(name = "newsbrief", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the topic of a news query
    Extract {
        /// The query, as one or more words. Prompts interactively if omitted.
        query: Vec<String>,

        /// Use the generation service for extraction (falls back to the
        /// statistical extractor on failure)
        #[arg(long)]
        llm: bool,
    },

    /// Summarize all articles currently in the article store
    Summarize {
        /// Domain label to steer the summary (defaults to the store's
        /// interest tag)
        #[arg(long)]
        domain: Option<String>,
    },

    /// Start the HTTP API (/summarize, /answer, /health)
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newsbrief=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { query, llm } => {
            let config = Config::load()?;

            let query = if query.is_empty() {
                read_query_interactively()?
            } else {
                query.join(" ")
            };
            if query.trim().is_empty() {
                anyhow::bail!("Empty query provided");
            }

            let extractor = create_extractor(&config, llm)?;
            let topic = extractor.extract_topic(&query).await;

            info!(topic = %topic, "extracted topic");
            println!("{topic}");
        }

        Commands::Summarize { domain } => {
            let config = Config::load()?;
            config.require_generation()?;
            let store_path = config.require_store()?.to_string();

            let store = newsbrief::store::open_sqlite(&store_path)?;
            let (articles, stored_domain) = store.fetch_articles_and_domain().await?;
            if articles.is_empty() {
                anyhow::bail!(
                    "Article store at {store_path} has no article content to summarize."
                );
            }
            println!("Summarizing {} articles...", articles.len());

            let summarizer = Summarizer::new(Arc::new(OpenAiClient::new(&config)?));
            let domain = domain.or(stored_domain);
            let summary = summarizer
                .summarize(&articles, domain.as_deref(), None)
                .await?;

            println!("\n{}", "Summary".bold());
            println!("{summary}");
        }

        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            // Fatal before binding: the API cannot serve a single request
            // without the generation credential.
            config.require_generation()?;

            let summarizer = Arc::new(Summarizer::new(Arc::new(OpenAiClient::new(&config)?)));
            newsbrief::web::run_server(summarizer, port, &bind).await?;
        }
    }

    Ok(())
}

/// Select the extraction variant. Both verify their startup dependencies
/// here so a misconfigured process fails before accepting input.
fn create_extractor(config: &Config, llm: bool) -> Result<Box<dyn TopicExtractor>> {
    if llm {
        config.require_generation()?;
        info!("Using generation-service topic extractor");
        let client = OpenAiClient::new(config)?;
        Ok(Box::new(LlmExtractor::new(Arc::new(client))))
    } else {
        config.require_lexicon()?;
        info!("Using hybrid linguistic + statistical topic extractor");
        let linguistic = LinguisticPipeline::load(&config.lexicon_path)?;
        Ok(Box::new(HybridExtractor::new(
            linguistic,
            RakeExtractor::default(),
        )))
    }
}

/// Prompt for a query on stdin when none was passed as arguments.
fn read_query_interactively() -> Result<String> {
    print!("Enter your news query: ");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut query = String::new();
    std::io::stdin()
        .read_line(&mut query)
        .context("Failed to read query from stdin")?;
    Ok(query.trim().to_string())
}
