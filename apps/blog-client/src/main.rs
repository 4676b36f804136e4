use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};

mod client;
mod form;

use client::{BlogApiClient, ClientConfig, Generation};
use form::{GenerateForm, Tone};

/// Outlasts the server's worst case of 3 x 300s attempts and their backoff.
const DEFAULT_TIMEOUT_SECS: u64 = 930;

#[derive(Parser)]
#[command(name = "blog-client")]
#[command(about = "Generate blog posts and rate them through the Blogsmith API")]
#[command(version)]
struct Cli {
    /// URL of the blog endpoint
    #[arg(long, env = "BLOG_API_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Request timeout in seconds; the server may spend up to three
    /// 300-second inference attempts plus backoff on one post
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

/// Rating left for a post
#[derive(Args)]
struct RatingArgs {
    /// Rating from 1 to 5
    #[arg(short, long)]
    rating: Option<u8>,
    /// Optional free-text feedback
    #[arg(short, long, requires = "rating")]
    comment: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a blog post from up to five topics
    Generate {
        /// Topic to cover (repeat for more, up to 5)
        #[arg(short, long = "topic", required = true)]
        topics: Vec<String>,
        /// Approximate length of the post
        #[arg(short, long, default_value_t = 500)]
        word_count: u32,
        /// Writing tone
        #[arg(long, value_enum, default_value_t = Tone::Neutral)]
        tone: Tone,
        /// Who the post is written for
        #[arg(short, long, default_value = "general")]
        audience: String,
        /// Rate the post right after it is generated
        #[command(flatten)]
        feedback: RatingArgs,
    },
    /// Rate a previously generated post
    Feedback {
        /// Identifier returned by `generate`
        #[arg(long)]
        blog_id: String,
        #[arg(short, long)]
        rating: u8,
        #[arg(short, long)]
        comment: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let client = connect(cli.endpoint, cli.timeout_secs)?;

    match cli.command {
        Commands::Generate {
            topics,
            word_count,
            tone,
            audience,
            feedback,
        } => {
            let payload = GenerateForm {
                topics,
                word_count,
                tone,
                audience,
            }
            .into_payload()?;
            // Reject a bad rating before spending a generation on it
            let rating = feedback.rating.map(form::check_rating).transpose()?;

            tracing::debug!(topics = payload.topics.len(), "Requesting generation");

            match client.generate(&payload).await? {
                Generation::Completed(body) => {
                    println!("{}\n", body.blog_content);
                    println!("Word count: {}", form::word_count(&body.blog_content));
                    println!("Saved to: {}", body.s3_location);
                    println!("Blog ID: {}", body.blog_id);

                    if let Some(rating) = rating {
                        let payload = form::feedback_payload(&body.blog_id, rating, feedback.comment)?;
                        client.submit_feedback(&payload).await?;
                        println!("Thank you for your feedback!");
                    }
                }
                Generation::Rejected { status, message } => {
                    return Err(rejection(status, message));
                }
            }
        }
        Commands::Feedback {
            blog_id,
            rating,
            comment,
        } => {
            let payload = form::feedback_payload(&blog_id, rating, comment)?;
            client
                .submit_feedback(&payload)
                .await
                .context("Failed to submit feedback. Please try again.")?;
            println!("Thank you for your feedback!");
        }
    }

    Ok(())
}

/// `main` already prints "Error: " ahead of the returned error.
fn rejection(status: u16, message: String) -> anyhow::Error {
    anyhow!("{status} - {message}")
}

/// Build the API client. Without an endpoint nothing is sent.
fn connect(endpoint: Option<String>, timeout_secs: u64) -> Result<BlogApiClient> {
    let endpoint = resolve_endpoint(endpoint)?;
    BlogApiClient::new(ClientConfig {
        endpoint,
        timeout_secs,
    })
}

fn resolve_endpoint(endpoint: Option<String>) -> Result<String> {
    endpoint
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| {
            anyhow!("Configuration error: BLOG_API_ENDPOINT is not set (or pass --endpoint)")
        })
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_endpoint_is_configuration_error() {
        let err = connect(None, DEFAULT_TIMEOUT_SECS).err().unwrap();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_blank_endpoint_is_configuration_error() {
        let err = resolve_endpoint(Some("   ".to_string())).unwrap_err();
        assert!(err.to_string().contains("BLOG_API_ENDPOINT"));
    }

    #[test]
    fn test_endpoint_from_flag() {
        let cli = Cli::try_parse_from([
            "blog-client",
            "--endpoint",
            "http://localhost:8080/api/blog",
            "feedback",
            "--blog-id",
            "b-1",
            "--rating",
            "4",
        ])
        .unwrap();

        // Outlasts three 300s inference attempts on the server
        assert!(cli.timeout_secs > 3 * 300);
        assert_eq!(
            resolve_endpoint(cli.endpoint).unwrap(),
            "http://localhost:8080/api/blog"
        );
    }

    #[test]
    fn test_rejection_message_has_single_prefix() {
        let err = rejection(400, "Failed to generate blog".to_string());
        assert_eq!(err.to_string(), "400 - Failed to generate blog");
    }
}
