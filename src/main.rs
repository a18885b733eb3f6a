use clap::Parser;
use tracing_subscriber::EnvFilter;

use zendesk_exporter::prompt::prompt_for_limit;
use zendesk_exporter::{Config, ExportPipeline, ZendeskClient};

#[derive(Parser, Debug)]
#[command(name = "zendesk-exporter")]
#[command(version = "0.1.0")]
#[command(about = "Export Zendesk tickets with their comment threads to CSV")]
struct Args {
    /// Maximum number of tickets to export (skips the interactive prompt)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Only export tickets created or updated at or after this time
    #[arg(long)]
    start_time: Option<String>,

    /// Output CSV file (defaults to zendesk_tickets_<timestamp>.csv)
    #[arg(short, long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("zendesk_exporter=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load credentials; fails before any network activity
    let config = Config::from_env()?;

    let limit = match args.limit {
        Some(limit) => Some(limit),
        None => prompt_for_limit()?,
    };

    let client = ZendeskClient::new(&config)?;
    let pipeline = ExportPipeline::new(client);

    let filename = pipeline
        .run(limit, args.start_time.as_deref(), args.output.as_deref())
        .await?;

    println!("Tickets exported to: {}", filename);
    Ok(())
}
