//! Sentiment Dashboard
//!
//! Command-line front end for the sentiment-analysis service.

use clap::{Parser, Subcommand};
use sentiment_dashboard::{
    chart::SvgCanvas,
    config::Config,
    page::{Page, Region},
    types::BatchFile,
    Dashboard, HttpAnalysisClient,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sentiment-dashboard")]
#[command(about = "Analyze comment sentiment with a remote analysis service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (defaults to config.toml or ~/.config/sentiment-dashboard/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Render in dark mode
    #[arg(long)]
    dark: bool,

    /// Write the rendered page to this file after the command
    #[arg(long)]
    html: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single comment
    Analyze {
        /// Comment text
        text: String,
    },
    /// Load the first sample comment from the service
    Sample,
    /// Upload a file of comments (one per line) for batch analysis
    Batch {
        /// Path to the comments file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    let client = HttpAnalysisClient::new(&config.service)?;
    tracing::info!("Using analysis service at {}", client.base_url());

    let dashboard = Dashboard::new(client, SvgCanvas::new(), Page::new())
        .with_top_items(config.display.top_items);
    dashboard.set_dark_mode(config.display.dark_mode || cli.dark);
    dashboard.initialize();

    match cli.command {
        Commands::Analyze { text } => analyze(&dashboard, &text).await,
        Commands::Sample => sample(&dashboard).await,
        Commands::Batch { file } => batch(&dashboard, file).await?,
    }

    if let Some(path) = cli.html {
        tokio::fs::write(&path, dashboard.render_document()).await?;
        println!("\n📝 Page written to {}", path.display());
    }

    Ok(())
}

async fn analyze(dashboard: &Dashboard<HttpAnalysisClient>, text: &str) {
    if let Err(e) = dashboard.analyze_comment(text).await {
        tracing::debug!("analyze: {}", e);
    }

    println!("\n💬 Comment Analysis\n");
    println!("{}", dashboard.region_text(Region::SingleResult));
}

async fn sample(dashboard: &Dashboard<HttpAnalysisClient>) {
    if let Err(e) = dashboard.load_sample().await {
        tracing::debug!("sample: {}", e);
    }

    println!("\n📄 Sample Comment\n");
    println!("{}", dashboard.comment_box());
}

async fn batch(dashboard: &Dashboard<HttpAnalysisClient>, path: PathBuf) -> anyhow::Result<()> {
    let file = BatchFile::read(&path).await?;
    let succeeded = dashboard.analyze_batch(Some(&file)).await.is_ok();

    println!("\n📊 Batch Analysis\n");
    println!("{}", dashboard.region_text(Region::BatchResult));

    if succeeded {
        println!("\n{}", dashboard.region_text(Region::SummaryStats));
        println!("\nTop comments:");
        println!("{}", dashboard.region_text(Region::TopList));
    }

    Ok(())
}
