use clap::Parser;
use csv_adapter::{CsvWriterAdapter, DEFAULT_OUTPUT_FILE};
use surf_core::application::SurfServiceImpl;
use surf_core::domain::{ApiKey, VideoRecord};
use surf_core::plan::{CollectionPlan, DEFAULT_REGION};
use surf_core::ports::{RecordWriter, Result, ThreadPause, VideoApi};
use surf_core::utils::{clip, format_timestamp_to_local};
use tracing::{error, Level};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};
use youtube_adapter::{YouTubeApiClient, DEFAULT_BASE_URL};

const PREVIEW_ROWS: usize = 5;

/// CLI tool to collect trending, searched and category videos into a CSV file
#[derive(Parser, Debug)]
#[command(name = "yt-surf")]
#[command(about = "Surfs the YouTube Data API and saves a deduplicated table of videos as CSV")]
struct Cli {
    /// YouTube Data API key
    #[arg(long = "api-key", env = "YT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Path where the CSV file will be written
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_FILE)]
    output: String,

    /// Region code for the trending chart
    #[arg(long = "region", default_value = DEFAULT_REGION)]
    region: String,

    /// API endpoint root
    #[arg(long = "base-url", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Debug logging
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,

    /// Errors only
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() {
    // .env must be loaded before clap reads YT_API_KEY
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        error!("surf failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    println!("Starting YouTube data surfing...");

    // An absent key is passed through so the first API call reports it
    let key = ApiKey::new(cli.api_key.clone().unwrap_or_default());

    // Instantiate concrete implementations of secondary adapters
    let video_api: Box<dyn VideoApi> = Box::new(YouTubeApiClient::with_base_url(&cli.base_url)?);
    let record_writer: Box<dyn RecordWriter> = Box::new(CsvWriterAdapter::new(&cli.output));

    let service = SurfServiceImpl::new(
        video_api,
        record_writer,
        Box::new(ThreadPause),
        CollectionPlan::standard(&cli.region),
    );

    let records = service.collect(&key)?;
    println!("Collected {} unique videos", records.len());
    print_preview(&records);

    service.export(&records)?;
    println!("Data saved to {}", cli.output);
    Ok(())
}

fn print_preview(records: &[VideoRecord]) {
    if records.is_empty() {
        return;
    }
    println!(
        "{:<12} {:<40} {:<24} {:<26} {:>12} {:>10}",
        "videoId", "title", "channelTitle", "publishedAt", "viewCount", "likeCount"
    );
    for record in records.iter().take(PREVIEW_ROWS) {
        println!(
            "{:<12} {:<40} {:<24} {:<26} {:>12} {:>10}",
            record.video_id,
            clip(&record.title, 40),
            clip(&record.channel_title, 24),
            format_timestamp_to_local(&record.published_at),
            record.view_count,
            record.like_count,
        );
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .with_level(verbose)
                .without_time(),
        )
        .init();
}
