use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use brewrec_api::RestApi;
use brewrec_core::{Recommender, SelfPolicy};
use brewrec_data::{load_catalog, load_matrix, EmbeddingTable};

/// Festival beer catalog and recommendation engine
#[derive(Parser, Debug)]
#[command(name = "brewrec")]
#[command(about = "Filter festival beers and get similarity-based recommendations", long_about = None)]
struct Args {
    /// Path to the festival beers CSV
    #[arg(long, default_value = "data/festival_beers.csv")]
    beers: PathBuf,

    /// Path to the precomputed similarity matrix CSV
    #[arg(long, default_value = "data/similarity_matrix.csv")]
    similarity: PathBuf,

    /// Path to the precomputed 2-D embedding CSV
    #[arg(long)]
    embedding: Option<PathBuf>,

    /// HTTP API port
    #[arg(long, default_value_t = 8050)]
    http_port: u16,

    /// Rank the queried beer alongside its own candidates
    #[arg(long)]
    include_self: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting brewrec v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.beers);
    info!("Similarity matrix: {:?}", args.similarity);

    let catalog = Arc::new(load_catalog(&args.beers)?);
    let matrix = Arc::new(load_matrix(&args.similarity)?);
    let embedding = match &args.embedding {
        Some(path) => Some(Arc::new(EmbeddingTable::load(path, &catalog)?)),
        None => {
            warn!("No embedding supplied; the beer map will not be served");
            None
        }
    };

    let policy = if args.include_self {
        SelfPolicy::Include
    } else {
        SelfPolicy::Exclude
    };
    let recommender = Arc::new(Recommender::new(catalog, matrix, policy)?);
    info!(
        "Recommender ready: {} beers, self policy {:?}",
        recommender.catalog().len(),
        recommender.policy()
    );

    info!("HTTP API: http://localhost:{}/", args.http_port);
    RestApi::start(recommender, embedding, args.http_port).await?;

    info!("Shutting down...");
    Ok(())
}
