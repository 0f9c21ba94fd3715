use std::{path::PathBuf, sync::Arc};

use clap::{ArgAction, Parser};
use log::{debug, info};

use github_stars_backup::{
    ConcurrentCrawler, DEFAULT_MAX_IN_FLIGHT, GITHUB_API_ENDPOINT, HttpStarsFetcher,
    SequentialCrawler, StarsCrawler, StarsPersister, StdResult, Username, YamlStarsPersister,
};

/// Command line arguments for the GitHub stars backup
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GitHub username whose starred repositories are backed up
    #[arg(short, long)]
    username: String,

    /// Directory where the backup is saved (defaults to the working directory)
    #[arg(short = 'p', long)]
    save_path: Option<PathBuf>,

    /// Maximum number of starred repositories to back up, rounded up to a page boundary
    #[arg(short, long, default_value_t = 100)]
    max_repositories: u32,

    /// Fetch the pages concurrently
    #[arg(short = 'g', long, default_value_t = true, action = ArgAction::Set)]
    concurrent: bool,

    /// Number of repositories fetched per request
    #[arg(long, default_value_t = 30)]
    per_page: u16,

    /// Maximum number of requests in flight when fetching concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_IN_FLIGHT)]
    max_in_flight: usize,

    /// GitHub REST API endpoint
    #[arg(long, env = "GITHUB_API_ENDPOINT", default_value = GITHUB_API_ENDPOINT)]
    endpoint: String,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");
    info!("Starting GitHub stars backup for {}", args.username);

    let crawler = build_crawler(&args)?;
    let collection = crawler
        .crawl(&Username::new(&args.username), args.max_repositories)
        .await?;
    info!("Crawling completed");

    let persister = YamlStarsPersister::new(args.save_path.as_deref());
    let repositories = collection.into_repositories();
    let total_persisted = persister.persist(&repositories).await?;

    println!("You successfully backed up {total_persisted} starred repos");

    Ok(())
}

fn build_crawler(args: &Args) -> StdResult<Arc<dyn StarsCrawler>> {
    let fetcher = Arc::new(HttpStarsFetcher::try_new(&args.endpoint)?);

    let crawler: Arc<dyn StarsCrawler> = if args.concurrent {
        Arc::new(ConcurrentCrawler::new(
            fetcher,
            args.per_page,
            args.max_in_flight,
        ))
    } else {
        Arc::new(SequentialCrawler::new(fetcher, args.per_page))
    };

    Ok(crawler)
}
