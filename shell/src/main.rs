use clap::Parser;
use food_finder_core::{application::create_service, domain::common::FoodFinderConfig};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::{application::terminal::Terminal, args::Args};

mod application;
mod args;

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if args.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args);

    let config = FoodFinderConfig::from(args);
    let service = create_service(config)?;

    let mut terminal = Terminal::new(service);
    terminal.run(BufReader::new(tokio::io::stdin())).await
}
