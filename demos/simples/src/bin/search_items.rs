use auction_client::prelude::*;
use prettytable::{Table, row};
use std::env;

/// Searches the auction backend and prints the results as a table
///
/// Configure the backend via `AUCTION_API_BASE_URL` (default: http://localhost:3333).
///
/// Run with: cargo run --bin search_items -- lamp 10
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = env::args().skip(1);
    let query = args.next();
    let limit = args.next().and_then(|l| l.parse::<u32>().ok());

    let client = Client::from_env()?;
    info!("Searching for {:?} (limit {:?})", query, limit);
    let results = client.search_items(query.as_deref(), limit).await?;
    let items: Vec<Item> = decode(results)?;

    let mut table = Table::new();
    table.add_row(row!["ID", "TITLE", "DESCRIPTION"]);
    for item in &items {
        table.add_row(row![
            item.id.map(|id| id.to_string()).unwrap_or_default(),
            item.title.clone().unwrap_or_default(),
            item.description.clone().unwrap_or_default()
        ]);
    }
    table.printstd();
    info!("{} items found", items.len());

    Ok(())
}
