use auction_client::prelude::*;
use std::env;

/// Resolves a path through the router and, for an item page, loads the item,
/// its bids and its questions
///
/// The session token is read from local storage (`AUCTION_LOCAL_STORAGE`); when
/// a bid amount is given as second argument, a bid is placed with it.
///
/// Run with: cargo run --bin item_detail -- /item/42 150
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/item/1".to_string());
    let amount = args.next().and_then(|a| a.parse::<u64>().ok());

    let mut router = Router::new();
    let view = router.push(&path)?;
    info!("{} resolved to {}", path, view);

    let View::ItemDetail { id } = view else {
        info!("Nothing to load for {}", view);
        return Ok(());
    };

    let client = Client::from_env()?;
    let item = client.get_item(&id).await?;
    info!("Item: {}", item);

    let bids = client.get_bid_history(&id).await?;
    info!("Bids: {}", bids);

    let questions: Vec<Question> = decode(client.get_questions(&id).await?)?;
    for question in &questions {
        info!(
            "Q: {} / A: {}",
            question.question_text.as_deref().unwrap_or_default(),
            question.answer_text.as_deref().unwrap_or("(unanswered)")
        );
    }

    if let Some(amount) = amount {
        let storage = LocalStorage::from_config(&Config::new());
        let token = storage.session_token()?;
        match client.place_bid(&id, amount, token.as_ref()).await {
            Ok(bid) => info!("Bid placed: {}", bid),
            Err(e) => warn!("Bid refused: {}", e),
        }
    }

    Ok(())
}
