//! Fetch daily weighted-average interbank exchange rates and print a
//! summary of the series.
//!
//! Run with:
//!
//! ```sh
//! BOT_API_TOKEN=your_token cargo run --example daily_exchange_rate
//! ```

use botstat::BankOfThailand;
use botstat::rest::exchange_rate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let token = std::env::var("BOT_API_TOKEN")?;
    let client = BankOfThailand::default().with_token(token);

    let response = exchange_rate::daily(&client, "2025-01-01", "2025-01-31")
        .get()
        .await?;

    println!("observations: {}", response.count());
    if let Some((start, end)) = response.date_range() {
        println!("period:       {start} to {end}");
    }
    println!("average:      {:.4}", response.average("mid_rate"));
    println!("min/max:      {:?} / {:?}", response.min("mid_rate"), response.max("mid_rate"));
    println!("volatility:   {:.4}", response.volatility("mid_rate"));
    println!("trend:        {:?}", response.trend("mid_rate"));

    if !response.is_complete() {
        println!("missing days: {:?}", response.missing_dates());
    }

    if let Some(change) = response.change("mid_rate") {
        println!(
            "change:       {:+.4} ({:+.4}%)",
            change.absolute, change.percentage
        );
    }

    Ok(())
}
