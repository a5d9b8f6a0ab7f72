//! Fetch the financial institutions' holiday calendar for a year and export
//! it as CSV.
//!
//! Run with:
//!
//! ```sh
//! BOT_API_TOKEN=your_token cargo run --example holiday_calendar -- 2025
//! ```

use botstat::BankOfThailand;
use botstat::rest::financial_holidays;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let year = std::env::args().nth(1).unwrap_or_else(|| "2025".to_string());
    let token = std::env::var("BOT_API_TOKEN")?;
    let client = BankOfThailand::default().with_token(token);

    let holidays = financial_holidays::list(&client, year.as_str()).get().await?;
    println!("{} holidays in {year}", holidays.count());

    let path = format!("holidays_{year}.csv");
    holidays.to_csv_file(&path)?;
    println!("wrote {path}");

    Ok(())
}
