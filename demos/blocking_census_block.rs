//! Look up the census block and broadband speed summary for a point.
//!
//! Run:
//! `cargo run --example blocking_census_block -- 37.4 -122.1`

use fcc_client::{ApiClient, Lookup};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let latitude = args.next().unwrap_or_else(|| "37.4".to_owned());
    let longitude = args.next().unwrap_or_else(|| "-122.1".to_owned());

    let client = ApiClient::new()?;

    match client.find_census_block(latitude.as_str(), longitude.as_str()) {
        Lookup::Found(block) => println!("{}", serde_json::to_string_pretty(&block)?),
        Lookup::Empty => println!("no census block at {latitude},{longitude}"),
        Lookup::Unavailable => println!("census block service unavailable"),
    }

    let speed = client.find_speed_test(latitude.as_str(), longitude.as_str());
    println!("{}", serde_json::to_string_pretty(&speed)?);
    Ok(())
}
