//! Print license statistics, optionally narrowed to one licensee.
//!
//! Run:
//! `cargo run --example blocking_license_stats -- "Verizon Wireless"`

use fcc_client::ApiClient;
use serde_json::Value;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let common_name = std::env::args().nth(1);
    let client = ApiClient::new()?;

    let statuses = client.get_license_statuses(common_name.as_deref(), Some(10));
    let Some(statuses) = statuses.into_option() else {
        eprintln!("license service unavailable");
        return Ok(());
    };

    for stat in &statuses {
        println!(
            "{:<24} {:>10}",
            stat.get("statDesc").and_then(Value::as_str).unwrap_or("?"),
            stat.get("statCount").and_then(Value::as_str).unwrap_or("?"),
        );
    }

    let renewals = client.get_license_renewals(common_name.as_deref());
    println!("{}", serde_json::to_string_pretty(&renewals)?);
    Ok(())
}
