use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tripmate_sms::{Credentials, DeliveryClient};

fn required(name: &str) -> io::Result<String> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_uri = required("TRIPMATE_BASE_URI")?;
    let credentials = Credentials::new(
        required("TRIPMATE_USERNAME")?,
        required("TRIPMATE_PASSWORD")?,
    )?;
    let phone = required("TRIPMATE_PHONE")?;
    let incident_id = required("TRIPMATE_INCIDENT_ID")?;
    let activity_code = required("TRIPMATE_ACTIVITY_CODE")?;
    let event_date = match std::env::var("TRIPMATE_EVENT_DATE") {
        Ok(value) => value.parse::<i64>()?,
        Err(_) => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64,
    };

    let mut client = DeliveryClient::builder(base_uri, credentials).build()?;
    match client
        .deliver(&phone, &incident_id, &activity_code, event_date)
        .await?
    {
        Some(result) => println!("delivered: {}", result.as_json()),
        None => println!("skipped: {phone} is not a deliverable number"),
    }

    Ok(())
}
