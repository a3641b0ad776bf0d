use std::net::IpAddr;
use std::time::Duration;

use anyhow::Context;
use tracing::debug;

const PUBLIC_IP_URL: &str = "https://api.ipify.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Asks an external echo service for this machine's public address.
pub async fn fetch_public_ip() -> anyhow::Result<IpAddr> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client
        .get(PUBLIC_IP_URL)
        .send()
        .await
        .with_context(|| format!("request to {PUBLIC_IP_URL} failed"))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("{PUBLIC_IP_URL} answered with {status}");
    }

    let body = response.text().await?;
    debug!("Public IP service answered '{}'", body.trim());
    parse_ip_body(&body)
}

fn parse_ip_body(body: &str) -> anyhow::Result<IpAddr> {
    let body = body.trim();
    body.parse::<IpAddr>()
        .with_context(|| format!("unexpected public IP response '{body}'"))
}
