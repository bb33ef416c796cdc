use eyre::{bail, Result};
use pumplog_common::api::{HealthCheckResponse, RemoteEntry};
use reqwest::{Response, StatusCode};
use std::time::Duration;

/// A request that hangs past this is treated as a failed transmission; the
/// batch simply stays eligible for the next trigger.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

async fn handle_response_error(res: Response) -> Result<Response> {
    let status = res.status();
    if status == StatusCode::SERVICE_UNAVAILABLE {
        bail!("Service unavailable.");
    }

    if !status.is_success() {
        bail!("There was an error with the service: Status {status:?}.");
    }

    Ok(res)
}

/// HTTP client for the remote store.
#[derive(Debug, Clone)]
pub struct Client {
    address: String,
    inner: reqwest::Client,
}

impl Client {
    pub fn new(address: &str) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            address: address.trim_end_matches('/').to_string(),
            inner,
        })
    }

    pub async fn health_check(&self) -> Result<HealthCheckResponse> {
        let url = format!("{}/", self.address);
        let res = self.inner.get(url).send().await?;
        let res = handle_response_error(res).await?;

        let res = res.json::<HealthCheckResponse>().await?;
        Ok(res)
    }

    /// Transmits one batch. The remote dedupes on `client_id`, so a resend
    /// after a crash between transmit and confirm is harmless.
    pub async fn post_entries(&self, entries: &[RemoteEntry]) -> Result<()> {
        let url = format!("{}/entries", self.address);
        let res = self.inner.post(url).json(entries).send().await?;
        handle_response_error(res).await?;
        Ok(())
    }

    /// The dashboard read path: everything, newest first.
    pub async fn fetch_all(&self) -> Result<Vec<RemoteEntry>> {
        let url = format!("{}/entries", self.address);
        let res = self.inner.get(url).send().await?;
        let res = handle_response_error(res).await?;

        let res = res.json::<Vec<RemoteEntry>>().await?;
        Ok(res)
    }
}
