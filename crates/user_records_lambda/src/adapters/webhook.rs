pub trait AlertPoster {
    fn post_alert(&self, body: &[u8]) -> Result<(), String>;
}

/// Blocking HTTP poster for the chat webhook. The client handle lives for
/// the whole process; no timeout or retry policy is configured here.
#[derive(Debug, Clone)]
pub struct ReqwestAlertPoster {
    webhook_url: String,
    http_client: reqwest::blocking::Client,
}

impl ReqwestAlertPoster {
    pub fn new(webhook_url: String, http_client: reqwest::blocking::Client) -> Self {
        Self {
            webhook_url,
            http_client,
        }
    }
}

impl AlertPoster for ReqwestAlertPoster {
    fn post_alert(&self, body: &[u8]) -> Result<(), String> {
        let request = self
            .http_client
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .body(body.to_vec());

        tokio::task::block_in_place(|| {
            let response = request
                .send()
                .map_err(|error| format!("failed to post alert to webhook: {error}"))?;

            if !response.status().is_success() {
                return Err(format!("webhook returned status {}", response.status()));
            }
            Ok(())
        })
    }
}
