use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use user_records_core::contract::RelayAck;
use user_records_lambda::adapters::webhook::ReqwestAlertPoster;
use user_records_lambda::handlers::relay::handle_alert_batch;

async fn handle_request(
    poster: &ReqwestAlertPoster,
    event: LambdaEvent<Value>,
) -> Result<RelayAck, Error> {
    handle_alert_batch(event.payload, poster).map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let webhook_url = std::env::var("SLACK_WEBHOOK_URL")
        .map_err(|_| Error::from("SLACK_WEBHOOK_URL must be configured"))?;

    // The blocking client spawns its own driver thread, so construction has
    // to leave the async context first.
    let http_client = tokio::task::block_in_place(reqwest::blocking::Client::new);
    let poster = ReqwestAlertPoster::new(webhook_url, http_client);

    lambda_runtime::run(service_fn(|event| handle_request(&poster, event))).await
}
