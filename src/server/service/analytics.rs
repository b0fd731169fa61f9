use serde_json::json;

const TRACK_URL: &str = "https://api.segment.io/v1/track";

/// Fire-and-forget event tracking. A failed track call is logged and
/// never surfaces to the request that triggered it.
#[derive(Clone)]
pub struct Analytics {
    http_client: reqwest::Client,
    write_key: String,
}

impl Analytics {
    pub fn new(http_client: reqwest::Client, write_key: String) -> Self {
        Self {
            http_client,
            write_key,
        }
    }

    pub async fn track(&self, user_id: i32, event: &str, properties: serde_json::Value) {
        let body = json!({
            "userId": user_id.to_string(),
            "event": event,
            "properties": properties,
        });

        let result = self
            .http_client
            .post(TRACK_URL)
            .basic_auth(&self.write_key, Some(""))
            .json(&body)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        if let Err(err) = result {
            tracing::warn!("analytics track '{}' failed: {}", event, err);
        }
    }
}
