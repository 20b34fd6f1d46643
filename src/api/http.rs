use crate::error::AppError;
use log::{debug, info};
use serde_json::Value;
use std::time::Duration;

pub const API_KEY_PARAM: &str = "api_key";

/// Sends one GET and hands back the parsed JSON body.
pub trait HttpGet: Send + Sync {
    fn get(&self, url: &str, credential: Option<&str>) -> Result<Value, AppError>;
}

pub struct UreqDispatcher {
    agent: ureq::Agent,
}

impl UreqDispatcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("riot_caller/", env!("CARGO_PKG_VERSION")))
            .build();

        UreqDispatcher { agent }
    }
}

impl HttpGet for UreqDispatcher {
    fn get(&self, url: &str, credential: Option<&str>) -> Result<Value, AppError> {
        let mut request = self.agent.get(url);
        // No key means no param at all; upstream rejects the call.
        if let Some(key) = credential {
            request = request.query(API_KEY_PARAM, key);
        }

        info!("Making request to {}", url);

        // ureq's Display for errors embeds the full URL, api key included.
        let response = request.call().map_err(|e| {
            let cause = match e {
                ureq::Error::Status(code, resp) => {
                    format!("HTTP {} {}", code, resp.status_text())
                }
                ureq::Error::Transport(t) => match t.message() {
                    Some(message) => format!("{}: {}", t.kind(), message),
                    None => t.kind().to_string(),
                },
            };
            debug!("Request to {} failed: {}", url, cause);
            AppError::ServiceCall {
                url: url.to_string(),
                cause,
            }
        })?;

        let body: Value = response.into_json().map_err(|e| AppError::ServiceCall {
            url: url.to_string(),
            cause: format!("invalid JSON body: {}", e),
        })?;

        info!("Request to {} succeeded.", url);
        Ok(body)
    }
}
