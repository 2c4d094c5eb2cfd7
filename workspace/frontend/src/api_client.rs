use async_trait::async_trait;
use common::request::{Method, OutboundRequest};
use common::{DashboardError, Result, Transport};
use gloo_net::http::Request;
use web_sys::UrlSearchParams;

use crate::settings;

/// [`Transport`] backed by the browser's fetch API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().api_base_url())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<String> {
        let endpoint = request.endpoint.path();
        let url = self.url(endpoint);
        log::debug!("{:?} request to: {}", request.method, url);

        let pending = match request.method {
            Method::Get => Request::get(&url)
                .query(request.fields.iter().map(|(name, value)| (*name, value.as_str())))
                .build(),
            Method::Post => Request::post(&url).body(form_body(&request.fields)?),
        }
        .map_err(|e| {
            let error_msg = format!("Failed to build request: {}", e);
            log::error!("{} - {}", endpoint, error_msg);
            DashboardError::Network(error_msg)
        })?;

        let response = pending.send().await.map_err(|e| {
            log::error!("{} - Request failed: {}", endpoint, e);
            DashboardError::Network(e.to_string())
        })?;

        if !response.ok() {
            log::error!("{} - HTTP error: {}", endpoint, response.status());
            return Err(DashboardError::Http {
                endpoint,
                status: response.status(),
            });
        }

        log::trace!("{} - Response received, reading body", endpoint);
        let body = response.text().await.map_err(|e| {
            log::error!("{} - Failed to read response: {}", endpoint, e);
            DashboardError::Decode(e.to_string())
        })?;

        log::info!("{:?} {} - Success", request.method, endpoint);
        Ok(body)
    }
}

/// Encodes fields as `application/x-www-form-urlencoded`; fetch sets the
/// content type from the body object.
fn form_body(fields: &[(&'static str, String)]) -> Result<UrlSearchParams> {
    let params = UrlSearchParams::new()
        .map_err(|e| DashboardError::Network(format!("Failed to encode form: {:?}", e)))?;
    for (name, value) in fields {
        params.append(name, value);
    }
    Ok(params)
}
