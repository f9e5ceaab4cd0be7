use reqwest::Client;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::{debug, error};

use crate::error::TransportError;

pub struct HttpClient {
    client: Client,
    headers: HeaderMap,
}

impl HttpClient {
    pub fn new(headers: &HashMap<String, String>) -> Result<Self, TransportError> {
        let mut header_map = HeaderMap::new();

        for (key, value) in headers.iter() {
            if let (Ok(header_name), Ok(header_value)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                header_map.insert(header_name, header_value);
                debug!(header_key = %key, "Adding header");
            } else {
                error!(header_key = %key, "Invalid header, skipping");
            }
        }

        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::Request(e.without_url()))?;

        Ok(Self {
            client,
            headers: header_map,
        })
    }

    /// GETs `url` with `params` as the query string and decodes a JSON body.
    /// The query carries the API key, so neither logs nor errors include it.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, TransportError> {
        let mut request = self.client.get(url).query(params);

        for (key, value) in self.headers.iter() {
            request = request.header(key, value);
        }

        debug!(url = url, "Sending request");

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))?;
        let status = response.status();

        debug!(status = status.as_u16(), url = url, "Response received");

        if !status.is_success() {
            error!(status = status.as_u16(), url = url, "Request failed");
            return Err(TransportError::Status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))?;
        serde_json::from_slice(&body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&body);
            error!(
                error = %e,
                body = %body_str,
                url = url,
                "Failed to parse response"
            );
            TransportError::from(e)
        })
    }
}
