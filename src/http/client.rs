use anyhow::Result;
use reqwest::{Client, RequestBuilder};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::models::{ProberConfig, ResponseInfo};

pub struct HttpClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpClient {
    pub fn new(config: &ProberConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .danger_accept_invalid_certs(false)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> ResponseInfo {
        let query_string = if query.is_empty() {
            String::new()
        } else {
            let pairs: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            format!("?{}", pairs.join("&"))
        };

        let url = format!("{}{}{}", self.base_url, path, query_string);
        let request = self.apply_headers(self.client.get(&url));
        self.execute_request(request).await
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> ResponseInfo {
        let url = format!("{}{}", self.base_url, path);
        let request = self.apply_headers(self.client.post(&url)).json(body);
        self.execute_request(request).await
    }

    pub async fn post_raw(&self, path: &str, content_type: &str, body: String) -> ResponseInfo {
        let url = format!("{}{}", self.base_url, path);
        let request = self
            .apply_headers(self.client.post(&url))
            .header("Content-Type", content_type)
            .body(body);
        self.execute_request(request).await
    }

    fn apply_headers(&self, mut request: RequestBuilder) -> RequestBuilder {
        request = request.header("Accept", "application/json");
        if let Some(token) = &self.auth_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        request
    }

    async fn execute_request(&self, request: RequestBuilder) -> ResponseInfo {
        let start = Instant::now();

        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let headers: HashMap<String, String> = response
                    .headers()
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
                    .collect();

                let text = response.text().await.unwrap_or_default();
                let duration_ms = start.elapsed().as_millis() as u64;

                let mut info = ResponseInfo::new(status, text, duration_ms);
                info.headers = headers;
                info
            }
            Err(e) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                let mut info = ResponseInfo::error(e.to_string());
                info.duration_ms = duration_ms;
                info
            }
        }
    }
}
