//! GraphQL Client
//!
//! Posts account operations to the configured endpoint with gloo-net and
//! keeps read results in the shared response cache for the session.

use std::rc::Rc;

use bank_dashboard::accounts::{
    accounts_request, create_account_request, decode_accounts, decode_created, AccountsPayload,
    CreateAccountInput, CreatedAccount,
};
use bank_dashboard::graphql::{
    decode_response, FetchPolicy, GraphQLRequest, NetworkError, RequestError, ResponseCache,
};
use gloo_net::http::Request;
use serde_json::Value;

/// Default GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8082/graphql";

const ENDPOINT_KEY: &str = "bank_graphql_endpoint";

/// Get the GraphQL endpoint from local storage or use default
pub fn get_endpoint() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(ENDPOINT_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the GraphQL endpoint in local storage; takes effect on reload
pub fn set_endpoint(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(ENDPOINT_KEY, url.trim());
        }
    }
}

/// Session-wide GraphQL client; clones share one cache
#[derive(Clone)]
pub struct GraphQLClient {
    endpoint: Rc<str>,
    cache: Rc<ResponseCache>,
}

impl GraphQLClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            endpoint: Rc::from(endpoint),
            cache: Rc::new(ResponseCache::new()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Account list and summary
    pub async fn fetch_accounts(&self, policy: FetchPolicy) -> Result<AccountsPayload, RequestError> {
        let data = self.query(&accounts_request(), policy).await?;
        decode_accounts(data)
    }

    /// Create an account; the response is never cached
    pub async fn create_account(&self, input: CreateAccountInput) -> Result<CreatedAccount, RequestError> {
        let request = create_account_request(&input)?;
        let data = self.execute(&request).await?;
        decode_created(data)
    }

    async fn query(&self, request: &GraphQLRequest, policy: FetchPolicy) -> Result<Value, RequestError> {
        let key = request.cache_key();

        if policy == FetchPolicy::CacheFirst {
            if let Some(data) = self.cache.get(&key) {
                return Ok(data);
            }
        }

        let data = self.execute(request).await?;
        self.cache.put(key, data.clone());
        Ok(data)
    }

    async fn execute(&self, request: &GraphQLRequest) -> Result<Value, RequestError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| NetworkError::Transport {
                message: e.to_string(),
            })?
            .send()
            .await
            // The browser reports refused connections and CORS rejections alike
            .map_err(|e| NetworkError::Unreachable {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| NetworkError::Decode {
            message: e.to_string(),
        })?;

        decode_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clones_share_the_cache() {
        let client = GraphQLClient::new(DEFAULT_ENDPOINT);
        let other = client.clone();

        let key = accounts_request().cache_key();
        client.cache.put(key.clone(), json!({ "allAccounts": [] }));

        assert_eq!(other.endpoint(), DEFAULT_ENDPOINT);
        assert!(other.cache.get(&key).is_some());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_endpoint_round_trips_through_local_storage() {
        set_endpoint("http://bank.test:9000/graphql/");
        assert_eq!(get_endpoint(), "http://bank.test:9000/graphql");

        set_endpoint("");
        assert_eq!(get_endpoint(), DEFAULT_ENDPOINT);
    }
}
