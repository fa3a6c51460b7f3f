use anyhow::{Context as _, anyhow};
use serde::Deserialize;

use crate::domain::repository::TokenVerifierPort;
use crate::domain::types::VerifiedIdentity;
use crate::error::ApiError;

/// Identity-provider client implementing `TokenVerifierPort` over the
/// provider's `accounts:lookup` endpoint.
///
/// The token is posted as-is; no local decoding or signature checking
/// happens here. Provider 4xx means the credential is bad; anything else
/// that goes wrong is an internal failure.
#[derive(Clone)]
pub struct HttpTokenVerifier {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTokenVerifier {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        }
    }
}

impl TokenVerifierPort for HttpTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, ApiError> {
        let url = format!("{}/v1/accounts:lookup?key={}", self.base_url, self.api_key);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "idToken": token }))
            .send()
            .await
            .context("identity provider request")?;

        let status = response.status();
        if status.is_client_error() {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Internal(anyhow!(
                "identity provider returned {status}"
            )));
        }

        let body: LookupResponse = response
            .json()
            .await
            .context("decode identity provider response")?;

        let account = body
            .users
            .into_iter()
            .next()
            .filter(|a| !a.local_id.is_empty())
            .ok_or(ApiError::Unauthorized)?;

        Ok(VerifiedIdentity {
            uid: account.local_id,
            email: account.email.filter(|e| !e.is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupAccount>,
}

#[derive(Debug, Deserialize)]
struct LookupAccount {
    #[serde(rename = "localId")]
    local_id: String,
    email: Option<String>,
}
