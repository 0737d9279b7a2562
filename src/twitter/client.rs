//! HTTP client for the anonymous posting endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::zk::{ProofSystem, Sha256System};

use super::types::*;

#[derive(Deserialize)]
struct NonceEnvelope {
    nonce: String,
}

#[derive(Deserialize)]
struct ActionsEnvelope {
    actions: Vec<Action>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostTweetRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_tweet_id: Option<&'a str>,
}

/// Client for the `/api/twitter` endpoints.
#[derive(Debug, Clone)]
pub struct TwitterClient<P: ProofSystem = Sha256System> {
    http: HttpClient,
    proof_system: P,
}

impl TwitterClient<Sha256System> {
    /// Create a new posting client with the default proof backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_proof_system(base_url, Sha256System)
    }
}

impl<P: ProofSystem> TwitterClient<P> {
    /// Create a posting client over a specific proof backend.
    pub fn with_proof_system(base_url: impl Into<String>, proof_system: P) -> Self {
        Self {
            http: HttpClient::new(base_url),
            proof_system,
        }
    }

    pub(crate) fn with_http(http: HttpClient, proof_system: P) -> Self {
        Self { http, proof_system }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Fetch a fresh proof nonce.
    pub async fn nonce(&self) -> Result<String> {
        let envelope: NonceEnvelope = self.http.get_json("/api/twitter/session/nonce").await?;
        Ok(envelope.nonce)
    }

    /// Create a posting session with a group-membership proof.
    ///
    /// Restores the identity from `secret`, uses `nonce` (fetching one when
    /// `None`), snapshots `group_members` and proves membership with the
    /// nonce as both signal and scope. The server verifies the proof and the
    /// merkle parameters and issues a bearer session token.
    ///
    /// The returned session is caller-held; once it expires the next
    /// authenticated call fails with a [`Error::Service`] and a new session
    /// must be created from a fresh nonce.
    pub async fn create_session(
        &self,
        secret: &str,
        group_members: Vec<String>,
        nonce: Option<String>,
    ) -> Result<Session> {
        let identity = self.proof_system.identity(Some(secret))?;

        let nonce = match nonce {
            Some(n) => n,
            None => self.nonce().await?,
        };

        let group = self.proof_system.group(group_members)?;
        let proof = self.proof_system.prove(&identity, &group, &nonce, &nonce)?;

        self.http.post_json("/api/twitter/session/verify", &proof).await
    }

    /// Post a tweet using a session token.
    ///
    /// On failure the server's structured `message` is surfaced when
    /// present, otherwise the HTTP status text.
    pub async fn post(
        &self,
        session_token: &str,
        text: &str,
        reply_to_tweet_id: Option<&str>,
    ) -> Result<TweetResponse> {
        if text.trim().is_empty() {
            return Err(Error::Validation("tweet text is empty".to_string()));
        }

        let request = PostTweetRequest {
            text,
            reply_to_tweet_id,
        };
        self.http
            .post_json_auth("/api/twitter/tweet", &request, session_token)
            .await
    }

    /// List the actions performed by the session's identity.
    pub async fn my_actions(&self, session_token: &str) -> Result<Vec<Action>> {
        let envelope: ActionsEnvelope = self
            .http
            .get_json_auth("/api/twitter/my-actions", session_token)
            .await?;
        Ok(envelope.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn post_rejects_empty_text() {
        let client = TwitterClient::new("https://zekta.io");
        let err = client.post("tok", "   ", None).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn create_session_rejects_empty_group() {
        let client = TwitterClient::new("https://zekta.io");
        let identity = crate::zk::generate().unwrap();

        // Empty group fails locally, before any nonce round trip is needed.
        let err = client
            .create_session(identity.secret(), Vec::new(), Some("n".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Proof(_)));
    }

    #[tokio::test]
    async fn create_session_rejects_non_member() {
        let client = TwitterClient::new("https://zekta.io");
        let member = crate::zk::generate().unwrap();
        let outsider = crate::zk::generate().unwrap();

        let err = client
            .create_session(
                outsider.secret(),
                vec![member.commitment().to_string()],
                Some("n".to_string()),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Proof(_)));
    }

    #[test]
    fn post_request_omits_missing_reply() {
        let request = PostTweetRequest {
            text: "hello",
            reply_to_tweet_id: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("replyToTweetId").is_none());
    }
}
