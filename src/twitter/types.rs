//! Wire types for the anonymous posting API.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An issued posting session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Bearer token for subsequent authenticated calls.
    pub zk_session: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    /// Commitment the session was issued against.
    pub commitment: String,
}

/// Response from posting a tweet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetResponse {
    pub ok: bool,
    pub tweet_id: String,
    pub tweet_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A past action (tweet) performed by the caller's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub action_id: String,
    pub text: String,
    pub tweet_id: String,
    pub tweet_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_session() {
        let json = r#"{
            "zkSession": "tok-abc",
            "expiresAt": "2025-06-01T13:00:00Z",
            "commitment": "c0ffee"
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.zk_session, "tok-abc");
        assert_eq!(session.commitment, "c0ffee");
    }

    #[test]
    fn parses_tweet_response() {
        let json = r#"{
            "ok": true,
            "tweetId": "190000001",
            "tweetUrl": "https://x.com/zekta/status/190000001",
            "createdAt": "2025-06-01T12:34:56.789Z"
        }"#;

        let response: TweetResponse = serde_json::from_str(json).unwrap();
        assert!(response.ok);
        assert_eq!(response.tweet_id, "190000001");
    }
}
