//! HTTP client for the domain endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::zk::{ProofSystem, Sha256System};

use super::types::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckRequest<'a> {
    domain_name: &'a str,
    tld: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseRequest<'a> {
    domain_name: &'a str,
    tld: &'a str,
    currency: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_email: Option<&'a str>,
}

#[derive(Deserialize)]
struct DomainsEnvelope {
    domains: Vec<Domain>,
}

#[derive(Deserialize)]
struct RecordsEnvelope {
    records: Vec<DnsRecord>,
}

#[derive(Deserialize)]
struct RecordEnvelope {
    record: DnsRecord,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddRecordRequest<'a> {
    domain_secret: &'a str,
    #[serde(flatten)]
    record: &'a NewDnsRecord,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRecordRequest<'a> {
    domain_secret: &'a str,
    #[serde(flatten)]
    updates: &'a DnsRecordUpdate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SecretOnlyRequest<'a> {
    domain_secret: &'a str,
}

/// Client for the `/api/domains` endpoints.
///
/// Ownership queries derive the public commitment from the caller's domain
/// secret via the configured [`ProofSystem`]; DNS mutations send the secret
/// itself as the authorization credential, and the server validates the
/// secret-to-domain binding.
#[derive(Debug, Clone)]
pub struct DomainClient<P: ProofSystem = Sha256System> {
    http: HttpClient,
    proof_system: P,
}

impl DomainClient<Sha256System> {
    /// Create a new domain client with the default proof backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_proof_system(base_url, Sha256System)
    }
}

impl<P: ProofSystem> DomainClient<P> {
    /// Create a domain client over a specific proof backend.
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

    /// Check availability and pricing for `name` + `tld`.
    pub async fn check(&self, name: &str, tld: &str) -> Result<DomainAvailability> {
        if name.is_empty() {
            return Err(Error::Validation("domain name is required".to_string()));
        }
        let request = CheckRequest {
            domain_name: name,
            tld,
        };
        self.http.post_json("/api/domains/check", &request).await
    }

    /// Purchase a domain anonymously with cryptocurrency.
    ///
    /// The returned order carries the `domain_secret` the caller must retain;
    /// it is the only credential for later DNS and ownership calls. This has
    /// server-side effects; do not retry blindly on failure.
    pub async fn purchase(
        &self,
        name: &str,
        tld: &str,
        currency: &str,
        email: Option<&str>,
    ) -> Result<DomainOrder> {
        if name.is_empty() || currency.is_empty() {
            return Err(Error::Validation(
                "domain name and currency are required".to_string(),
            ));
        }
        let request = PurchaseRequest {
            domain_name: name,
            tld,
            currency,
            customer_email: email,
        };
        self.http.post_json("/api/domains/order", &request).await
    }

    /// Poll a purchase order. The order id is the capability; no other
    /// authentication is required.
    pub async fn order_status(&self, order_id: &str) -> Result<DomainOrder> {
        let path = format!("/api/domains/order/{}", order_id);
        self.http.get_json(&path).await
    }

    /// List domains owned by the commitment derived from `secret`.
    pub async fn my_domains(&self, secret: &str) -> Result<Vec<Domain>> {
        let identity = self.proof_system.identity(Some(secret))?;
        let path = format!("/api/domains/my-domains?zkCommitment={}", identity.commitment());
        let envelope: DomainsEnvelope = self.http.get_json(&path).await?;
        Ok(envelope.domains)
    }

    /// List DNS records for a domain owned by `secret`.
    pub async fn dns_records(&self, domain: &str, secret: &str) -> Result<Vec<DnsRecord>> {
        let identity = self.proof_system.identity(Some(secret))?;
        let path = format!(
            "/api/domains/{}/dns?zkCommitment={}",
            domain,
            identity.commitment()
        );
        let envelope: RecordsEnvelope = self.http.get_json(&path).await?;
        Ok(envelope.records)
    }

    /// Add a DNS record, authorized by the domain secret.
    ///
    /// The echoed record is returned verbatim as stored by the server.
    pub async fn add_dns_record(
        &self,
        domain: &str,
        secret: &str,
        record: &NewDnsRecord,
    ) -> Result<DnsRecord> {
        let request = AddRecordRequest {
            domain_secret: secret,
            record,
        };
        let path = format!("/api/domains/{}/dns", domain);
        let envelope: RecordEnvelope = self.http.post_json(&path, &request).await?;
        Ok(envelope.record)
    }

    /// Update an existing DNS record, authorized by the domain secret.
    pub async fn update_dns_record(
        &self,
        domain: &str,
        secret: &str,
        record_id: &str,
        updates: &DnsRecordUpdate,
    ) -> Result<Ack> {
        let request = UpdateRecordRequest {
            domain_secret: secret,
            updates,
        };
        let path = format!("/api/domains/{}/dns/{}", domain, record_id);
        self.http.put_json(&path, &request).await
    }

    /// Delete a DNS record, authorized by the domain secret.
    pub async fn delete_dns_record(
        &self,
        domain: &str,
        secret: &str,
        record_id: &str,
    ) -> Result<Ack> {
        let request = SecretOnlyRequest {
            domain_secret: secret,
        };
        let path = format!("/api/domains/{}/dns/{}", domain, record_id);
        self.http.delete_json(&path, &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn check_rejects_empty_name() {
        let client = DomainClient::new("https://zekta.io");
        let err = client.check("", "org").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn my_domains_rejects_empty_secret() {
        let client = DomainClient::new("https://zekta.io");
        let err = client.my_domains("").await.unwrap_err();
        assert!(matches!(err, Error::InvalidSecret(_)));
    }

    #[test]
    fn add_request_flattens_record_next_to_secret() {
        let record = NewDnsRecord {
            record_type: "A".to_string(),
            name: "@".to_string(),
            content: "192.0.2.1".to_string(),
            ttl: 3600,
        };
        let request = AddRecordRequest {
            domain_secret: "s3cret",
            record: &record,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json.get("domainSecret").and_then(|v| v.as_str()), Some("s3cret"));
        assert_eq!(json.get("type").and_then(|v| v.as_str()), Some("A"));
        assert_eq!(json.get("content").and_then(|v| v.as_str()), Some("192.0.2.1"));
    }
}
