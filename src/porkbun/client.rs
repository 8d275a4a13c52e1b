use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{header, Client, ClientBuilder, StatusCode};
use serde::Serialize;

use super::types::{
    ApiResponse, CreateRequest, CreateResponse, Credentials, DeleteRequest, DeleteResponse,
    Record, RetrieveRequest, RetrieveResponse,
};
use super::{PorkbunAPI, TxtRecords, DEFAULT_BASE_URL, RECORD_TYPE};
use crate::{ApiError, ClientError};

/// Every request gives up after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// TTL in seconds for created records.
pub const TXT_TTL: u32 = 600;

const PROBE: &str = "check for an existing record";

/// Client for the Porkbun DNS API, limited to TXT records.
///
/// Create and delete first check whether a record exists at the name, because
/// the API has no "create if absent" or "delete if present" calls of its own.
/// This costs one extra round trip per call.
pub struct Porkbun {
    client: Client,
    credentials: Credentials,
    base_url: String,
}

fn api_client(timeout: Duration) -> Result<Client, ClientError> {
    let mut headers = header::HeaderMap::new();
    let accept_value = header::HeaderValue::from_static("application/json");
    headers.insert(header::ACCEPT, accept_value);
    let client = ClientBuilder::new()
        .timeout(timeout)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

impl Porkbun {
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self, ClientError> {
        Self::build(credentials, base_url, REQUEST_TIMEOUT)
    }

    pub(crate) fn build(
        credentials: Credentials,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        Ok(Porkbun {
            client: api_client(timeout)?,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api<'t>(&'t self, domain: &'t str) -> PorkbunAPI<'t> {
        PorkbunAPI {
            base_url: &self.base_url,
            domain,
        }
    }

    /// Creates a TXT record at `subdomain` unless one is already there.
    pub async fn create_txt(
        &self,
        domain: &str,
        subdomain: &str,
        content: &str,
    ) -> Result<(), ClientError> {
        let existing = self.fetch_records(domain, subdomain, PROBE).await?;
        if !existing.is_empty() {
            if existing.iter().all(|record| record.content != content) {
                warn!(
                    "TXT record for '{}' on {} already exists with other content ({}), not creating another",
                    subdomain,
                    domain,
                    existing
                        .iter()
                        .map(|record| record.content.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            } else {
                info!("TXT record for '{}' on {} already exists", subdomain, domain);
            }
            return Ok(());
        }

        let request = CreateRequest {
            credentials: &self.credentials,
            name: subdomain,
            record_type: RECORD_TYPE,
            content,
            ttl: TXT_TTL.to_string(),
        };
        let response: CreateResponse = self
            .submit_request(&self.api(domain).create(), &request)
            .await?;
        let response = response.ensure_success("create record")?;
        info!(
            "Created TXT record {} for '{}' on {}",
            response.id, subdomain, domain
        );
        Ok(())
    }

    /// Deletes the TXT records at `subdomain`. Nothing to delete is not an error.
    pub async fn delete_txt(&self, domain: &str, subdomain: &str) -> Result<(), ClientError> {
        if !self.record_exists(domain, subdomain).await? {
            info!("No TXT record for '{}' on {}, nothing to delete", subdomain, domain);
            return Ok(());
        }

        let request = DeleteRequest {
            credentials: &self.credentials,
        };
        let response: DeleteResponse = self
            .submit_request(&self.api(domain).delete_by_name_type(subdomain), &request)
            .await?;
        response.ensure_success("submit delete request")?;
        info!("Deleted TXT record for '{}' on {}", subdomain, domain);
        Ok(())
    }

    /// Lists the TXT records at `subdomain`, which may be none.
    pub async fn retrieve_txt(
        &self,
        domain: &str,
        subdomain: &str,
    ) -> Result<Vec<Record>, ClientError> {
        self.fetch_records(domain, subdomain, "retrieve DNS records")
            .await
    }

    pub(crate) async fn record_exists(
        &self,
        domain: &str,
        subdomain: &str,
    ) -> Result<bool, ClientError> {
        Ok(!self
            .fetch_records(domain, subdomain, PROBE)
            .await?
            .is_empty())
    }

    async fn fetch_records(
        &self,
        domain: &str,
        subdomain: &str,
        operation: &'static str,
    ) -> Result<Vec<Record>, ClientError> {
        let request = RetrieveRequest {
            credentials: &self.credentials,
        };
        let response: RetrieveResponse = self
            .submit_request(&self.api(domain).retrieve_by_name_type(subdomain), &request)
            .await?;
        Ok(response.ensure_success(operation)?.records)
    }

    async fn submit_request<B, R>(&self, url: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: ApiResponse,
    {
        debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);
        if status != StatusCode::OK {
            let text = response
                .text()
                .await
                .unwrap_or_else(|error| error.to_string());
            return Err(ApiError::HttpStatus(status, text).into());
        }

        let bytes = response.bytes().await?;
        Ok(R::decode(&bytes)?)
    }
}

#[async_trait]
impl TxtRecords for Porkbun {
    async fn create(
        &self,
        domain: &str,
        subdomain: &str,
        content: &str,
    ) -> Result<(), ClientError> {
        self.create_txt(domain, subdomain, content).await
    }

    async fn delete(&self, domain: &str, subdomain: &str) -> Result<(), ClientError> {
        self.delete_txt(domain, subdomain).await
    }

    async fn retrieve(&self, domain: &str, subdomain: &str) -> Result<Vec<Record>, ClientError> {
        self.retrieve_txt(domain, subdomain).await
    }
}
