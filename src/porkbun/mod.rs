use async_trait::async_trait;

use crate::ClientError;

mod client;
mod types;

pub use client::{Porkbun, REQUEST_TIMEOUT, TXT_TTL};
pub use types::{Credentials, Record};

pub const DEFAULT_BASE_URL: &str = "https://api.porkbun.com/api/json/v3";

/// Record type used in every URL and create request.
pub(crate) const RECORD_TYPE: &str = "TXT";

/// Endpoints for a single domain.
pub(crate) struct PorkbunAPI<'t> {
    pub(crate) base_url: &'t str,
    pub(crate) domain: &'t str,
}

impl<'t> PorkbunAPI<'t> {
    pub(crate) fn retrieve_by_name_type(&self, subdomain: &str) -> String {
        format!(
            "{}/dns/retrieveByNameType/{}/{}/{}",
            self.base_url, self.domain, RECORD_TYPE, subdomain
        )
    }

    pub(crate) fn create(&self) -> String {
        format!("{}/dns/create/{}", self.base_url, self.domain)
    }

    pub(crate) fn delete_by_name_type(&self, subdomain: &str) -> String {
        format!(
            "{}/dns/deleteByNameType/{}/{}/{}",
            self.base_url, self.domain, RECORD_TYPE, subdomain
        )
    }
}

/// Idempotent TXT record management for one registrar account.
///
/// An empty `subdomain` addresses the zone apex.
#[async_trait]
pub trait TxtRecords {
    /// Creates the record unless one already exists at that name.
    async fn create(&self, domain: &str, subdomain: &str, content: &str)
        -> Result<(), ClientError>;
    /// Deletes the record if there is one. Deleting a missing record succeeds.
    async fn delete(&self, domain: &str, subdomain: &str) -> Result<(), ClientError>;
    async fn retrieve(&self, domain: &str, subdomain: &str) -> Result<Vec<Record>, ClientError>;
}
