use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ApiError;

/// API key pair attached to every request body.
#[derive(Serialize, Clone)]
pub struct Credentials {
    #[serde(rename = "apikey")]
    api_key: String,
    #[serde(rename = "secretapikey")]
    secret_api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Credentials {
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("secret_api_key", &"<redacted>")
            .finish()
    }
}

/// A TXT record as stored by the registrar.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub record_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub ttl: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub prio: String,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct RetrieveRequest<'a> {
    #[serde(flatten)]
    pub(crate) credentials: &'a Credentials,
}

#[derive(Serialize, Debug)]
pub(crate) struct DeleteRequest<'a> {
    #[serde(flatten)]
    pub(crate) credentials: &'a Credentials,
}

#[derive(Serialize, Debug)]
pub(crate) struct CreateRequest<'a> {
    #[serde(flatten)]
    pub(crate) credentials: &'a Credentials,
    pub(crate) name: &'a str,
    #[serde(rename = "type")]
    pub(crate) record_type: &'a str,
    pub(crate) content: &'a str,
    pub(crate) ttl: String,
}

/// Response bodies share a `status` field, `"success"` when the call went through.
pub(crate) trait ApiResponse: DeserializeOwned {
    fn status(&self) -> &str;

    fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    fn ensure_success(self, operation: &'static str) -> Result<Self, ApiError> {
        if self.status().eq_ignore_ascii_case("success") {
            Ok(self)
        } else {
            Err(ApiError::Status {
                operation,
                status: self.status().to_string(),
            })
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct RetrieveResponse {
    #[serde(default)]
    pub(crate) status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub(crate) records: Vec<Record>,
}

impl ApiResponse for RetrieveResponse {
    fn status(&self) -> &str {
        &self.status
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct CreateResponse {
    #[serde(default)]
    pub(crate) status: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub(crate) id: String,
}

impl ApiResponse for CreateResponse {
    fn status(&self) -> &str {
        &self.status
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct DeleteResponse {
    #[serde(default)]
    pub(crate) status: String,
}

impl ApiResponse for DeleteResponse {
    fn status(&self) -> &str {
        &self.status
    }
}

/// Porkbun sends ids and TTLs as strings, but numbers show up too.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Str(value)) => value,
        Some(Raw::Num(value)) => value.to_string(),
        None => String::new(),
    })
}

/// Treats `null` like a missing value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
