use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiStatus {
    #[default]
    Success,
    Error,
}

/// Fields every Porkbun response carries.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    #[serde(rename = "yourIp", default)]
    pub your_ip: String,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    #[default]
    A,
    Mx,
    Cname,
    Alias,
    Txt,
    Ns,
    Aaaa,
    Srv,
    Tlsa,
    Caa,
    Https,
    Svcb,
}

impl DnsRecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsRecordType::A => "A",
            DnsRecordType::Mx => "MX",
            DnsRecordType::Cname => "CNAME",
            DnsRecordType::Alias => "ALIAS",
            DnsRecordType::Txt => "TXT",
            DnsRecordType::Ns => "NS",
            DnsRecordType::Aaaa => "AAAA",
            DnsRecordType::Srv => "SRV",
            DnsRecordType::Tlsa => "TLSA",
            DnsRecordType::Caa => "CAA",
            DnsRecordType::Https => "HTTPS",
            DnsRecordType::Svcb => "SVCB",
        }
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record as Porkbun stores it. Numeric fields are kept as text, whichever
/// JSON type they arrive in.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub ttl: String,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub prio: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsCreateOptions {
    /// Subdomain without the domain itself. Empty for the root, `*` for a wildcard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Same fields as [`DnsCreateOptions`], all optional.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsEditOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<DnsRecordType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecordsResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    #[serde(default)]
    pub records: Vec<DnsRecord>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsCreateResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainLabel {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub color: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    pub domain: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tld: String,
    #[serde(default)]
    pub create_date: String,
    #[serde(default)]
    pub expire_date: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub security_lock: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub whois_privacy: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub auto_renew: u8,
    #[serde(default, deserialize_with = "number_or_string")]
    pub not_local: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<DomainLabel>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DomainListOptions {
    /// Index of the first domain to return. Porkbun pages by 1000.
    pub start: Option<u32>,
    pub include_labels: Option<bool>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainListResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    #[serde(default)]
    pub domains: Vec<DomainInfo>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameServersResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    #[serde(default)]
    pub ns: Vec<String>,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlForwardType {
    #[default]
    Temporary,
    Permanent,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlForwardingOptions {
    /// Empty forwards the root domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    pub location: String,
    #[serde(rename = "type")]
    pub forward_type: UrlForwardType,
    #[serde(with = "yes_no")]
    pub include_path: bool,
    #[serde(with = "yes_no")]
    pub wildcard: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlForward {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub subdomain: String,
    pub location: String,
    #[serde(rename = "type")]
    pub forward_type: UrlForwardType,
    #[serde(with = "yes_no")]
    pub include_path: bool,
    #[serde(with = "yes_no")]
    pub wildcard: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlForwardingResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    #[serde(default)]
    pub forwards: Vec<UrlForward>,
}

/// PEM encoded certificate material.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SslBundle {
    pub certificatechain: String,
    pub privatekey: String,
    pub publickey: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SslBundleResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    #[serde(flatten)]
    pub bundle: SslBundle,
}

pub(crate) fn yes_no_str(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Porkbun encodes flags as `"yes"` / `"no"`.
mod yes_no {
    use super::*;

    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(yes_no_str(*flag))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "yes" => Ok(true),
            "no" => Ok(false),
            other => Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(other),
                &"\"yes\" or \"no\"",
            )),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Unsigned(number) => number.to_string(),
            Scalar::Signed(number) => number.to_string(),
            Scalar::Float(number) => number.to_string(),
        }
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Scalar::deserialize(deserializer)?.into_text())
}

fn optional_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// `0`/`1` flags sent either as numbers or as `"0"`/`"1"`.
fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let text = Scalar::deserialize(deserializer)?.into_text();
    text.trim().parse().map_err(|_| {
        serde::de::Error::invalid_value(serde::de::Unexpected::Str(&text), &"0 or 1")
    })
}
