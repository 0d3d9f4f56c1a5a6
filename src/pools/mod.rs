//! # Pool Builder
//!
//! Synthesizes the pool-selection records consumed by the downstream
//! reverse-proxy. Every validated [`HostPortRecord`] yields two entries, one
//! per protocol (HTTPS first, then HTTP), keyed
//! `CUSTOMER_{HOSTNAME}_{port}_{PROTOCOL}`. The `regexUrl` matches the FQDN
//! literally by replacing every dot with the `[.]` character class.
//!
//! The builder is a pure function over the record list plus an immutable
//! [`PoolSettings`]; nothing here touches module-level state or the
//! filesystem.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::PoolSettings;
use crate::validation::HostPortRecord;

/// Protocol variants a pool pair is generated for, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Https,
    Http,
}

impl Protocol {
    /// Generation order: HTTPS before HTTP
    pub const ORDERED: [Protocol; 2] = [Protocol::Https, Protocol::Http];

    /// URL scheme used inside `regexUrl`
    pub fn scheme(&self) -> &'static str {
        match self {
            Protocol::Https => "https",
            Protocol::Http => "http",
        }
    }

    /// Upper-case label used in pool keys and descriptions
    pub fn label(&self) -> &'static str {
        match self {
            Protocol::Https => "HTTPS",
            Protocol::Http => "HTTP",
        }
    }
}

/// A query-string substitution applied by the proxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub regex: String,
    pub replace: String,
}

/// A response-header substitution applied by the proxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRule {
    pub header: String,
    pub regex: String,
    pub replace: String,
}

/// Whitelist configuration: either a literal list of CIDR/FQDN strings or a
/// symbolic name the downstream system resolves at deploy time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Whitelist {
    Literal(Vec<String>),
    Reference(String),
}

impl Whitelist {
    /// Render the value placed into every pool record: a literal list is
    /// copied verbatim, a reference becomes `${CONSTANTS:name}`.
    pub fn render(&self) -> WhitelistValue {
        match self {
            Whitelist::Literal(entries) => WhitelistValue::Entries(entries.clone()),
            Whitelist::Reference(name) => {
                WhitelistValue::Interpolation(format!("${{CONSTANTS:{}}}", name))
            }
        }
    }
}

/// The rendered `whitelist` field of a pool record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WhitelistValue {
    Entries(Vec<String>),
    Interpolation(String),
}

/// A single pool-selection entry.
///
/// Field order matters: it is the serialization order of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolRecord {
    pub description: String,
    pub exclude_log: bool,
    pub local_subnets: Vec<String>,
    pub pool_name: String,
    pub regex_url: String,
    pub url_query_string_replace_encode_full: bool,
    pub url_query_string_replace: Vec<RewriteRule>,
    pub response_headers_update: Vec<HeaderRule>,
    pub whitelist: WhitelistValue,
}

/// The complete output document: pool keys to records under `POOLS`, in
/// insertion order
#[derive(Debug, Serialize, Deserialize)]
pub struct PoolDocument {
    #[serde(rename = "POOLS")]
    pub pools: IndexMap<String, PoolRecord>,
}

impl PoolDocument {
    /// Number of pool entries in the document
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

/// Base pool name: `CUSTOMER_{HOSTNAME_UPPERCASED}_{port}`
pub fn pool_name(record: &HostPortRecord) -> String {
    format!("CUSTOMER_{}_{}", record.hostname.to_uppercase(), record.port)
}

/// Escape an FQDN for use inside `regexUrl`: every literal dot becomes the
/// `[.]` character class so it matches a dot rather than any character.
pub fn escape_fqdn(hostname: &str, domain: &str) -> String {
    let mut escaped = String::from(hostname);
    for label in domain.split('.') {
        escaped.push_str("[.]");
        escaped.push_str(label);
    }
    escaped
}

/// Build the HTTPS/HTTP pool pair for one validated record
pub fn build_pool_pair(
    record: &HostPortRecord,
    settings: &PoolSettings,
) -> [(String, PoolRecord); 2] {
    let name = pool_name(record);
    let escaped_fqdn = escape_fqdn(&record.hostname, &record.domain);

    Protocol::ORDERED.map(|protocol| {
        let pool = PoolRecord {
            description: format!("{} {} Pool Selection", name, protocol.label()),
            exclude_log: false,
            local_subnets: settings.local_subnets.clone(),
            pool_name: name.clone(),
            regex_url: format!("^{}://({}):443/", protocol.scheme(), escaped_fqdn),
            url_query_string_replace_encode_full: true,
            url_query_string_replace: settings.url_rewrites.clone(),
            response_headers_update: settings.header_updates.clone(),
            whitelist: settings.whitelist.render(),
        };
        (format!("{}_{}", name, protocol.label()), pool)
    })
}

/// Build the full pool document for a validated record sequence, preserving
/// record order with HTTPS before HTTP within each pair
pub fn build_pools(records: &[HostPortRecord], settings: &PoolSettings) -> PoolDocument {
    let mut pools = IndexMap::with_capacity(records.len() * 2);
    for record in records {
        for (key, pool) in build_pool_pair(record, settings) {
            pools.insert(key, pool);
        }
    }
    PoolDocument { pools }
}
