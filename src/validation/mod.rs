//! # Input Validation
//!
//! Per-line validation and deduplication of the `fqdn port` input table.
//!
//! Each 1-indexed line must carry exactly two whitespace-separated tokens: a
//! fully qualified domain name matching a DNS-label grammar and a TCP port in
//! `[1, 65535]`. The FQDN and port checks run independently, so a line can
//! record one issue for each. Duplicates are keyed on the lower-cased first
//! label plus the port; the first occurrence wins and keeps its original
//! casing. Blank lines count toward line numbering but are skipped silently.
//!
//! Issues never abort the run; they are collected into a [`ValidationReport`]
//! alongside the accepted records, which retain input order.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// FQDN grammar: dot-separated labels of 1-63 alphanumeric-or-hyphen
    /// characters with no leading or trailing hyphen, ending in an alphabetic
    /// top-level label of at least two characters.
    static ref FQDN_REGEX: Regex =
        Regex::new(r"^([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$").unwrap();
}

/// A validated `hostname`/`domain`/`port` triple.
///
/// `hostname` is the first dot-separated label of the FQDN with its original
/// casing preserved; `domain` is the remainder joined by dots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostPortRecord {
    pub hostname: String,
    pub domain: String,
    pub port: u16,
}

impl HostPortRecord {
    /// Reassemble the full FQDN
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.hostname, self.domain)
    }
}

/// A single per-line validation problem. Informational only; recorded, never
/// raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// 1-indexed input line the issue originates from
    pub line: usize,
    pub message: String,
}

/// Outcome of validating a full input table
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    /// Accepted records in input order
    pub records: Vec<HostPortRecord>,
    /// All recorded issues
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when every non-blank line was accepted
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check an FQDN against the DNS-label grammar
pub fn validate_fqdn(fqdn: &str) -> bool {
    FQDN_REGEX.is_match(fqdn)
}

/// Parse a TCP port, accepting only unsigned decimal values in `[1, 65535]`
pub fn parse_port(raw: &str) -> Option<u16> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>()
        .ok()
        .filter(|port| (1..=65535).contains(port))
        .map(|port| port as u16)
}

/// Validate and deduplicate a newline-delimited `fqdn port` table
pub fn validate_input(text: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen: HashSet<(String, u16)> = HashSet::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() != 2 {
            report.issues.push(ValidationIssue {
                line,
                message: format!("Invalid format - '{}'", trimmed),
            });
            continue;
        }
        let (fqdn, port_raw) = (tokens[0], tokens[1]);

        let port = match (validate_fqdn(fqdn), parse_port(port_raw)) {
            (true, Some(port)) => port,
            (fqdn_ok, port) => {
                if !fqdn_ok {
                    report.issues.push(ValidationIssue {
                        line,
                        message: format!("Invalid FQDN - '{}'", fqdn),
                    });
                }
                if port.is_none() {
                    report.issues.push(ValidationIssue {
                        line,
                        message: format!("Invalid TCP port - '{}'", port_raw),
                    });
                }
                continue;
            }
        };

        // The grammar guarantees at least one dot.
        let Some((hostname, domain)) = fqdn.split_once('.') else {
            continue;
        };

        if !seen.insert((hostname.to_lowercase(), port)) {
            report.issues.push(ValidationIssue {
                line,
                message: format!(
                    "Duplicate hostname '{}' and port '{}'",
                    hostname.to_lowercase(),
                    port
                ),
            });
            continue;
        }

        report.records.push(HostPortRecord {
            hostname: hostname.to_string(),
            domain: domain.to_string(),
            port,
        });
    }

    report
}
