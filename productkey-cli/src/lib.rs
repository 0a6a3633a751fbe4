//! Command implementations for the `productkey` CLI.
//!
//! Kept out of `main.rs` so they can be exercised without spawning the
//! binary.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use productkey_codec::{KeyGenerator, LicenseKey};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Number of keys printed when no count is given.
pub const DEFAULT_COUNT: usize = 10;

/// Outcome of validating one input key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KeyReport {
    /// The key exactly as given.
    pub key: String,
    /// Whether the key passed validation.
    pub valid: bool,
    /// Rejection reason, absent for valid keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl KeyReport {
    /// Validates `key` and records the outcome.
    pub fn check(key: &str) -> Self {
        match LicenseKey::parse(key) {
            Ok(_) => Self {
                key: key.to_string(),
                valid: true,
                error: None,
            },
            Err(e) => {
                debug!(key, error = %e, "key rejected");
                Self {
                    key: key.to_string(),
                    valid: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

/// Generates `count` keys, reproducibly when a seed is given.
pub fn run_generate(count: usize, seed: Option<u64>) -> Vec<LicenseKey> {
    info!(count, seeded = seed.is_some(), "generating license keys");
    match seed {
        Some(seed) => KeyGenerator::with_rng(StdRng::seed_from_u64(seed)).generate_batch(count),
        None => KeyGenerator::new().generate_batch(count),
    }
}

/// Validates every key, in order.
pub fn validate_keys<I, S>(keys: I) -> Vec<KeyReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let reports: Vec<KeyReport> = keys.into_iter().map(|k| KeyReport::check(k.as_ref())).collect();
    let valid = reports.iter().filter(|r| r.valid).count();
    info!(total = reports.len(), valid, "validation finished");
    reports
}

/// Returns true if every report is valid.
pub fn all_valid(reports: &[KeyReport]) -> bool {
    reports.iter().all(|r| r.valid)
}

/// Reads one key per line, trimming whitespace and skipping blank lines.
pub fn read_keys<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", n + 1))?;
        let key = line.trim();
        if !key.is_empty() {
            keys.push(key.to_string());
        }
    }
    Ok(keys)
}

/// Reads keys from a flat file, one per line.
pub fn read_keys_from_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let keys = read_keys(BufReader::new(file))
        .with_context(|| format!("failed to read keys from {}", path.display()))?;
    debug!(path = %path.display(), count = keys.len(), "read keys from file");
    Ok(keys)
}

/// Renders generated keys, one per line or as a JSON array.
pub fn render_keys(keys: &[LicenseKey], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(keys).context("failed to encode keys");
    }
    Ok(keys.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))
}

/// Renders validation reports as `VALID`/`INVALID` lines or a JSON array.
pub fn render_reports(reports: &[KeyReport], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(reports).context("failed to encode reports");
    }
    let lines: Vec<String> = reports
        .iter()
        .map(|r| match &r.error {
            None => format!("VALID    {}", r.key),
            Some(reason) => format!("INVALID  {} ({reason})", r.key),
        })
        .collect();
    Ok(lines.join("\n"))
}
