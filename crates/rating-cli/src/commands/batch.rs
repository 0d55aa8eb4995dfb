//! Batch command implementation.
//!
//! Reads a JSON array of requests and prints one result entry per request.
//! A rejected request is reported in place and does not stop the batch.

use std::io::Read;
use std::path::Path;

use anyhow::{Context as _, Result};
use rating_core::{Context, Error, RatingOutcome, RatingRequest};
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchEntry {
    Ok(RatingOutcome),
    Error { message: String, context: Context },
}

impl From<rating_core::Result<RatingOutcome>> for BatchEntry {
    fn from(result: rating_core::Result<RatingOutcome>) -> Self {
        match result {
            Ok(outcome) => Self::Ok(outcome),
            Err(Error::InvalidInput { message, context }) => Self::Error { message, context },
        }
    }
}

/// Run the batch command
pub fn run(input: &str) -> Result<()> {
    let raw = read_input(input)?;
    let requests = parse(&raw).with_context(|| format!("Failed to parse requests from {}", input))?;
    let entries = evaluate_all(&requests);
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    let path = Path::new(input);
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
}

pub fn parse(raw: &str) -> serde_json::Result<Vec<RatingRequest>> {
    serde_json::from_str(raw)
}

pub fn evaluate_all(requests: &[RatingRequest]) -> Vec<BatchEntry> {
    let entries: Vec<BatchEntry> = requests
        .iter()
        .enumerate()
        .map(|(i, request)| {
            let result = request.evaluate();
            if let Err(e) = &result {
                warn!("Request #{} ({}) rejected: {}", i, request.game(), e);
            } else {
                debug!("Request #{} ({}) evaluated", i, request.game());
            }
            BatchEntry::from(result)
        })
        .collect();

    let failed = entries
        .iter()
        .filter(|entry| matches!(entry, BatchEntry::Error { .. }))
        .count();
    info!("Evaluated {} requests ({} rejected)", entries.len(), failed);
    entries
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"[
        {"game": "wacca", "score": 990000, "level": 10.2},
        {"game": "wacca_inverse", "rate": 40.8, "level": 10.2},
        {"game": "maimaidx", "score": 101, "level": 13, "lamp": "ALL PERFECT"},
        {"game": "proseka", "perfect": 300, "level": 30, "max_combo": 300}
    ]"#;

    #[test]
    fn test_parse_and_evaluate() {
        let requests = parse(SAMPLE).unwrap();
        assert_eq!(requests.len(), 4);

        let entries = evaluate_all(&requests);
        assert!(matches!(entries[0], BatchEntry::Ok(RatingOutcome::Rating(r)) if r == 40.8));
        assert!(matches!(entries[1], BatchEntry::Ok(RatingOutcome::Score(990_000))));
        assert!(matches!(entries[2], BatchEntry::Error { .. }));
        assert!(matches!(entries[3], BatchEntry::Ok(RatingOutcome::Rating(r)) if r == 34.0));
    }

    #[test]
    fn test_entries_serialize() {
        let entries = evaluate_all(&parse(SAMPLE).unwrap());
        let json = serde_json::to_value(&entries).unwrap();

        assert_eq!(json[0]["ok"], 40.8);
        assert_eq!(json[1]["ok"], 990_000);
        assert_eq!(
            json[2]["error"]["message"],
            "A score of 101% should be an ALL PERFECT+."
        );
        assert_eq!(json[2]["error"]["context"]["lamp"], "ALL PERFECT");
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let raw = read_input(file.path().to_str().unwrap()).unwrap();
        assert_eq!(parse(&raw).unwrap().len(), 4);
    }

    #[test]
    fn test_read_input_missing_file() {
        assert!(read_input("/nonexistent/requests.json").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_game() {
        assert!(parse(r#"[{"game": "jubeat", "score": 1}]"#).is_err());
    }
}
