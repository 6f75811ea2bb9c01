use chrono::{DateTime, NaiveDateTime, Utc};

// Naive forms are read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unparsable timestamp: `{0}`")]
pub struct UnparsableTimestamp(pub String);

/// Parse a client supplied timestamp.
///
/// Accepts RFC 3339 with any offset, or a zone-less date time which is taken to be UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, UnparsableTimestamp> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| UnparsableTimestamp(raw.to_string()))
}
