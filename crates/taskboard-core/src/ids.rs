//! Identifier and timestamp generation.
//!
//! Every task and activity log entry gets an opaque string id and an ISO-8601
//! timestamp at creation. The [`Stamper`] trait lets callers swap the system
//! clock and random ids for a deterministic source.

use chrono::{DateTime, SubsecRound, TimeZone, Utc};
use uuid::Uuid;

/// Generate a fresh opaque identifier.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Current UTC time truncated to millisecond precision.
pub fn timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Serde helper writing timestamps as `2024-05-01T10:00:00.000Z`, always
/// with three fractional digits. Use with `#[serde(with = "iso_millis")]`.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

/// Source of ids and timestamps for newly created records.
pub trait Stamper {
    fn next_id(&mut self) -> String;
    fn now(&mut self) -> DateTime<Utc>;
}

/// Random ids and the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStamper;

impl Stamper for SystemStamper {
    fn next_id(&mut self) -> String {
        generate_id()
    }

    fn now(&mut self) -> DateTime<Utc> {
        timestamp()
    }
}

/// Deterministic stamper: ids `<prefix>-1`, `<prefix>-2`, ... and a clock that
/// advances one second per call from a fixed epoch.
#[derive(Debug, Clone)]
pub struct SequentialStamper {
    prefix: String,
    counter: u64,
    ticks: i64,
    epoch: DateTime<Utc>,
}

impl SequentialStamper {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
            ticks: 0,
            // 2024-01-01T00:00:00Z
            epoch: Utc.timestamp_opt(1_704_067_200, 0).single().unwrap_or_default(),
        }
    }
}

impl Default for SequentialStamper {
    fn default() -> Self {
        Self::new("id")
    }
}

impl Stamper for SequentialStamper {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }

    fn now(&mut self) -> DateTime<Utc> {
        let at = self.epoch + chrono::Duration::seconds(self.ticks);
        self.ticks += 1;
        at
    }
}
