//! Core record types for the health monitoring dashboard
//!
//! - `MetricRecord`: one day's set of health measurements
//! - `AlertRecord`: a flagged out-of-range condition
//! - `MetricKind`: the individual series a record can be projected onto

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// One day of health measurements
///
/// Records arrive from the store newest-first. `weight` and
/// `water_intake` are numeric columns that some store configurations
/// return as text, so both forms are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricRecord {
    pub id: String,
    #[serde(deserialize_with = "deserialize_metric_date")]
    pub metric_date: NaiveDate,
    pub heart_rate: i32,
    pub blood_pressure_systolic: i32,
    pub blood_pressure_diastolic: i32,
    pub blood_glucose: i32,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub weight: f64,
    pub steps: u32,
    pub sleep_hours: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub water_intake: f64,
}

/// Severity of an alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Critical,
    Warning,
    /// Anything the store sends that is not critical or warning
    #[serde(other)]
    Informational,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertType::Critical => write!(f, "critical"),
            AlertType::Warning => write!(f, "warning"),
            AlertType::Informational => write!(f, "informational"),
        }
    }
}

/// A notification tied to an out-of-range metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertRecord {
    pub id: String,
    pub alert_type: AlertType,
    pub message: String,
    #[serde(default)]
    pub metric_value: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl AlertRecord {
    /// The associated metric value, if one was recorded
    pub fn metric_value(&self) -> Option<&str> {
        self.metric_value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Where a record set came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    /// Read from the hosted store
    Store,
    /// Generated locally because the store had nothing to offer
    Synthetic,
}

impl std::fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataOrigin::Store => write!(f, "store"),
            DataOrigin::Synthetic => write!(f, "synthetic"),
        }
    }
}

/// Everything the dashboard needs, as acquired for one view
#[derive(Debug, Clone, Serialize)]
pub struct HealthSnapshot {
    /// Newest first; never empty once acquisition has run
    pub metrics: Vec<MetricRecord>,
    /// Newest first, read and unread
    pub alerts: Vec<AlertRecord>,
    pub origin: DataOrigin,
}

impl HealthSnapshot {
    /// The most recent record, i.e. the first one
    pub fn latest(&self) -> Option<&MetricRecord> {
        self.metrics.first()
    }

    /// Alerts that have not been read, in store order
    pub fn unread_alerts(&self) -> impl Iterator<Item = &AlertRecord> {
        self.alerts.iter().filter(|a| !a.is_read)
    }
}

/// A single numeric series that can be read off a `MetricRecord`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    HeartRate,
    BloodPressureSystolic,
    BloodPressureDiastolic,
    BloodGlucose,
    Weight,
    Steps,
    SleepHours,
    WaterIntake,
}

impl MetricKind {
    /// Get all metric kinds for iteration
    pub fn all() -> &'static [MetricKind] {
        &[
            MetricKind::HeartRate,
            MetricKind::BloodPressureSystolic,
            MetricKind::BloodPressureDiastolic,
            MetricKind::BloodGlucose,
            MetricKind::Weight,
            MetricKind::Steps,
            MetricKind::SleepHours,
            MetricKind::WaterIntake,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::HeartRate => "Heart Rate",
            MetricKind::BloodPressureSystolic => "Systolic",
            MetricKind::BloodPressureDiastolic => "Diastolic",
            MetricKind::BloodGlucose => "Blood Glucose",
            MetricKind::Weight => "Weight",
            MetricKind::Steps => "Daily Steps",
            MetricKind::SleepHours => "Sleep Duration",
            MetricKind::WaterIntake => "Water Intake",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::HeartRate => "BPM",
            MetricKind::BloodPressureSystolic | MetricKind::BloodPressureDiastolic => "mmHg",
            MetricKind::BloodGlucose => "mg/dL",
            MetricKind::Weight => "kg",
            MetricKind::Steps => "steps",
            MetricKind::SleepHours => "h",
            MetricKind::WaterIntake => "L",
        }
    }

    /// Read this metric's value from a record
    pub fn value(&self, record: &MetricRecord) -> f64 {
        match self {
            MetricKind::HeartRate => record.heart_rate as f64,
            MetricKind::BloodPressureSystolic => record.blood_pressure_systolic as f64,
            MetricKind::BloodPressureDiastolic => record.blood_pressure_diastolic as f64,
            MetricKind::BloodGlucose => record.blood_glucose as f64,
            MetricKind::Weight => record.weight,
            MetricKind::Steps => record.steps as f64,
            MetricKind::SleepHours => record.sleep_hours,
            MetricKind::WaterIntake => record.water_intake,
        }
    }

    /// Project a newest-first record list onto this metric, keeping order
    pub fn series(&self, records: &[MetricRecord]) -> Vec<f64> {
        records.iter().map(|r| self.value(r)).collect()
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse a store date that may be a plain date or a full timestamp
pub fn parse_metric_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    // timestamp without zone
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }

    Err(format!("unrecognised metric date '{}'", raw))
}

fn deserialize_metric_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_metric_date(&raw).map_err(de::Error::custom)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(v) => Ok(v),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid decimal '{}'", s))),
    }
}
