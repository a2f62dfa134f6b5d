use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One intraday observation: wall-clock `HH:MM` and the percentage change at that time.
///
/// Decoding is lenient. A malformed field does not reject the sample; it turns it into an
/// invalid one that the geometry later skips.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub time: String,
    pub pct: f64,
}

impl Sample {
    pub fn new(time: impl Into<String>, pct: f64) -> Self {
        Self {
            time: time.into(),
            pct,
        }
    }

    pub fn has_value(&self) -> bool {
        self.pct.is_finite()
    }
}

impl<'de> Deserialize<'de> for Sample {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self {
            time: value
                .get("time")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            pct: value.get("pct").and_then(Value::as_f64).unwrap_or(f64::NAN),
        })
    }
}

/// A dated, time-ordered list of samples for one instrument.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    pub points: Vec<Sample>,
}

impl TrendSeries {
    /// Builds a series keeping at most the `max_points` most recent samples.
    pub fn new(date: impl Into<String>, points: Vec<Sample>, max_points: usize) -> Self {
        let mut series = Self {
            date: date.into(),
            points,
        };
        series.truncate_front(max_points);
        series
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.points.last()
    }

    /// Drops the oldest samples so that at most `max_points` remain.
    pub fn truncate_front(&mut self, max_points: usize) {
        if self.points.len() > max_points {
            let excess = self.points.len() - max_points;
            tracing::trace!(excess, max_points, "dropping oldest samples");
            self.points.drain(..excess);
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}
