use chrono::{DateTime, Utc};

/// Time left until a launch, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Clamped to zero once `target` is in the past.
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        let total = (target - now).num_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }

    pub fn is_over(&self) -> bool {
        *self == Self::default()
    }

    /// `[(value, label)]` in display order
    pub fn units(&self) -> [(i64, &'static str); 4] {
        [
            (self.days, "days"),
            (self.hours, "hours"),
            (self.minutes, "minutes"),
            (self.seconds, "seconds"),
        ]
    }
}

/// Two digits at least; days can run past 99.
pub fn format_unit(value: i64) -> String {
    format!("{value:02}")
}

pub fn parse_launch(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    let at = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| anyhow::anyhow!("bad launch time {raw:?}: {e}"))?;
    Ok(at.with_timezone(&Utc))
}
