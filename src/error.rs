use thiserror::Error;

pub type Result<T> = std::result::Result<T, EphemerisError>;

/// Failures of a sunrise/sunset query.
///
/// The two polar variants carry the hour-angle cosine that fell outside
/// `[-1, 1]`, so callers can tell how far the sun stayed from the horizon.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("kind=invalid_timestamp: {message}")]
    InvalidTimestamp { message: String },
    #[error("kind=invalid_offset: UTC offset of {seconds}s is out of range")]
    InvalidOffset { seconds: i64 },
    /// Hour-angle cosine above 1: the sun stays below the horizon all day.
    #[error("kind=polar_night: no sunrise on this date at this latitude (cos H = {cos_hour_angle})")]
    PolarNight { cos_hour_angle: f64 },
    /// Hour-angle cosine below -1: the sun stays above the horizon all day.
    #[error("kind=polar_day: no sunset on this date at this latitude (cos H = {cos_hour_angle})")]
    PolarDay { cos_hour_angle: f64 },
    #[error("kind=non_finite: {quantity} is not a finite number")]
    NonFinite { quantity: &'static str },
}

impl EphemerisError {
    pub fn kind(&self) -> &'static str {
        match self {
            EphemerisError::InvalidTimestamp { .. } => "invalid_timestamp",
            EphemerisError::InvalidOffset { .. } => "invalid_offset",
            EphemerisError::PolarNight { .. } => "polar_night",
            EphemerisError::PolarDay { .. } => "polar_day",
            EphemerisError::NonFinite { .. } => "non_finite",
        }
    }

    pub fn is_polar(&self) -> bool {
        matches!(
            self,
            EphemerisError::PolarNight { .. } | EphemerisError::PolarDay { .. }
        )
    }

    pub(crate) fn invalid_timestamp(message: impl Into<String>) -> Self {
        EphemerisError::InvalidTimestamp {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_message_prefix() {
        let errors = [
            EphemerisError::invalid_timestamp("2023-02-30"),
            EphemerisError::InvalidOffset { seconds: 90_000 },
            EphemerisError::PolarNight { cos_hour_angle: 1.5 },
            EphemerisError::PolarDay { cos_hour_angle: -1.5 },
            EphemerisError::NonFinite { quantity: "latitude" },
        ];
        for e in &errors {
            let prefix = format!("kind={}:", e.kind());
            assert!(e.to_string().starts_with(&prefix), "{}", e);
        }
    }

    #[test]
    fn only_domain_failures_are_polar() {
        assert!(EphemerisError::PolarNight { cos_hour_angle: 1.2 }.is_polar());
        assert!(EphemerisError::PolarDay { cos_hour_angle: -1.2 }.is_polar());
        assert!(!EphemerisError::NonFinite { quantity: "declination" }.is_polar());
        assert!(!EphemerisError::invalid_timestamp("bad").is_polar());
    }
}
