// Grid configuration
// Defines the coordinate system shared by all rendered schedule cards

use thiserror::Error;

/// Tolerance for deciding whether a fractional-hour value lands exactly on
/// a grid boundary. Hours arrive as parsed decimals (e.g. 8.5), so anything
/// further off than this is real misalignment, not float noise.
pub const HOUR_EPSILON: f64 = 1e-6;

#[derive(Debug, Error, PartialEq)]
pub enum GridConfigError {
    #[error("grid needs at least one day column")]
    NoDays,

    #[error("time increment must be positive, got {0}")]
    NonPositiveIncrement(f64),

    #[error("day end hour {end} must be after day start hour {start}")]
    EmptyDayRange { start: f64, end: f64 },

    #[error(
        "day range {start}..{end} is not an exact multiple of the {increment} hour increment"
    )]
    PartialTrailingRow {
        start: f64,
        end: f64,
        increment: f64,
    },
}

/// Immutable per-render grid configuration: ordered day columns plus the
/// shared hour range and row increment.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Day labels in column order; order is significant.
    pub days: Vec<String>,
    pub day_start_hour: f64,
    pub day_end_hour: f64,
    /// Row height in hours, e.g. 0.5 for half-hour rows.
    pub time_increment: f64,
}

impl GridConfig {
    /// Build a validated configuration.
    ///
    /// The day range must divide evenly into increments: a partial trailing
    /// row is rejected here instead of being silently dropped by the row
    /// count derivation.
    pub fn new(
        days: Vec<String>,
        day_start_hour: f64,
        day_end_hour: f64,
        time_increment: f64,
    ) -> Result<Self, GridConfigError> {
        let config = Self {
            days,
            day_start_hour,
            day_end_hour,
            time_increment,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GridConfigError> {
        if self.days.is_empty() {
            return Err(GridConfigError::NoDays);
        }
        if self.time_increment <= 0.0 {
            return Err(GridConfigError::NonPositiveIncrement(self.time_increment));
        }
        if self.day_end_hour <= self.day_start_hour {
            return Err(GridConfigError::EmptyDayRange {
                start: self.day_start_hour,
                end: self.day_end_hour,
            });
        }

        let rows = (self.day_end_hour - self.day_start_hour) / self.time_increment;
        if (rows - rows.round()).abs() > HOUR_EPSILON {
            return Err(GridConfigError::PartialTrailingRow {
                start: self.day_start_hour,
                end: self.day_end_hour,
                increment: self.time_increment,
            });
        }

        Ok(())
    }

    /// Number of time rows. Exact, because validation rejects partial rows.
    pub fn num_rows(&self) -> usize {
        ((self.day_end_hour - self.day_start_hour) / self.time_increment).round() as usize
    }
}

/// Format a fractional hour as an `HH:MM` label, for any increment.
pub fn hour_label(hour: f64) -> String {
    let mut whole = hour.floor();
    let mut minutes = ((hour - whole) * 60.0).round();
    if minutes >= 60.0 {
        whole += 1.0;
        minutes -= 60.0;
    }
    format!("{:02}:{:02}", whole as i64, minutes as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn weekdays() -> Vec<String> {
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
            .iter()
            .map(|d| d.to_string())
            .collect()
    }

    #[test]
    fn test_valid_config() {
        let config = GridConfig::new(weekdays(), 8.0, 18.0, 0.5).unwrap();
        assert_eq!(config.num_rows(), 20);
    }

    #[test]
    fn test_num_rows_hourly_increment() {
        let config = GridConfig::new(weekdays(), 8.0, 17.0, 1.0).unwrap();
        assert_eq!(config.num_rows(), 9);
    }

    #[test]
    fn test_no_days_rejected() {
        let result = GridConfig::new(Vec::new(), 8.0, 18.0, 0.5);
        assert_eq!(result.unwrap_err(), GridConfigError::NoDays);
    }

    #[test_case(0.0 ; "zero increment")]
    #[test_case(-0.5 ; "negative increment")]
    fn test_bad_increment_rejected(increment: f64) {
        let result = GridConfig::new(weekdays(), 8.0, 18.0, increment);
        assert!(matches!(
            result.unwrap_err(),
            GridConfigError::NonPositiveIncrement(_)
        ));
    }

    #[test_case(18.0, 18.0 ; "equal bounds")]
    #[test_case(18.0, 8.0 ; "inverted bounds")]
    fn test_empty_range_rejected(start: f64, end: f64) {
        let result = GridConfig::new(weekdays(), start, end, 0.5);
        assert!(matches!(
            result.unwrap_err(),
            GridConfigError::EmptyDayRange { .. }
        ));
    }

    #[test]
    fn test_partial_trailing_row_rejected() {
        // 8.0..18.25 leaves half of a 0.5h row over
        let result = GridConfig::new(weekdays(), 8.0, 18.25, 0.5);
        assert!(matches!(
            result.unwrap_err(),
            GridConfigError::PartialTrailingRow { .. }
        ));
    }

    #[test]
    fn test_hour_label_whole_and_half() {
        assert_eq!(hour_label(8.0), "08:00");
        assert_eq!(hour_label(8.5), "08:30");
        assert_eq!(hour_label(16.0), "16:00");
    }

    #[test]
    fn test_hour_label_quarter_increment() {
        assert_eq!(hour_label(9.25), "09:15");
        assert_eq!(hour_label(9.75), "09:45");
    }

    #[test]
    fn test_hour_label_rounds_float_noise() {
        assert_eq!(hour_label(9.999_999_9), "10:00");
    }
}
