// Date and schedule vocabulary: conversions from plain Rust values and
// engine-convention strings into the wire types.
use chrono::{Datelike, NaiveDate};
use dqproto::datetime::{
    BrokenPeriodType, BusinessDayConvention, Calendar, CreateCalendarInput, CreateCalendarOutput,
    Date, DateGenerationMode, DateRollConvention, DayCountConvention, Frequency,
    InstrumentStartConvention, Period, StubPolicy, TimeUnit,
};

use crate::client::AnalyticsClient;
use crate::error::{DqError, Result};
use crate::transport::Engine;

pub fn to_date(date: NaiveDate) -> Date {
    Date {
        year: date.year(),
        month: date.month() as i32,
        day: date.day() as i32,
    }
}

pub fn make_date(year: i32, month: i32, day: i32) -> Date {
    Date { year, month, day }
}

/// Parses a tenor like `3M`, `1y`, `2w` or `-2d` (case-insensitive).
pub fn parse_period(text: &str) -> Result<Period> {
    let trimmed = text.trim();
    let (last_idx, unit) = trimmed
        .char_indices()
        .last()
        .ok_or_else(|| DqError::InvalidInput(format!("invalid period '{}'", text)))?;
    let length: i32 = trimmed[..last_idx]
        .parse()
        .map_err(|_| DqError::InvalidInput(format!("invalid period '{}'", text)))?;
    let units = match unit.to_ascii_uppercase() {
        'D' => TimeUnit::Days,
        'W' => TimeUnit::Weeks,
        'M' => TimeUnit::Months,
        'Y' => TimeUnit::Years,
        _ => return Err(DqError::InvalidInput(format!("invalid period '{}'", text))),
    };
    Ok(Period {
        length,
        units: units as i32,
    })
}

fn normalized(text: &str) -> String {
    text.trim().to_uppercase()
}

pub fn to_business_day_convention(text: &str) -> Result<BusinessDayConvention> {
    BusinessDayConvention::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("business day convention", text))
}

pub fn to_day_count_convention(text: &str) -> Result<DayCountConvention> {
    DayCountConvention::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("day count convention", text))
}

pub fn to_frequency(text: &str) -> Result<Frequency> {
    Frequency::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("frequency", text))
}

pub fn to_stub_policy(text: &str) -> Result<StubPolicy> {
    StubPolicy::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("stub policy", text))
}

pub fn to_broken_period_type(text: &str) -> Result<BrokenPeriodType> {
    BrokenPeriodType::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("broken period type", text))
}

pub fn to_date_generation_mode(text: &str) -> Result<DateGenerationMode> {
    DateGenerationMode::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("date generation mode", text))
}

pub fn to_date_roll_convention(text: &str) -> Result<DateRollConvention> {
    DateRollConvention::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("date roll convention", text))
}

pub fn to_instrument_start_convention(text: &str) -> Result<InstrumentStartConvention> {
    InstrumentStartConvention::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("instrument start convention", text))
}

impl<E: Engine> AnalyticsClient<E> {
    /// Registers a named holiday calendar with the engine.
    pub async fn create_calendar(
        &self,
        name: &str,
        holidays: Vec<Date>,
        special_business_days: Vec<Date>,
    ) -> Result<()> {
        let input = CreateCalendarInput {
            calendar: Some(Calendar {
                name: name.to_string(),
                holidays,
                special_business_days,
            }),
        };
        let _: CreateCalendarOutput = self.call("CREATE_CALENDAR", &input).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tenors() {
        assert_eq!(
            parse_period("3m").unwrap(),
            Period {
                length: 3,
                units: TimeUnit::Months as i32
            }
        );
        assert_eq!(
            parse_period("-2D").unwrap(),
            Period {
                length: -2,
                units: TimeUnit::Days as i32
            }
        );
        assert_eq!(
            parse_period("10Y").unwrap(),
            Period {
                length: 10,
                units: TimeUnit::Years as i32
            }
        );
    }

    #[test]
    fn rejects_malformed_tenors() {
        assert!(parse_period("").is_err());
        assert!(parse_period("3x").is_err());
        assert!(parse_period("m").is_err());
    }

    #[test]
    fn rejects_non_ascii_tenors_without_panicking() {
        // Multi-byte trailing characters, e.g. from a hand-edited quote file.
        assert!(parse_period("3µ").is_err());
        assert!(parse_period("3年").is_err());
        assert!(parse_period("µ").is_err());
    }

    #[test]
    fn enum_names_are_case_insensitive() {
        assert_eq!(
            to_frequency("quarterly").unwrap(),
            Frequency::Quarterly
        );
        assert_eq!(
            to_business_day_convention("modified_following").unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert!(to_day_count_convention("ACT_366").is_err());
    }

    #[test]
    fn converts_chrono_dates() {
        let date = to_date(NaiveDate::from_ymd_opt(2022, 3, 9).unwrap());
        assert_eq!(date, make_date(2022, 3, 9));
    }
}
