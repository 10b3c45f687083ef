use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::FixtureOptions;

/// The ten-field record every [`Strategy`](crate::Strategy) renders.
///
/// Field types mirror the fixture: two integers, a float, a double, an
/// optional long text, an exact decimal, a date-time, a time of day, a date,
/// and an optional integer series.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Always printed.
    pub value1: i32,
    /// Printed only when greater than 10.
    pub value2: i32,
    /// Printed with `Display`.
    pub value3: f32,
    /// Printed with `Display`.
    pub value4: f64,
    /// Printed verbatim; `None` prints nothing after the label.
    pub value5: Option<String>,
    /// Printed with two fixed decimals, only when greater than 20.
    pub value6: Decimal,
    /// Printed as `%Y-%m-%d %H:%M:%S`.
    pub value7: NaiveDateTime,
    /// Printed as `%H:%M:%S`.
    pub value8: NaiveTime,
    /// Printed as `%Y-%m-%d`.
    pub value9: NaiveDate,
    /// Elements printed back to back; `None` and empty print nothing.
    pub value10: Option<Vec<i32>>,
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid fixture date"),
    }
}

impl Record {
    /// Base instant of the fixture, 2024-01-01 00:00:00.
    pub const BASE_INSTANT: NaiveDateTime = NaiveDateTime::new(date(2024, 1, 1), NaiveTime::MIN);

    /// `value7` of the fixture: twelve hours after [`Self::BASE_INSTANT`].
    pub const FIXTURE_INSTANT: NaiveDateTime = NaiveDateTime::new(
        date(2024, 1, 1),
        match NaiveTime::from_hms_opt(12, 0, 0) {
            Some(time) => time,
            None => panic!("invalid fixture time"),
        },
    );

    /// The latest representable calendar date of the fixture, 9999-12-31.
    pub const MAX_DATE: NaiveDate = date(9999, 12, 31);

    /// The sample record with default [`FixtureOptions`].
    #[must_use]
    pub fn fixture() -> Self {
        Self::sample(&FixtureOptions::default(), Self::FIXTURE_INSTANT)
    }

    /// Builds the sample record sized by `options`, stamped with `instant`.
    #[must_use]
    pub fn sample(options: &FixtureOptions, instant: NaiveDateTime) -> Self {
        Self {
            value1: 100,
            value2: 200,
            value3: 333.0,
            value4: 400.0,
            value5: Some(dash_sequence(options.sequence_terms)),
            value6: Decimal::from(655),
            value7: instant,
            value8: NaiveTime::MIN,
            value9: Self::MAX_DATE,
            value10: Some((0..).take(options.series_len).collect()),
        }
    }

    /// Whether the `Value2` segment is printed.
    #[must_use]
    pub fn includes_value2(&self) -> bool {
        self.value2 > 10
    }

    /// Whether the `Value6` segment is printed.
    #[must_use]
    pub fn includes_value6(&self) -> bool {
        self.value6 > Decimal::from(20)
    }

    /// `value6` rounded to two places, half away from zero.
    #[must_use]
    pub fn value6_rounded(&self) -> Decimal {
        self.value6
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// The integer series, empty when absent.
    #[must_use]
    pub fn series(&self) -> &[i32] {
        self.value10.as_deref().unwrap_or_default()
    }
}

/// `"0-1-2-…-(terms - 1)"`, or an empty string for zero terms.
fn dash_sequence(terms: usize) -> String {
    let mut out = String::new();
    for i in 0..terms {
        if i > 0 {
            out.push('-');
        }
        out.push_str(&i.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Record, dash_sequence};
    use crate::FixtureOptions;

    #[test]
    fn fixture_sequence_shape() {
        let record = Record::fixture();
        let text = record.value5.as_deref().unwrap();
        assert!(text.starts_with("0-1-2-3-"));
        assert!(text.ends_with("-9998-9999"));
        // 38 890 digits and 9 999 dashes.
        assert_eq!(text.len(), 48_889);
        assert_eq!(record.series(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn sequence_edges() {
        assert_eq!(dash_sequence(0), "");
        assert_eq!(dash_sequence(1), "0");
        assert_eq!(dash_sequence(3), "0-1-2");
    }

    #[test]
    fn fixture_instants() {
        assert_eq!(Record::BASE_INSTANT.to_string(), "2024-01-01 00:00:00");
        assert_eq!(Record::FIXTURE_INSTANT.to_string(), "2024-01-01 12:00:00");
        assert_eq!(Record::MAX_DATE.to_string(), "9999-12-31");
    }

    #[test]
    fn thresholds() {
        let mut record = Record::sample(&FixtureOptions::default(), Record::BASE_INSTANT);
        assert!(record.includes_value2());
        assert!(record.includes_value6());
        record.value2 = 10;
        record.value6 = 20.into();
        assert!(!record.includes_value2());
        assert!(!record.includes_value6());
        record.value10 = None;
        assert!(record.series().is_empty());
    }
}
