//! Fixed output layouts for the `date` binary.
//!
//! Layouts are written in the vocabulary consumed by
//! [`time::format_description::parse`]. Precision keywords are closed
//! enumerations so an unrecognized keyword is rejected at argument
//! parse time instead of producing an empty layout.

use clap::ValueEnum;

/// Locale-neutral default, in the shape of a classic Unix `date` dump.
/// The trailing component is a numeric offset; the host time type does
/// not carry zone abbreviations.
pub const DEFAULT_LAYOUT: &str = "[weekday repr:short] [month repr:short] [day padding:space] \
     [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute] [year]";

pub const RFC_2822_LAYOUT: &str = "[weekday repr:short], [day] [month repr:short] [year] \
     [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Iso8601Precision {
    Date,
    Hours,
    Minutes,
    Seconds,
    Ns,
}

impl Iso8601Precision {
    /// Example at `seconds` precision: `2006-08-14T02:34:56-0600`.
    pub fn layout(self) -> &'static str {
        match self {
            Iso8601Precision::Date => "[year]-[month]-[day]",
            Iso8601Precision::Hours => {
                "[year]-[month]-[day]T[hour][offset_hour sign:mandatory][offset_minute]"
            }
            Iso8601Precision::Minutes => {
                "[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory][offset_minute]"
            }
            Iso8601Precision::Seconds => {
                "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
            }
            Iso8601Precision::Ns => {
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9][offset_hour sign:mandatory][offset_minute]"
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Rfc3339Precision {
    Date,
    Seconds,
    Ns,
}

impl Rfc3339Precision {
    pub fn layout(self) -> &'static str {
        match self {
            Rfc3339Precision::Date => "[year]-[month]-[day]",
            Rfc3339Precision::Seconds => {
                "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
            }
            Rfc3339Precision::Ns => {
                "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:9][offset_hour sign:mandatory][offset_minute]"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Iso8601Precision, Rfc3339Precision, DEFAULT_LAYOUT, RFC_2822_LAYOUT};
    use time::format_description;
    use time::{Date, Month, OffsetDateTime, UtcOffset};

    fn sample() -> OffsetDateTime {
        Date::from_calendar_date(2006, Month::August, 14)
            .expect("valid date")
            .with_hms(2, 34, 56)
            .expect("valid time")
            .assume_offset(UtcOffset::from_hms(-6, 0, 0).expect("valid offset"))
    }

    fn render(layout: &str) -> String {
        let format = format_description::parse(layout).expect("layout parses");
        sample().format(&format).expect("layout formats")
    }

    #[test]
    fn iso_layouts_render_to_the_documented_shapes() {
        assert_eq!(render(Iso8601Precision::Date.layout()), "2006-08-14");
        assert_eq!(render(Iso8601Precision::Hours.layout()), "2006-08-14T02-0600");
        assert_eq!(render(Iso8601Precision::Minutes.layout()), "2006-08-14T02:34-0600");
        assert_eq!(
            render(Iso8601Precision::Seconds.layout()),
            "2006-08-14T02:34:56-0600"
        );
        assert_eq!(
            render(Iso8601Precision::Ns.layout()),
            "2006-08-14T02:34:56.000000000-0600"
        );
    }

    #[test]
    fn rfc3339_layouts_use_a_space_separator() {
        assert_eq!(render(Rfc3339Precision::Date.layout()), "2006-08-14");
        assert_eq!(
            render(Rfc3339Precision::Seconds.layout()),
            "2006-08-14 02:34:56-0600"
        );
        assert_eq!(
            render(Rfc3339Precision::Ns.layout()),
            "2006-08-14 02:34:56.000000000-0600"
        );
    }

    #[test]
    fn fixed_layouts_render() {
        assert_eq!(render(RFC_2822_LAYOUT), "Mon, 14 Aug 2006 02:34:56 -0600");
        assert_eq!(render(DEFAULT_LAYOUT), "Mon Aug 14 02:34:56 -0600 2006");
    }
}
