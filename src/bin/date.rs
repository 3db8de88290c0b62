use anyhow::{anyhow, bail};
use clap::Parser;
use time::format_description::{self, well_known::Rfc3339};
use time::{Date, OffsetDateTime, UtcOffset};

use leafutils::layout::{Iso8601Precision, Rfc3339Precision, DEFAULT_LAYOUT, RFC_2822_LAYOUT};
use leafutils::strftime;

#[derive(Parser, Debug)]
#[command(name = "date", version, about = "Print the current date and time")]
struct Cli {
    /// print Coordinated Universal Time (UTC)
    #[arg(short = 'u')]
    utc: bool,
    /// display time described by STRING, not 'now'
    #[arg(long = "date", value_name = "STRING")]
    date: Option<String>,
    /// output date/time in ISO 8601 format; FMT selects the precision,
    /// 'date' when omitted. Example: 2006-08-14T02:34:56-0600
    #[arg(
        short = 'I',
        value_name = "FMT",
        value_enum,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "date"
    )]
    iso_8601: Option<Iso8601Precision>,
    /// output date/time in RFC 3339 format to the indicated precision
    #[arg(long = "rfc-3339", value_name = "FMT", value_enum)]
    rfc_3339: Option<Rfc3339Precision>,
    /// output date/time in RFC 2822 format
    #[arg(long = "rfc-2822")]
    rfc_2822: bool,
    /// custom strftime-style output pattern
    #[arg(value_name = "PATTERN")]
    pattern: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("date: {error}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.pattern.len() > 1 {
        bail!("extra operand ‘{}’", cli.pattern[1]);
    }

    // Structured flags win over a custom pattern, first match in this
    // order; the pattern applies only when none of them are set.
    let layout = if let Some(precision) = cli.iso_8601 {
        precision.layout().to_string()
    } else if let Some(precision) = cli.rfc_3339 {
        precision.layout().to_string()
    } else if cli.rfc_2822 {
        RFC_2822_LAYOUT.to_string()
    } else if let Some(pattern) = cli.pattern.first() {
        strftime::translate(pattern)
    } else {
        DEFAULT_LAYOUT.to_string()
    };

    let mut instant = match &cli.date {
        Some(text) => parse_instant(text)?,
        None => OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
    };
    if cli.utc {
        instant = instant.to_offset(UtcOffset::UTC);
    }

    let format = format_description::parse(&layout)?;
    println!("{}", instant.format(&format)?);
    Ok(())
}

/// `@N` epoch seconds, an RFC 3339 timestamp, or a bare `YYYY-MM-DD`
/// taken as local midnight.
fn parse_instant(text: &str) -> anyhow::Result<OffsetDateTime> {
    if let Some(seconds) = text.strip_prefix('@') {
        let seconds: i64 = seconds
            .parse()
            .map_err(|_| anyhow!("invalid date ‘{text}’"))?;
        return OffsetDateTime::from_unix_timestamp(seconds)
            .map_err(|_| anyhow!("invalid date ‘{text}’"));
    }
    if let Ok(instant) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(instant);
    }
    let calendar = format_description::parse("[year]-[month]-[day]")?;
    if let Ok(date) = Date::parse(text, &calendar) {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        return Ok(date.midnight().assume_offset(offset));
    }
    bail!("invalid date ‘{text}’")
}
