//! Subcommand handlers. Each returns the text printed on stdout.

use std::fmt::Write;

use anyhow::{Context, Result, anyhow};
use bikram_core::{
    ALL_MONTHS, BsDate, FIRST_BS_YEAR, LAST_BS_YEAR, days_in_month, days_in_year, month_lengths,
};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::cli::Command;
use crate::config::OutputConfig;

pub fn execute(command: Command, output: &OutputConfig) -> Result<String> {
    match command {
        Command::ToBs { date, format } => {
            let ad = parse_ad(&date)?;
            let bs = BsDate::from_ad(ad).with_context(|| format!("cannot convert AD {ad}"))?;
            info!(%ad, %bs, "converted AD to BS");
            render(bs, format.as_deref(), output)
        }
        Command::ToAd { date, format } => {
            let bs = parse_bs(&date)?;
            let ad = bs.ad();
            info!(%bs, %ad, "converted BS to AD");
            let pattern = format.as_deref().unwrap_or("%Y-%m-%d");
            let mut out = String::new();
            write!(out, "{}", ad.format(pattern))
                .map_err(|_| anyhow!("invalid AD format pattern {pattern:?}"))?;
            Ok(out)
        }
        Command::Today { format } => {
            let bs = BsDate::today().context("today is outside the BS table")?;
            debug!(%bs, "today");
            render(bs, format.as_deref(), output)
        }
        Command::Format { date, pattern } => {
            let bs = parse_bs(&date)?;
            bs.format(&pattern)
                .with_context(|| format!("cannot format with {pattern:?}"))
        }
        Command::Parse { text, pattern } => {
            let bs = BsDate::parse(&text, &pattern)
                .with_context(|| format!("cannot parse {text:?}"))?;
            Ok(format!("BS {bs} = AD {}", bs.ad()))
        }
        Command::Add { date, days, format } => {
            let bs = parse_bs(&date)?;
            let shifted = bs
                .add_days(days)
                .with_context(|| format!("cannot add {days} days to {bs}"))?;
            info!(from = %bs, days, to = %shifted, "shifted date");
            render(shifted, format.as_deref(), output)
        }
        Command::Diff { a, b } => {
            let (a, b) = (parse_bs(&a)?, parse_bs(&b)?);
            Ok((a - b).to_string())
        }
        Command::Year { year } => year_table(year),
        Command::Range => range(),
    }
}

fn parse_ad(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("invalid AD date {text:?}, expected YYYY-MM-DD"))
}

fn parse_bs(text: &str) -> Result<BsDate> {
    text.parse::<BsDate>()
        .with_context(|| format!("invalid BS date {text:?}, expected YYYY-MM-DD"))
}

/// Format `bs` with the flag pattern, else the configured one.
fn render(bs: BsDate, format: Option<&str>, output: &OutputConfig) -> Result<String> {
    let pattern = format.unwrap_or(&output.format);
    let mut out = bs
        .format(pattern)
        .with_context(|| format!("cannot format with {pattern:?}"))?;
    if output.show_ad {
        write!(out, " (AD {})", bs.ad())?;
    }
    Ok(out)
}

fn year_table(year: i32) -> Result<String> {
    let lengths = month_lengths(year).with_context(|| format!("no data for BS {year}"))?;
    let mut out = String::new();
    for (month, days) in ALL_MONTHS.iter().zip(lengths) {
        writeln!(out, "{:<8} {days}", month.name())?;
    }
    write!(out, "{:<8} {}", "Total", days_in_year(year)?)?;
    Ok(out)
}

fn range() -> Result<String> {
    let first = BsDate::new(FIRST_BS_YEAR, 1, 1)?;
    let last = BsDate::new(LAST_BS_YEAR, 12, days_in_month(LAST_BS_YEAR, 12)?)?;
    Ok(format!(
        "BS {first} .. {last}\nAD {} .. {}",
        first.ad(),
        last.ad()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: Command) -> Result<String> {
        execute(command, &OutputConfig::default())
    }

    #[test]
    fn to_bs_default_pattern() {
        let out = run(Command::ToBs {
            date: "2016-11-13".into(),
            format: None,
        });
        assert_eq!(out.unwrap(), "2073-07-28");
    }

    #[test]
    fn to_bs_with_format_and_show_ad() {
        let output = OutputConfig {
            format: "%d %B %Y".into(),
            show_ad: true,
        };
        let cmd = || Command::ToBs {
            date: "2016-11-13".into(),
            format: None,
        };
        assert_eq!(
            execute(cmd(), &output).unwrap(),
            "28 Kartik 2073 (AD 2016-11-13)"
        );
        let flagged = Command::ToBs {
            date: "2016-11-13".into(),
            format: Some("%Yne".into()),
        };
        assert_eq!(execute(flagged, &output).unwrap(), "२०७३ (AD 2016-11-13)");
    }

    #[test]
    fn to_ad() {
        let out = run(Command::ToAd {
            date: "2073-7-28".into(),
            format: None,
        });
        assert_eq!(out.unwrap(), "2016-11-13");
        let out = run(Command::ToAd {
            date: "2073-07-28".into(),
            format: Some("%d/%m/%Y".into()),
        });
        assert_eq!(out.unwrap(), "13/11/2016");
    }

    #[test]
    fn format_and_parse() {
        let out = run(Command::Format {
            date: "2076-01-04".into(),
            pattern: "%Yne %Bne %-dne".into(),
        });
        assert_eq!(out.unwrap(), "२०७६ वैशाख  ४");
        let out = run(Command::Parse {
            text: "2073,Kartik,28".into(),
            pattern: "%Y,%B,%d".into(),
        });
        assert_eq!(out.unwrap(), "BS 2073-07-28 = AD 2016-11-13");
    }

    #[test]
    fn add_and_diff() {
        let out = run(Command::Add {
            date: "2052-06-06".into(),
            days: -5,
            format: None,
        });
        assert_eq!(out.unwrap(), "2052-06-01");
        let out = run(Command::Diff {
            a: "2074-10-11".into(),
            b: "2070-10-11".into(),
        });
        assert_eq!(out.unwrap(), "1461");
    }

    #[test]
    fn year_and_range() {
        let out = run(Command::Year { year: 2073 }).unwrap();
        assert!(out.starts_with("Baisakh  31\nJestha   32\n"));
        assert!(out.ends_with("Total    366"));
        assert_eq!(
            run(Command::Range).unwrap(),
            "BS 2000-01-01 .. 2090-12-30\nAD 1943-04-14 .. 2034-04-13"
        );
    }

    #[test]
    fn today_prints_a_bs_date() {
        match run(Command::Today { format: None }) {
            Ok(text) => assert!(text.parse::<BsDate>().is_ok(), "{text}"),
            // once the clock passes the last table day
            Err(err) => assert!(format!("{err:#}").contains("today is outside the BS table")),
        }
    }

    #[test]
    fn errors_carry_context() {
        let err = run(Command::ToBs {
            date: "1900-01-01".into(),
            format: None,
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("cannot convert AD 1900-01-01"));

        let err = run(Command::ToAd {
            date: "2073-07-32".into(),
            format: None,
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid BS date"));

        assert!(run(Command::Year { year: 2091 }).is_err());
        assert!(
            run(Command::Format {
                date: "2073-07-28".into(),
                pattern: "%Q".into(),
            })
            .is_err()
        );
    }
}
