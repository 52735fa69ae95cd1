//! Whole-table consistency checks: every BS day and every AD day in range.

use bikram_core::{
    BsDate, FIRST_BS_YEAR, LAST_BS_YEAR, ad_to_bs, bs_to_ad, days_in_month, days_in_year,
};
use chrono::{NaiveDate, TimeDelta};

fn ad(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Every BS day maps to the AD day after its predecessor's, and back.
#[test]
fn every_bs_day_round_trips() {
    let mut expected = ad(1943, 4, 14);
    for year in FIRST_BS_YEAR..=LAST_BS_YEAR {
        for month in 1..=12 {
            for day in 1..=days_in_month(year, month).unwrap() {
                let got = bs_to_ad(year, month, day).unwrap();
                assert_eq!(got, expected, "BS {year}-{month}-{day}");
                assert_eq!(ad_to_bs(got).unwrap().as_tuple(), (year, month, day));
                expected += TimeDelta::days(1);
            }
        }
    }
    assert_eq!(expected, ad(2034, 4, 14));
}

#[test]
fn every_ad_day_round_trips() {
    let mut date = ad(1943, 4, 14);
    let mut prev: Option<BsDate> = None;
    while date <= ad(2034, 4, 13) {
        let bs = BsDate::from_ad(date).unwrap();
        assert_eq!(bs.ad(), date);
        if let Some(p) = prev {
            assert!(p < bs, "{p} !< {bs}");
            assert_eq!(bs - p, 1);
        }
        prev = Some(bs);
        date += TimeDelta::days(1);
    }
}

#[test]
fn year_lengths_match_ad_span() {
    for year in FIRST_BS_YEAR..LAST_BS_YEAR {
        let start = bs_to_ad(year, 1, 1).unwrap();
        let next = bs_to_ad(year + 1, 1, 1).unwrap();
        let span = next.signed_duration_since(start).num_days();
        assert_eq!(span, i64::from(days_in_year(year).unwrap()), "BS {year}");
    }
}

#[test]
fn arithmetic_agrees_with_chrono() {
    let base = BsDate::new(2050, 5, 15).unwrap();
    for n in [-3000, -365, -31, -1, 0, 1, 29, 366, 5000] {
        let shifted = base.add_days(n).unwrap();
        assert_eq!(shifted.ad(), base.ad() + TimeDelta::days(n), "n = {n}");
        assert_eq!(shifted - base, n);
        assert_eq!(shifted.sub_days(n), Ok(base));
    }
}

#[test]
fn same_month_subtraction_is_day_difference() {
    let a = BsDate::new(2073, 3, 4).unwrap();
    let b = BsDate::new(2073, 3, 25).unwrap();
    assert_eq!(b - a, 21);
    assert_eq!(a - b, -21);
}

#[test]
fn boundaries_are_rejected() {
    assert!(bs_to_ad(1999, 12, 30).unwrap_err().is_out_of_range());
    assert!(bs_to_ad(2091, 1, 1).unwrap_err().is_out_of_range());
    let short = (1..=12)
        .find(|&m| days_in_month(2073, m).unwrap() == 30)
        .unwrap();
    assert!(bs_to_ad(2073, short, 31).unwrap_err().is_invalid_date());
    assert!(bs_to_ad(2073, short, 32).unwrap_err().is_invalid_date());
}
