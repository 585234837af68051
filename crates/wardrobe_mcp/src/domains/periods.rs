use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};

use wardrobe_store::WearEvent;

/// Calendar bucket size for period counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodGranularity {
    Week,
    Month,
}

impl FromStr for PeriodGranularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(PeriodGranularity::Week),
            "month" => Ok(PeriodGranularity::Month),
            other => Err(format!(
                "unknown granularity {other:?}: expected one of week, month"
            )),
        }
    }
}

/// One calendar bucket and how many events fell into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodBucket {
    pub bucket: NaiveDate,
    pub count: u64,
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Count whole events (not incidences) per calendar bucket.
///
/// Week buckets anchor on the ISO-week Monday, month buckets on the first
/// of the month. Buckets nothing mapped to are not synthesized, so the
/// output is sparse; keys come back ascending.
pub fn period_buckets(events: &[WearEvent], granularity: PeriodGranularity) -> Vec<PeriodBucket> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for event in events {
        let key = match granularity {
            PeriodGranularity::Week => week_start(event.date),
            PeriodGranularity::Month => month_start(event.date),
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(bucket, count)| PeriodBucket { bucket, count })
        .collect()
}
