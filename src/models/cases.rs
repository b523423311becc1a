use super::error::AppError;
use super::selection::Selection;
use crate::config::Config;
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::fmt;

/// Cumulative case counts for every county on one day
#[derive(Clone, Debug, PartialEq)]
pub struct DailyRecord {
    pub date: String,
    counts: Vec<(String, u64)>,
}

impl DailyRecord {
    pub fn new(date: impl Into<String>, counts: Vec<(String, u64)>) -> Self {
        Self {
            date: date.into(),
            counts,
        }
    }

    /// Case count for a county, if the record has one
    pub fn cases(&self, county: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|(name, _)| name == county)
            .map(|(_, cases)| *cases)
    }

    /// County names in source order
    pub fn counties(&self) -> impl Iterator<Item = &str> {
        self.counts.iter().map(|(name, _)| name.as_str())
    }

    fn snapshot(&self) -> CasesSnapshot {
        CasesSnapshot(self.counts.iter().cloned().collect())
    }
}

// The source format is a flat object: `date` plus one integer per county.
// Counties are kept in source order, which is the tie-break when ranking.
impl<'de> Deserialize<'de> for DailyRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DailyRecordVisitor)
    }
}

struct DailyRecordVisitor;

impl<'de> Visitor<'de> for DailyRecordVisitor {
    type Value = DailyRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with a `date` string and integer county counts")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut date: Option<String> = None;
        let mut counts: Vec<(String, Option<u64>)> =
            Vec::with_capacity(map.size_hint().unwrap_or(0));
        let mut positions: HashMap<String, usize> = HashMap::new();

        while let Some(key) = map.next_key::<String>()? {
            if key == "date" {
                if date.is_some() {
                    return Err(de::Error::duplicate_field("date"));
                }
                date = Some(map.next_value()?);
                continue;
            }

            // A repeated county keeps its first position and its last value
            let cases = map.next_value::<Option<u64>>()?;
            match positions.get(&key) {
                Some(&index) => counts[index].1 = cases,
                None => {
                    positions.insert(key.clone(), counts.len());
                    counts.push((key, cases));
                }
            }
        }

        let date = date.ok_or_else(|| de::Error::missing_field("date"))?;
        let counts = counts
            .into_iter()
            .filter_map(|(name, cases)| cases.map(|cases| (name, cases)))
            .collect();
        Ok(DailyRecord { date, counts })
    }
}

/// Case counts for all counties at a single day
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CasesSnapshot(HashMap<String, u64>);

impl CasesSnapshot {
    pub fn get(&self, county: &str) -> Option<u64> {
        self.0.get(county).copied()
    }
}

/// Week-over-week change in cumulative cases
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Growth {
    /// Rounded percentage change
    Percent(i64),
    /// No cases a week ago, some now
    New,
}

impl Growth {
    /// Computes growth from last week's count to this week's, rounding
    /// half toward positive infinity.
    pub fn between(previous: u64, current: u64) -> Self {
        if previous == 0 {
            return if current == 0 {
                Self::Percent(0)
            } else {
                Self::New
            };
        }

        let change = (current as f64 - previous as f64) * 100.0 / previous as f64;
        Self::Percent((change + 0.5).floor() as i64)
    }

    /// Returns the label shown in the table
    pub fn label(&self) -> String {
        match self {
            Self::Percent(n) if *n >= 0 => format!("+{n}%"),
            Self::Percent(n) => format!("{n}%"),
            Self::New => "new".to_string(),
        }
    }

    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Percent(n) if *n > 0 => "growth-up",
            Self::Percent(0) => "growth-flat",
            Self::Percent(_) => "growth-down",
            Self::New => "growth-new",
        }
    }
}

/// Growth for all counties between two snapshots
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GrowthSnapshot(HashMap<String, Growth>);

impl GrowthSnapshot {
    fn between(previous: &CasesSnapshot, current: &CasesSnapshot) -> Self {
        Self(
            current
                .0
                .iter()
                .map(|(county, &now)| {
                    let before = previous.get(county).unwrap_or(0);
                    (county.clone(), Growth::between(before, now))
                })
                .collect(),
        )
    }

    pub fn get(&self, county: &str) -> Option<Growth> {
        self.0.get(county).copied()
    }
}

/// Full daily time series as served by the API
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaseHistory {
    records: Vec<DailyRecord>,
}

impl CaseHistory {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    /// Derives the ranked county list, latest snapshot, weekly growth and
    /// the plotted window.
    pub fn summarize(&self) -> Result<CaseSummary, AppError> {
        let lookback = Config::GROWTH_LOOKBACK_DAYS;
        let total = self.records.len();
        if total <= lookback {
            return Err(AppError::DataError(format!(
                "Need at least {} daily records, got {total}",
                lookback + 1
            )));
        }

        let this_week = &self.records[total - 1];
        let last_week = &self.records[total - 1 - lookback];

        let cases = this_week.snapshot();
        let growth = GrowthSnapshot::between(&last_week.snapshot(), &cases);

        let mut ranked: Vec<(&str, u64)> = this_week
            .counts
            .iter()
            .filter(|(name, _)| !Config::EXCLUDED_COUNTIES.contains(&name.as_str()))
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        // Stable: equal counts keep source order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let window_start = total.saturating_sub(Config::PLOT_WINDOW_DAYS);

        Ok(CaseSummary {
            counties: ranked.into_iter().map(|(name, _)| name.to_string()).collect(),
            cases,
            growth,
            window: self.records[window_start..].to_vec(),
        })
    }
}

/// Everything the view needs, derived once after the fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaseSummary {
    counties: Vec<String>,
    cases: CasesSnapshot,
    growth: GrowthSnapshot,
    window: Vec<DailyRecord>,
}

/// One plotted line
#[derive(Clone, Debug, PartialEq)]
pub struct CountySeries {
    pub county: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Chart input: shared x-axis dates plus one line per selected county
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesData {
    pub dates: Vec<String>,
    pub lines: Vec<CountySeries>,
}

impl CaseSummary {
    /// Counties ranked by current case count, highest first
    pub fn counties(&self) -> &[String] {
        &self.counties
    }

    pub fn cases(&self, county: &str) -> Option<u64> {
        self.cases.get(county)
    }

    pub fn growth(&self, county: &str) -> Option<Growth> {
        self.growth.get(county)
    }

    /// The trailing records plotted on the chart
    pub fn window(&self) -> &[DailyRecord] {
        &self.window
    }

    /// Ranked counties whose name contains `search`, ignoring case
    pub fn list_for(&self, search: &str) -> Vec<&str> {
        if search.is_empty() {
            return self.counties.iter().map(String::as_str).collect();
        }

        let needle = search.to_lowercase();
        self.counties
            .iter()
            .filter(|county| county.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Builds chart series for the selection.
    ///
    /// Colours follow selection order. Counties missing from the latest
    /// record get no line; days a county is absent from plot as zero.
    pub fn series_data(&self, selection: &Selection) -> SeriesData {
        let dates = self.window.iter().map(|r| r.date.clone()).collect();

        let lines = selection
            .iter()
            .enumerate()
            .filter(|(_, county)| self.cases.get(county).is_some())
            .map(|(index, county)| CountySeries {
                county: county.to_string(),
                color: Config::series_color(index),
                values: self
                    .window
                    .iter()
                    .map(|r| r.cases(county).unwrap_or(0) as f64)
                    .collect(),
            })
            .collect();

        SeriesData { dates, lines }
    }
}
