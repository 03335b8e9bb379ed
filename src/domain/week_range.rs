use chrono::{Datelike, Duration, NaiveDate, Utc};

/// The analysed period: from the most recent Monday up to today, both
/// inclusive. Computed fresh on every run, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl WeekRange {
    pub fn current() -> WeekRange {
        Self::containing(Utc::now().date_naive())
    }

    /// Week containing `date`: start is the Monday on or before `date`,
    /// end is `date` itself.
    pub fn containing(date: NaiveDate) -> WeekRange {
        let days_since_monday = date.weekday().num_days_from_monday();
        let start = date - Duration::days(i64::from(days_since_monday));

        WeekRange { start, end: date }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Lower timestamp bound for `gte.` filters, midnight at start of week.
    pub fn start_bound(&self) -> String {
        format!("{}T00:00:00Z", self.start.format("%Y-%m-%d"))
    }

    /// Upper timestamp bound for `lte.` filters, last second of the end day.
    pub fn end_bound(&self) -> String {
        format!("{}T23:59:59Z", self.end.format("%Y-%m-%d"))
    }
}

impl std::fmt::Display for WeekRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} → {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
