use std::collections::BTreeMap;

use crate::domain::subscriber_record::SubscriberRecord;

/// Per-day subscriber counts for the analysed week. The BTreeMap keeps the
/// date keys sorted ascending, which is the order the report prints them in.
#[derive(Debug, Default, Clone)]
pub struct DailyAggregate(BTreeMap<String, u32>);

impl DailyAggregate {
    pub fn from_subscribers(subscribers: &[SubscriberRecord]) -> DailyAggregate {
        let mut days: BTreeMap<String, u32> = BTreeMap::new();

        for subscriber in subscribers {
            *days.entry(subscriber.created_day().to_string()).or_insert(0) += 1;
        }

        DailyAggregate(days)
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(day, count)| (day.as_str(), *count))
    }
}
