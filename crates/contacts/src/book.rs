//! Address book and the upcoming-birthday query
//!
//! The book is an ordered list of records. Lookups are linear scans and
//! results always come back in insertion order.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use contacts_core::LeapDayPolicy;
use serde::{Deserialize, Serialize};

use crate::birthday::{format_date, Birthday};
use crate::record::Record;

/// A contact to congratulate and the (weekday) date to do it on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// `name's birthday is on DD.MM.YYYY.`
    pub fn message(&self) -> String {
        format!(
            "{}'s birthday is on {}.",
            self.name,
            format_date(self.congratulation_date)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Callers check for an existing name first.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// First record whose name matches exactly (case-sensitive)
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays falling within `window_days` of `today` (inclusive),
    /// with leap-day birthdays moved to 28 February in non-leap years.
    pub fn upcoming_birthdays(&self, window_days: u32, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_with(window_days, today, LeapDayPolicy::default())
    }

    pub fn upcoming_birthdays_with(
        &self,
        window_days: u32,
        today: NaiveDate,
        policy: LeapDayPolicy,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday else {
                continue;
            };

            let Some(next) = next_occurrence(&birthday, today, policy) else {
                tracing::warn!(name = record.name(), "birthday cannot be projected, skipping");
                continue;
            };

            let days_until = (next - today).num_days();
            if (0..=i64::from(window_days)).contains(&days_until) {
                upcoming.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: adjust_for_weekend(next),
                });
            }
        }

        upcoming
    }
}

/// This year's occurrence, or next year's if it has already passed
fn next_occurrence(
    birthday: &Birthday,
    today: NaiveDate,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    let this_year = birthday.occurrence_in(today.year(), policy)?;
    if this_year < today {
        birthday.occurrence_in(today.year() + 1, policy)
    } else {
        Some(this_year)
    }
}

/// Move Saturday and Sunday to the following Monday
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn with_birthday(name: &str, birthday: &str) -> Record {
        let mut record = Record::new(name);
        record.set_birthday(birthday).unwrap();
        record
    }

    #[test]
    fn test_find() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("John"));
        book.add_record(Record::new("Jane"));

        assert_eq!(book.find("Jane").unwrap().name(), "Jane");
        assert!(book.find("jane").is_none());
        assert!(book.find("Nobody").is_none());
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut book = AddressBook::new();
        let mut first = Record::new("John");
        first.add_phone("111");
        let mut second = Record::new("John");
        second.add_phone("222");
        book.add_record(first);
        book.add_record(second);

        assert_eq!(book.len(), 2);
        assert_eq!(book.find("John").unwrap().phones, vec!["111"]);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("John"));
        book.find_mut("John").unwrap().add_phone("123");
        assert_eq!(book.find("John").unwrap().phones, vec!["123"]);
    }

    #[test]
    fn test_adjust_for_weekend() {
        // 2024-06-14 is a Friday
        assert_eq!(adjust_for_weekend(ymd(2024, 6, 14)), ymd(2024, 6, 14));
        assert_eq!(adjust_for_weekend(ymd(2024, 6, 15)), ymd(2024, 6, 17));
        assert_eq!(adjust_for_weekend(ymd(2024, 6, 16)), ymd(2024, 6, 17));
        assert_eq!(adjust_for_weekend(ymd(2024, 6, 17)), ymd(2024, 6, 17));
    }

    #[test]
    fn test_saturday_birthday_moves_to_monday() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("John", "15.06.2024"));

        let upcoming = book.upcoming_birthdays(7, ymd(2024, 6, 10));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, ymd(2024, 6, 17));
        assert_eq!(upcoming[0].message(), "John's birthday is on 17.06.2024.");
    }

    #[test]
    fn test_window_bounds() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Jane", "20.06.2023"));
        let today = ymd(2024, 6, 10);

        assert!(book.upcoming_birthdays(7, today).is_empty());
        assert!(book.upcoming_birthdays(9, today).is_empty());

        let upcoming = book.upcoming_birthdays(10, today);
        assert_eq!(upcoming.len(), 1);
        // 2024-06-20 is a Thursday
        assert_eq!(upcoming[0].congratulation_date, ymd(2024, 6, 20));
    }

    #[test]
    fn test_birthday_today_is_included() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("John", "10.06.1990"));

        let upcoming = book.upcoming_birthdays(0, ymd(2024, 6, 10));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, ymd(2024, 6, 10));
    }

    #[test]
    fn test_passed_birthday_is_not_upcoming() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("John", "09.06.1990"));

        assert!(book.upcoming_birthdays(7, ymd(2024, 6, 10)).is_empty());
    }

    #[test]
    fn test_wraps_into_next_year() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("John", "02.01.1990"));

        let upcoming = book.upcoming_birthdays(7, ymd(2024, 12, 28));
        assert_eq!(upcoming.len(), 1);
        // 2025-01-02 is a Thursday
        assert_eq!(upcoming[0].congratulation_date, ymd(2025, 1, 2));
    }

    #[test]
    fn test_weekend_shift_can_leave_the_window() {
        // Sunday 2024-06-16 is inside the window, the Monday after it is not
        let mut book = AddressBook::new();
        book.add_record(with_birthday("John", "16.06.1980"));

        let upcoming = book.upcoming_birthdays(6, ymd(2024, 6, 10));
        assert_eq!(upcoming[0].congratulation_date, ymd(2024, 6, 17));
    }

    #[test]
    fn test_results_follow_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Late", "14.06.1990"));
        book.add_record(Record::new("NoBirthday"));
        book.add_record(with_birthday("Early", "11.06.1990"));

        let names: Vec<_> = book
            .upcoming_birthdays(7, ymd(2024, 6, 10))
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Late", "Early"]);
    }

    #[test]
    fn test_leap_day_default_policy() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Leap", "29.02.2000"));

        let upcoming = book.upcoming_birthdays(10, ymd(2025, 2, 20));
        assert_eq!(upcoming.len(), 1);
        // 2025-02-28 is a Friday
        assert_eq!(upcoming[0].congratulation_date, ymd(2025, 2, 28));
    }

    #[test]
    fn test_leap_day_march_policy() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Leap", "29.02.2000"));

        let upcoming = book.upcoming_birthdays_with(10, ymd(2025, 2, 20), LeapDayPolicy::Mar1);
        assert_eq!(upcoming.len(), 1);
        // 2025-03-01 is a Saturday
        assert_eq!(upcoming[0].congratulation_date, ymd(2025, 3, 3));
    }

    #[test]
    fn test_leap_day_in_leap_year() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Leap", "29.02.2000"));

        let upcoming = book.upcoming_birthdays(7, ymd(2024, 2, 26));
        // 2024-02-29 is a Thursday
        assert_eq!(upcoming[0].congratulation_date, ymd(2024, 2, 29));
    }
}
