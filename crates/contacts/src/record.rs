//! Contact records

use serde::{Deserialize, Serialize};

use crate::birthday::Birthday;
use crate::error::Result;

/// One contact: a name, its phone numbers, and an optional birthday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    /// Phone numbers in the order they were added. Duplicates are kept.
    pub phones: Vec<String>,
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse and set the birthday, replacing any previous one.
    ///
    /// On a format error the existing birthday is left as it was.
    pub fn set_birthday(&mut self, text: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(text)?);
        Ok(())
    }

    pub fn add_phone(&mut self, number: impl Into<String>) {
        self.phones.push(number.into());
    }

    /// Replace every phone number with `number`
    pub fn replace_phone(&mut self, number: impl Into<String>) {
        self.phones = vec![number.into()];
    }

    /// `name: phone: p1, p2`
    pub fn phone_line(&self) -> String {
        format!("{}: phone: {}", self.name, self.phones.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("John");
        assert_eq!(record.name(), "John");
        assert!(record.phones.is_empty());
        assert!(record.birthday.is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = Record::new("John");
        record.add_phone("123");
        record.add_phone("456");
        record.add_phone("123");
        assert_eq!(record.phones, vec!["123", "456", "123"]);
    }

    #[test]
    fn test_replace_phone_overwrites_all() {
        let mut record = Record::new("John");
        record.add_phone("123");
        record.add_phone("456");
        record.replace_phone("789");
        assert_eq!(record.phones, vec!["789"]);
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut record = Record::new("John");
        record.set_birthday("01.01.1990").unwrap();
        record.set_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday.unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn test_bad_birthday_keeps_previous() {
        let mut record = Record::new("John");
        record.set_birthday("01.01.1990").unwrap();
        assert!(record.set_birthday("1990-01-01").is_err());
        assert_eq!(record.birthday.unwrap().to_string(), "01.01.1990");
    }

    #[test]
    fn test_phone_line() {
        let mut record = Record::new("John");
        assert_eq!(record.phone_line(), "John: phone: ");
        record.add_phone("123");
        record.add_phone("456");
        assert_eq!(record.phone_line(), "John: phone: 123, 456");
    }
}
