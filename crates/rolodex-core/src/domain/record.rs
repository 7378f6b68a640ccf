use crate::domain::birthday::{validate_birthday, Birthday};
use crate::domain::phone::{validate_phone, PhoneNumber};
use crate::error::CoreError;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl ContactRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Rebuilds a record from stored parts. Duplicate phones are dropped.
    pub fn restore(
        name: impl Into<String>,
        phones: Vec<PhoneNumber>,
        birthday: Option<Birthday>,
    ) -> Self {
        let mut record = Self::new(name);
        for phone in phones {
            if !record.phones.contains(&phone) {
                record.phones.push(phone);
            }
        }
        record.birthday = birthday;
        record
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn add_phone(&mut self, raw: &str) -> bool {
        if self.find_phone(raw).is_some() {
            return false;
        }
        match validate_phone(raw) {
            Ok(phone) => {
                self.phones.push(phone);
                true
            }
            Err(_) => false,
        }
    }

    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phone_index(raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces `old` with `new`, moving it to the end of the list. Refuses
    /// when `new` is invalid or already belongs to this record as another
    /// number.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> bool {
        let Some(index) = self.phone_index(old) else {
            return false;
        };
        let Ok(phone) = validate_phone(new) else {
            return false;
        };
        if old != new && self.find_phone(new).is_some() {
            return false;
        }
        self.phones.remove(index);
        self.phones.push(phone);
        true
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    pub fn add_birthday(&mut self, raw: &str, today: NaiveDate) -> Result<(), CoreError> {
        self.birthday = Some(validate_birthday(raw, today)?);
        Ok(())
    }

    pub fn edit_birthday(&mut self, raw: &str, today: NaiveDate) -> Result<(), CoreError> {
        self.add_birthday(raw, today)
    }

    pub fn remove_birthday(&mut self) {
        self.birthday = None;
    }

    fn phone_index(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == raw)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (index, phone) in self.phones.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
