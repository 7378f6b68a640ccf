use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::domain::name::name_key;
use crate::domain::record::ContactRecord;
use crate::error::CoreError;
use crate::rules::birthdays::next_congratulation;
use chrono::NaiveDate;

/// Contact records keyed by display name, in insertion order. Every lookup
/// compares lowercase keys; stored names keep their case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Inserts under the record's exact name, replacing a record stored under
    /// the same exact name. Case-insensitive uniqueness is the caller's job.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self
            .records
            .iter()
            .position(|existing| existing.name() == record.name())
        {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.position(name).map(|index| &self.records[index])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.position(name).map(|index| &mut self.records[index])
    }

    pub fn name_exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Moves the record to the end of the book under its new name.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let index = self
            .position(old)
            .ok_or_else(|| CoreError::ContactNotFound(old.to_string()))?;
        if let Some(other) = self.position(new) {
            if other != index {
                return Err(CoreError::DuplicateName(new.to_string()));
            }
        }
        let mut record = self.records.remove(index);
        record.rename(new);
        self.add_record(record);
        Ok(())
    }

    /// Records whose name starts with `query`, or with a phone containing it.
    pub fn search(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                name_key(record.name()).starts_with(&query)
                    || record
                        .phones()
                        .iter()
                        .any(|phone| phone.as_str().contains(&query))
            })
            .map(ToString::to_string)
            .collect()
    }

    /// Records whose name contains `fragment`, ignoring case.
    pub fn matching(&self, fragment: &str) -> Vec<&ContactRecord> {
        let fragment = name_key(fragment);
        self.records
            .iter()
            .filter(|record| name_key(record.name()).contains(&fragment))
            .collect()
    }

    /// Records ordered by lowercase name.
    pub fn sorted(&self) -> Vec<&ContactRecord> {
        let mut records: Vec<&ContactRecord> = self.records.iter().collect();
        records.sort_by_cached_key(|record| name_key(record.name()));
        records
    }

    /// `"<name>: <DD.MM.YYYY>"` for every birthday congratulated within
    /// `window_days` of `today`, in book order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = next_congratulation(birthday.date(), today, window_days)?;
                Some(format!(
                    "{}: {}",
                    record.name(),
                    date.format(BIRTHDAY_FORMAT)
                ))
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name_key(name);
        self.records
            .iter()
            .position(|record| name_key(record.name()) == key)
    }
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
