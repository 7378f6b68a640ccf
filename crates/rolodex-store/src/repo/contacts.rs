use crate::error::{Result, StoreError};
use chrono::NaiveDate;
use rolodex_core::{AddressBook, Birthday, ContactRecord, PhoneNumber};
use rusqlite::{params, Connection};
use std::collections::HashMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct ContactsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ContactsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Replaces every stored contact with the records of `book`, keeping
    /// record order and phone order.
    pub fn replace_all(&self, book: &AddressBook) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        replace_all_inner(&tx, book)?;
        tx.commit()?;
        Ok(())
    }

    pub fn load_all(&self) -> Result<AddressBook> {
        let mut phones = self.load_phones()?;
        let mut stmt = self
            .conn
            .prepare("SELECT position, name, birthday FROM contacts ORDER BY position ASC;")?;
        let mut rows = stmt.query([])?;
        let mut book = AddressBook::new();
        while let Some(row) = rows.next()? {
            let position: i64 = row.get(0)?;
            let name: String = row.get(1)?;
            let birthday: Option<String> = row.get(2)?;
            let birthday = birthday.as_deref().map(parse_stored_birthday).transpose()?;
            let record_phones = phones.remove(&position).unwrap_or_default();
            book.add_record(ContactRecord::restore(name, record_phones, birthday));
        }
        Ok(book)
    }

    fn load_phones(&self) -> Result<HashMap<i64, Vec<PhoneNumber>>> {
        let mut stmt = self.conn.prepare(
            "SELECT contact_position, phone FROM contact_phones
             ORDER BY contact_position ASC, position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut phones: HashMap<i64, Vec<PhoneNumber>> = HashMap::new();
        while let Some(row) = rows.next()? {
            let contact_position: i64 = row.get(0)?;
            let raw: String = row.get(1)?;
            let phone = PhoneNumber::new(&raw)
                .map_err(|_| StoreError::CorruptSnapshot(format!("invalid phone {raw:?}")))?;
            phones.entry(contact_position).or_default().push(phone);
        }
        Ok(phones)
    }
}

fn replace_all_inner(conn: &Connection, book: &AddressBook) -> Result<()> {
    conn.execute("DELETE FROM contact_phones;", [])?;
    conn.execute("DELETE FROM contacts;", [])?;

    let mut insert_contact =
        conn.prepare("INSERT INTO contacts (position, name, birthday) VALUES (?1, ?2, ?3);")?;
    let mut insert_phone = conn.prepare(
        "INSERT INTO contact_phones (contact_position, position, phone) VALUES (?1, ?2, ?3);",
    )?;

    for (position, record) in book.iter().enumerate() {
        let position = position as i64;
        let birthday = record
            .birthday()
            .map(|birthday| birthday.date().format(DATE_FORMAT).to_string());
        insert_contact.execute(params![position, record.name(), birthday])?;
        for (index, phone) in record.phones().iter().enumerate() {
            insert_phone.execute(params![position, index as i64, phone.as_str()])?;
        }
    }
    Ok(())
}

fn parse_stored_birthday(raw: &str) -> Result<Birthday> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Birthday::from_date)
        .map_err(|_| StoreError::CorruptSnapshot(format!("invalid birthday {raw:?}")))
}
