use crate::commands::{dispatch, Context};
use crate::input::Input;
use crate::util::{local_today, parse_input};
use rolodex_core::AddressBook;
use rolodex_store::error::Result as StoreResult;
use rolodex_store::Store;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use tracing::{debug, warn};

const PROMPT: &str = "Enter a command: ";

/// One interactive run: the in-memory book plus where it is saved.
pub struct Session {
    db_path: PathBuf,
    store: Option<Store>,
    book: AddressBook,
    upcoming_days: i64,
}

impl Session {
    /// Loads the saved book. A missing or unreadable snapshot leaves the
    /// session with an empty book after reporting the failure.
    pub fn open<W: Write>(
        db_path: PathBuf,
        upcoming_days: i64,
        output: &mut W,
    ) -> io::Result<Self> {
        let existed = db_path.exists();
        let mut session = Self {
            db_path,
            store: None,
            book: AddressBook::new(),
            upcoming_days,
        };

        match open_store(&session.db_path).and_then(|store| {
            let book = store.load_snapshot()?;
            Ok((store, book))
        }) {
            Ok((store, book)) => {
                debug!(
                    path = %session.db_path.display(),
                    contacts = book.len(),
                    existed,
                    "address book loaded"
                );
                session.store = Some(store);
                session.book = book;
            }
            Err(err) => {
                warn!(path = %session.db_path.display(), error = %err, "load failed");
                writeln!(
                    output,
                    "Error while loading address book from '{}': {}",
                    session.db_path.display(),
                    err
                )?;
                writeln!(output, "Creating a new empty address book instead.")?;
            }
        }
        Ok(session)
    }

    /// Handles input until `exit`, `close`, end of input or an interrupt.
    /// The book is saved after each change and once more on the way out.
    pub fn run<W: Write>(&mut self, events: &Receiver<Input>, output: &mut W) -> io::Result<()> {
        writeln!(output, "Welcome to rolodex!")?;
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let line = match events.recv() {
                Ok(Input::Line(line)) => line,
                Ok(Input::Interrupt) => {
                    debug!("session interrupted");
                    writeln!(output)?;
                    break;
                }
                Ok(Input::End) | Err(_) => {
                    writeln!(output)?;
                    break;
                }
                Ok(Input::Failed(err)) => {
                    self.save(output)?;
                    return Err(err);
                }
            };
            let Some((command, args)) = parse_input(&line) else {
                continue;
            };
            if matches!(command.as_str(), "exit" | "close") {
                break;
            }

            let mut ctx = Context {
                book: &mut self.book,
                today: local_today(),
                upcoming_days: self.upcoming_days,
            };
            let outcome = dispatch(&mut ctx, &command, &args);
            writeln!(output, "{}", outcome.message)?;
            if outcome.changed {
                self.save(output)?;
            }
        }

        self.save(output)?;
        writeln!(output, "Good bye!")?;
        Ok(())
    }

    /// Writes the whole book. Failures are reported and the session keeps
    /// running on the in-memory state.
    pub fn save<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        let result = match self.store.take() {
            Some(store) => Ok(store),
            None => open_store(&self.db_path),
        }
        .and_then(|store| {
            let saved = store.save_snapshot(&self.book);
            self.store = Some(store);
            saved
        });

        match result {
            Ok(()) => {
                debug!(
                    path = %self.db_path.display(),
                    contacts = self.book.len(),
                    "address book saved"
                );
            }
            Err(err) => {
                warn!(path = %self.db_path.display(), error = %err, "save failed");
                writeln!(
                    output,
                    "Error saving address book to '{}': {}",
                    self.db_path.display(),
                    err
                )?;
            }
        }
        Ok(())
    }
}

fn open_store(path: &Path) -> StoreResult<Store> {
    let store = Store::open(path)?;
    store.migrate()?;
    debug!(
        path = %path.display(),
        schema = store.schema_version()?,
        "store ready"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::input::{read_lines, Input};
    use rolodex_store::Store;
    use std::io::Cursor;
    use std::path::Path;
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn stored_names(path: &Path) -> Vec<String> {
        let store = Store::open(path).expect("open store");
        store
            .load_snapshot()
            .expect("load")
            .iter()
            .map(|record| record.name().to_string())
            .collect()
    }

    fn open(path: &Path, output: &mut Vec<u8>) -> Session {
        Session::open(path.to_path_buf(), 7, output).expect("open session")
    }

    #[test]
    fn interrupt_saves_and_stops_reading() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("rolodex.sqlite3");
        let mut output = Vec::new();
        let mut session = open(&path, &mut output);

        let (events, receiver) = mpsc::channel();
        events
            .send(Input::Line("addcontact anna 1112223333\n".to_string()))
            .expect("send");
        events.send(Input::Interrupt).expect("send");
        events
            .send(Input::Line("addcontact bob 4445556666\n".to_string()))
            .expect("send");
        session.run(&receiver, &mut output).expect("run");

        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("Contact added."));
        assert!(text.trim_end().ends_with("Good bye!"));
        assert_eq!(stored_names(&path), vec!["Anna".to_string()]);
    }

    #[test]
    fn interrupt_retries_a_failed_save() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").expect("write blocker");
        let mut output = Vec::new();
        let mut session = open(&blocker.join("rolodex.sqlite3"), &mut output);

        let (events, receiver) = mpsc::channel();
        events
            .send(Input::Line("addcontact anna 1112223333\n".to_string()))
            .expect("send");
        events.send(Input::Interrupt).expect("send");
        session.run(&receiver, &mut output).expect("run");

        let text = String::from_utf8(output).expect("utf8");
        assert_eq!(text.matches("Error saving address book to").count(), 2);
        assert!(text.trim_end().ends_with("Good bye!"));
    }

    #[test]
    fn end_of_input_behaves_like_exit() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("rolodex.sqlite3");
        let mut output = Vec::new();
        let mut session = open(&path, &mut output);

        let (events, receiver) = mpsc::channel();
        read_lines(Cursor::new(b"\nADDCONTACT bob 4445556666".to_vec()), &events);
        session.run(&receiver, &mut output).expect("run");

        let text = String::from_utf8(output).expect("utf8");
        assert!(text.starts_with("Welcome to rolodex!\n"));
        assert!(text.contains("Contact added."));
        assert!(text.trim_end().ends_with("Good bye!"));
        assert_eq!(stored_names(&path), vec!["Bob".to_string()]);
    }
}
