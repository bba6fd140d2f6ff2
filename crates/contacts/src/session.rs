//! A working session: the loaded book, where it lives, and how commands run

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::book::AddressBook;
use crate::commands::{parse_input, Dispatcher, Reply};
use crate::store::BookStore;

pub struct Session {
    book: AddressBook,
    store: BookStore,
    dispatcher: Dispatcher,
}

impl Session {
    /// Load the book from `store` (empty if the file does not exist yet)
    pub fn open(store: BookStore, dispatcher: Dispatcher) -> Result<Self> {
        let book = store.load()?;
        tracing::info!(
            path = %store.path().display(),
            records = book.len(),
            "session opened"
        );
        Ok(Self {
            book,
            store,
            dispatcher,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run one input line. Blank lines produce no reply.
    pub fn execute(&mut self, line: &str) -> Option<Reply> {
        self.execute_on(line, Local::now().date_naive())
    }

    /// Run one input line as if today were `today`
    pub fn execute_on(&mut self, line: &str, today: NaiveDate) -> Option<Reply> {
        let (command, args) = parse_input(line)?;
        Some(
            self.dispatcher
                .dispatch(&mut self.book, today, &command, &args),
        )
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(&self.book)
    }
}
