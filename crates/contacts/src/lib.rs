//! contacts - A small address book for the terminal
//!
//! Stores names, phone numbers, and birthdays, and reminds you whose birthday
//! is coming up (weekend birthdays are celebrated the following Monday).
//!
//! Commands:
//! - hello: Greet the assistant
//! - add <name> <phone>: Add a contact, or another phone to an existing one
//! - change <name> <phone>: Replace a contact's phone numbers
//! - phone <name>: Show a contact's phone numbers
//! - all: List every contact
//! - add-birthday <name> <DD.MM.YYYY>: Set a contact's birthday
//! - show-birthday <name>: Show a contact's birthday
//! - birthdays [days]: Birthdays in the next week (or N days)
//! - help: List the commands
//! - close, exit: Save and leave

pub mod birthday;
pub mod book;
pub mod commands;
pub mod error;
pub mod record;
pub mod repl;
pub mod session;
pub mod store;

pub use birthday::Birthday;
pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{Command, Dispatcher, Reply};
pub use error::ContactError;
pub use record::Record;
pub use session::Session;
pub use store::BookStore;
