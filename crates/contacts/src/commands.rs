//! Command dispatcher
//!
//! Maps a command keyword and its arguments to a handler and returns the
//! reply text. Every handler returns `Result<String, ContactError>`; a single
//! translation step turns errors into fixed replies, so bad input never ends
//! the session.

use chrono::NaiveDate;
use contacts_core::LeapDayPolicy;

use crate::book::AddressBook;
use crate::error::{ContactError, Result};
use crate::record::Record;

pub const MSG_HELLO: &str = "How can I help you?";
pub const MSG_ADDED: &str = "Contact added.";
pub const MSG_UPDATED: &str = "Contact updated.";
pub const MSG_EMPTY_BOOK: &str = "Address book is empty.";
pub const MSG_BIRTHDAY_ADDED: &str = "Birthday added successfully.";
pub const MSG_NO_BIRTHDAY: &str = "Birthday not found or not set for this contact.";
pub const MSG_INVALID_COMMAND: &str = "Invalid command.";
pub const MSG_GOODBYE: &str = "Good bye!";

pub const MSG_MISSING_ARGUMENT: &str = "Enter the argument for the command.";
pub const MSG_NOT_FOUND: &str = "Contact not found.";
pub const MSG_WRONG_FORMAT: &str = "Wrong format of argument.";

/// Recognized commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Help,
        Command::Exit,
    ];

    /// Look up a command by its (already lowercased) keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "hello" => Some(Command::Hello),
            "add" => Some(Command::Add),
            "change" => Some(Command::Change),
            "phone" => Some(Command::Phone),
            "all" => Some(Command::All),
            "add-birthday" => Some(Command::AddBirthday),
            "show-birthday" => Some(Command::ShowBirthday),
            "birthdays" => Some(Command::Birthdays),
            "help" => Some(Command::Help),
            "close" | "exit" => Some(Command::Exit),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <phone>",
            Command::Phone => "phone <name>",
            Command::All => "all",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays [days]",
            Command::Help => "help",
            Command::Exit => "close | exit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Hello => "Greet the assistant",
            Command::Add => "Add a contact, or another phone to an existing one",
            Command::Change => "Replace a contact's phone numbers",
            Command::Phone => "Show a contact's phone numbers",
            Command::All => "List every contact",
            Command::AddBirthday => "Set a contact's birthday",
            Command::ShowBirthday => "Show a contact's birthday",
            Command::Birthdays => "Birthdays to celebrate soon (weekends move to Monday)",
            Command::Help => "Show this list",
            Command::Exit => "Save and leave",
        }
    }
}

/// What the dispatcher hands back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Normal output
    Info(String),
    /// A translated error or an unknown command
    Warning(String),
    /// The session should be saved and ended
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Info(text) | Reply::Warning(text) | Reply::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// Split a raw input line into a lowercased command and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    let args = words.map(str::to_string).collect();
    Some((command, args))
}

/// Settings a dispatch needs besides the book itself
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    /// Default look-ahead for `birthdays`
    pub window_days: u32,
    pub leap_day: LeapDayPolicy,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            window_days: 7,
            leap_day: LeapDayPolicy::default(),
        }
    }
}

impl Dispatcher {
    pub fn new(window_days: u32, leap_day: LeapDayPolicy) -> Self {
        Self { window_days, leap_day }
    }

    /// Run one command against `book`.
    ///
    /// `today` anchors the birthday query.
    pub fn dispatch<S: AsRef<str>>(
        &self,
        book: &mut AddressBook,
        today: NaiveDate,
        keyword: &str,
        args: &[S],
    ) -> Reply {
        let Some(command) = Command::from_keyword(keyword) else {
            tracing::debug!(keyword, "unknown command");
            return Reply::Warning(MSG_INVALID_COMMAND.to_string());
        };

        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        tracing::debug!(command = command.keyword(), args = args.len(), "dispatching");

        if command == Command::Exit {
            return Reply::Exit(MSG_GOODBYE.to_string());
        }

        match self.run(command, book, today, &args) {
            Ok(text) => Reply::Info(text),
            Err(e) => {
                tracing::debug!(error = %e, "command failed");
                Reply::Warning(translate(&e).to_string())
            }
        }
    }

    fn run(
        &self,
        command: Command,
        book: &mut AddressBook,
        today: NaiveDate,
        args: &[&str],
    ) -> Result<String> {
        match command {
            Command::Hello => Ok(MSG_HELLO.to_string()),
            Command::Add => add_contact(book, args),
            Command::Change => change_contact(book, args),
            Command::Phone => show_phone(book, args),
            Command::All => Ok(show_all(book)),
            Command::AddBirthday => add_birthday(book, args),
            Command::ShowBirthday => show_birthday(book, args),
            Command::Birthdays => self.birthdays(book, today, args),
            Command::Help => Ok(help_text()),
            Command::Exit => Ok(MSG_GOODBYE.to_string()),
        }
    }

    fn birthdays(&self, book: &AddressBook, today: NaiveDate, args: &[&str]) -> Result<String> {
        let window = match args {
            [] => self.window_days,
            [days] => days
                .parse::<u32>()
                .map_err(|_| ContactError::Format(days.to_string()))?,
            _ => {
                return Err(ContactError::MissingArgument {
                    command: Command::Birthdays.keyword().to_string(),
                    expected: 1,
                    got: args.len(),
                })
            }
        };

        let upcoming = book.upcoming_birthdays_with(window, today, self.leap_day);
        if upcoming.is_empty() {
            return Ok(if window == 7 {
                "No upcoming birthdays within the next week.".to_string()
            } else {
                format!("No upcoming birthdays within the next {} days.", window)
            });
        }

        Ok(upcoming
            .iter()
            .map(|u| u.message())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// The fixed reply for each error kind
pub fn translate(error: &ContactError) -> &'static str {
    match error {
        ContactError::MissingArgument { .. } => MSG_MISSING_ARGUMENT,
        ContactError::NotFound(_) => MSG_NOT_FOUND,
        ContactError::Format(_) => MSG_WRONG_FORMAT,
    }
}

/// Exactly `N` arguments, or a `MissingArgument` error
fn expect_args<'a, const N: usize>(command: Command, args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| ContactError::MissingArgument {
        command: command.keyword().to_string(),
        expected: N,
        got: args.len(),
    })
}

fn add_contact(book: &mut AddressBook, args: &[&str]) -> Result<String> {
    let [name, phone] = expect_args(Command::Add, args)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone);
        return Ok(MSG_UPDATED.to_string());
    }

    let mut record = Record::new(name);
    record.add_phone(phone);
    book.add_record(record);
    Ok(MSG_ADDED.to_string())
}

fn change_contact(book: &mut AddressBook, args: &[&str]) -> Result<String> {
    let [name, phone] = expect_args(Command::Change, args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| ContactError::NotFound(name.to_string()))?;
    record.replace_phone(phone);
    Ok(MSG_UPDATED.to_string())
}

fn show_phone(book: &AddressBook, args: &[&str]) -> Result<String> {
    let [name] = expect_args(Command::Phone, args)?;

    book.find(name)
        .map(Record::phone_line)
        .ok_or_else(|| ContactError::NotFound(name.to_string()))
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return MSG_EMPTY_BOOK.to_string();
    }

    book.records()
        .iter()
        .map(Record::phone_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(book: &mut AddressBook, args: &[&str]) -> Result<String> {
    let [name, date] = expect_args(Command::AddBirthday, args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| ContactError::NotFound(name.to_string()))?;
    record.set_birthday(date)?;
    Ok(MSG_BIRTHDAY_ADDED.to_string())
}

fn show_birthday(book: &AddressBook, args: &[&str]) -> Result<String> {
    let [name] = expect_args(Command::ShowBirthday, args)?;

    let record = book
        .find(name)
        .ok_or_else(|| ContactError::NotFound(name.to_string()))?;

    Ok(match record.birthday {
        Some(birthday) => format!("{}'s birthday is on {}.", record.name(), birthday),
        None => MSG_NO_BIRTHDAY.to_string(),
    })
}

fn help_text() -> String {
    let width = Command::ALL
        .iter()
        .map(|c| c.usage().len())
        .max()
        .unwrap_or(0);

    let mut lines = vec!["Commands:".to_string()];
    for command in Command::ALL {
        lines.push(format!(
            "  {:width$}  {}",
            command.usage(),
            command.description(),
            width = width
        ));
    }
    lines.join("\n")
}
