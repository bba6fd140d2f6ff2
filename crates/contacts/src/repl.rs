//! Interactive shell

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use crate::commands::{Reply, MSG_GOODBYE};
use crate::session::Session;

const PROMPT: &str = "Enter a command: ";

/// Print a reply, colouring warnings
pub fn print_reply(reply: &Reply) {
    match reply {
        Reply::Info(text) if text.is_empty() => {}
        Reply::Info(text) => println!("{}", text),
        Reply::Warning(text) => println!("{}", text.yellow()),
        Reply::Exit(text) => println!("{}", text.green()),
    }
}

/// Feed `lines` to the session until an exit command or the end of input,
/// handing every other reply to `on_reply`, then save the book.
///
/// Returns the exit reply if an exit command ended the run, `None` if the
/// input simply ran out. Lines after an exit command are not read.
pub fn drive<I, F>(session: &mut Session, lines: I, mut on_reply: F) -> Result<Option<Reply>>
where
    I: IntoIterator<Item = String>,
    F: FnMut(&Reply),
{
    let mut farewell = None;

    for line in lines {
        let Some(reply) = session.execute(&line) else {
            continue;
        };

        if reply.is_exit() {
            farewell = Some(reply);
            break;
        }
        on_reply(&reply);
    }

    session.save()?;
    Ok(farewell)
}

/// Run the read-dispatch-print loop until `close`/`exit` or Ctrl-D.
///
/// The book is saved before leaving; a failed save is returned as an error.
pub fn run(session: &mut Session, history_path: Option<PathBuf>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    if let Some(path) = &history_path {
        let _ = rl.load_history(path);
    }

    println!("{}", "Welcome to the assistant bot!".bold());

    let lines = std::iter::from_fn(|| loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.trim());
                }
                return Some(line);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - drop the current line
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - same as exit
                return None;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to read input");
                eprintln!("{} {}", "Error:".red(), err);
                return None;
            }
        }
    });

    let outcome = drive(session, lines, print_reply);

    if let Some(path) = &history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(error = %e, path = %path.display(), "failed to save history");
        }
    }

    let farewell = outcome?.unwrap_or_else(|| Reply::Exit(MSG_GOODBYE.to_string()));
    print_reply(&farewell);
    Ok(())
}
