//! Command objects that wrap a single catalog mutation or device action.
//!
//! Catalog commands run once and cannot be undone. Device commands also
//! implement [`ReversibleCommand`] and are driven through an [`Invoker`]
//! that keeps the undo history.

pub mod catalog;
pub mod device;

pub use catalog::{AddBookCommand, AddLibrarianCommand, AddReaderCommand, RemoveBookCommand};
pub use device::{Invoker, Light, LightOffCommand, LightOnCommand};

use crate::{error::Result, log_sink::LogSink};

/// A deferred action bound to its target and arguments
pub trait Command {
    /// Perform the action
    ///
    /// # Errors
    ///
    /// Propagates whatever the target reports, unchanged.
    fn execute(&self) -> Result<()>;

    /// Human-readable line describing the action for the audit log
    fn describe(&self) -> String;
}

/// A command whose effect can be reverted
pub trait ReversibleCommand: Command {
    /// Perform the logical inverse of [`Command::execute`]
    ///
    /// # Errors
    ///
    /// Propagates whatever the target reports, unchanged.
    fn undo(&self) -> Result<()>;
}

/// Execute `command` and record its description in `sink`
///
/// Nothing is logged when the command fails.
///
/// # Errors
///
/// Returns the command's error, or the sink's error if the line cannot be
/// appended after a successful execution.
pub fn execute_logged(command: &dyn Command, sink: &mut dyn LogSink) -> Result<()> {
    command.execute()?;
    sink.append(&command.describe())
}
