use std::{cell::Cell, fmt, rc::Rc};

use crate::{
    commands::{Command, ReversibleCommand},
    error::Result,
};

/// A switchable light
#[derive(Debug, Default)]
pub struct Light {
    /// Where the light is installed
    location: String,
    /// Whether the light is currently on
    on: Cell<bool>,
}

impl Light {
    /// Create a light that starts switched off
    pub fn new(location: impl Into<String>) -> Self {
        Self { location: location.into(), on: Cell::new(false) }
    }

    /// Switch the light on
    pub fn turn_on(&self) {
        self.on.set(true);
        tracing::info!(location = %self.location, "light is on");
    }

    /// Switch the light off
    pub fn turn_off(&self) {
        self.on.set(false);
        tracing::info!(location = %self.location, "light is off");
    }

    /// Whether the light is currently on
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on.get()
    }

    /// Where the light is installed
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Turns a light on; undo turns it off
#[derive(Debug, Clone)]
pub struct LightOnCommand {
    /// Controlled light
    light: Rc<Light>,
}

impl LightOnCommand {
    /// Bind the command to `light`
    #[must_use]
    pub fn new(light: &Rc<Light>) -> Self {
        Self { light: Rc::clone(light) }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) -> Result<()> {
        self.light.turn_on();
        Ok(())
    }

    fn describe(&self) -> String {
        format!("Light in {} switched on", self.light.location())
    }
}

impl ReversibleCommand for LightOnCommand {
    fn undo(&self) -> Result<()> {
        self.light.turn_off();
        Ok(())
    }
}

/// Turns a light off; undo turns it on
#[derive(Debug, Clone)]
pub struct LightOffCommand {
    /// Controlled light
    light: Rc<Light>,
}

impl LightOffCommand {
    /// Bind the command to `light`
    #[must_use]
    pub fn new(light: &Rc<Light>) -> Self {
        Self { light: Rc::clone(light) }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) -> Result<()> {
        self.light.turn_off();
        Ok(())
    }

    fn describe(&self) -> String {
        format!("Light in {} switched off", self.light.location())
    }
}

impl ReversibleCommand for LightOffCommand {
    fn undo(&self) -> Result<()> {
        self.light.turn_on();
        Ok(())
    }
}

/// A switch that runs its current command and remembers what it ran
#[derive(Default)]
pub struct Invoker {
    /// Command run by the next button press
    command: Option<Rc<dyn ReversibleCommand>>,
    /// Executed commands, most recent last
    history: Vec<Rc<dyn ReversibleCommand>>,
}

// Manual implementation of Debug for Invoker
impl fmt::Debug for Invoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invoker")
            .field("command", &self.command.as_ref().map(|c| c.describe()))
            .field("history", &self.history.iter().map(|c| c.describe()).collect::<Vec<_>>())
            .finish()
    }
}

impl Invoker {
    /// Create an invoker with no command and an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the command run by the button
    pub fn set_command(&mut self, command: Rc<dyn ReversibleCommand>) {
        self.command = Some(command);
    }

    /// Execute the current command and push it onto the history
    ///
    /// Returns `Ok(false)` without doing anything when no command is set.
    ///
    /// # Errors
    ///
    /// Propagates the command's error; a failed command is not recorded.
    pub fn press_button(&mut self) -> Result<bool> {
        let Some(command) = &self.command else {
            return Ok(false);
        };
        command.execute()?;
        self.history.push(Rc::clone(command));
        Ok(true)
    }

    /// Undo the most recently executed command
    ///
    /// Returns `Ok(false)` without doing anything when the history is empty.
    ///
    /// # Errors
    ///
    /// Propagates the command's undo error; the command stays popped.
    pub fn press_undo(&mut self) -> Result<bool> {
        let Some(command) = self.history.pop() else {
            return Ok(false);
        };
        command.undo()?;
        Ok(true)
    }

    /// Number of commands that can still be undone
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    /// Helper building a light with its on/off commands
    fn setup_light() -> (Rc<Light>, Rc<dyn ReversibleCommand>, Rc<dyn ReversibleCommand>) {
        let light = Rc::new(Light::new("hall"));
        let on: Rc<dyn ReversibleCommand> = Rc::new(LightOnCommand::new(&light));
        let off: Rc<dyn ReversibleCommand> = Rc::new(LightOffCommand::new(&light));
        (light, on, off)
    }

    #[test]
    fn test_undo_reverts_last_command_only() {
        let (light, on, off) = setup_light();
        let mut invoker = Invoker::new();

        invoker.set_command(on);
        assert!(invoker.press_button().unwrap());
        invoker.set_command(off);
        assert!(invoker.press_button().unwrap());
        assert!(!light.is_on());

        assert!(invoker.press_undo().unwrap());
        assert!(light.is_on());
        assert_eq!(invoker.history_len(), 1);

        assert!(invoker.press_undo().unwrap());
        assert!(!light.is_on());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let (light, _, _) = setup_light();
        let mut invoker = Invoker::new();

        assert!(!invoker.press_undo().unwrap());
        assert!(!light.is_on());
        assert_eq!(invoker.history_len(), 0);
    }

    #[test]
    fn test_press_without_command_is_noop() {
        let mut invoker = Invoker::new();
        assert!(!invoker.press_button().unwrap());
        assert_eq!(invoker.history_len(), 0);
    }

    #[test]
    fn test_repeated_press_records_each_execution() {
        let (light, on, _) = setup_light();
        let mut invoker = Invoker::new();
        invoker.set_command(on);

        invoker.press_button().unwrap();
        invoker.press_button().unwrap();

        assert_eq!(invoker.history_len(), 2);
        assert!(light.is_on());
        assert_eq!(format!("{invoker:?}").matches("switched on").count(), 3);
    }
}
