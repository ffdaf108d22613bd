//! Menu-driven console over a [`Registry`].
//!
//! The shell owns the registry for the length of a session, collects and
//! validates input through [`Prompter`], and turns every registry outcome
//! into a console message. It works over any `BufRead`/`Write` pair so the
//! binary can drive it from stdin or a script file and tests from memory.

pub mod prompt;

use crate::error::WorkshopError;
use crate::registry::Registry;
use anyhow::{Result, anyhow};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub use prompt::{InputClosed, Prompter};

const MENU: &str = "\nWelcome to the workshop. Choose an option.\n\
1.- New vehicle\n\
2.- List vehicles\n\
3.- Search vehicle\n\
4.- New repair\n\
5.- List repairs\n\
6.- Remove vehicle\n\
0.- Exit";
const NOT_IN_WORKSHOP: &str = "That vehicle is not in the workshop";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    CheckIn,
    ListVehicles,
    Search,
    AddRepair,
    ListRepairs,
    Remove,
}

impl MenuChoice {
    const HIGHEST: u32 = 6;

    fn from_number(value: u32) -> Option<Self> {
        match value {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::CheckIn),
            2 => Some(MenuChoice::ListVehicles),
            3 => Some(MenuChoice::Search),
            4 => Some(MenuChoice::AddRepair),
            5 => Some(MenuChoice::ListRepairs),
            6 => Some(MenuChoice::Remove),
            _ => None,
        }
    }
}

pub struct Shell<R, W> {
    registry: Registry,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        Self {
            registry,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.prompter.into_output())
    }

    /// Serve menu choices until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        info!(
            max_vehicles = self.registry.capacity(),
            max_repairs = self.registry.max_repairs(),
            "workshop session started"
        );
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) if err.is::<InputClosed>() => {
                    debug!("input closed, ending session");
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        self.prompter.flush()?;
        info!(
            vehicles = self.registry.vehicle_count(),
            "workshop session ended"
        );
        Ok(())
    }

    /// Handle one menu choice; `false` once the user asked to exit.
    fn step(&mut self) -> Result<bool> {
        self.prompter.say("*".repeat(20))?;
        let number = self.prompter.read_choice(MENU, 0, MenuChoice::HIGHEST)?;
        let choice =
            MenuChoice::from_number(number).ok_or_else(|| anyhow!("unknown menu option {number}"))?;
        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::Exit => {
                self.prompter.say("You chose to exit. Goodbye!")?;
                return Ok(false);
            }
            MenuChoice::CheckIn => self.check_in()?,
            MenuChoice::ListVehicles => self.prompter.show(&self.registry)?,
            MenuChoice::Search => self.search()?,
            MenuChoice::AddRepair => self.add_repair()?,
            MenuChoice::ListRepairs => self.list_repairs()?,
            MenuChoice::Remove => self.remove()?,
        }
        Ok(true)
    }

    fn banner(&mut self, title: &str) -> Result<()> {
        self.prompter.say("-".repeat(100))?;
        self.prompter.say(title)
    }

    fn check_in(&mut self) -> Result<()> {
        if self.registry.is_full() {
            warn!(capacity = self.registry.capacity(), "check-in refused, workshop full");
            return self
                .prompter
                .say("The workshop is full, there is no room for another vehicle");
        }
        self.banner("New vehicle")?;
        let plate = self.prompter.read_plate()?;
        if self.registry.exists(&plate) {
            warn!(%plate, "check-in refused, vehicle already present");
            return self.prompter.say("This vehicle is already in the workshop");
        }
        let make = self.prompter.read_text("Vehicle make:")?;
        let model = self.prompter.read_text("Vehicle model:")?;
        let color = self.prompter.read_text("Vehicle color:")?;
        match self.registry.insert(plate.clone(), make, model, color) {
            Ok(slot) => {
                debug!(%plate, slot, "vehicle checked in");
                self.prompter.say("Vehicle added to the workshop")
            }
            Err(err) => {
                warn!(%plate, %err, "check-in failed");
                self.prompter
                    .say(format!("Something went wrong and the vehicle was not added: {err}"))
            }
        }
    }

    fn search(&mut self) -> Result<()> {
        self.prompter.say("Vehicle search")?;
        let plate = self.prompter.read_plate()?;
        match self.registry.find(&plate) {
            Some(record) => {
                self.prompter.say("\nResult:")?;
                self.prompter.show(record)
            }
            None => self.prompter.say("Vehicle not found"),
        }
    }

    /// Fetch a copy, append the repair, and write the copy back.
    fn add_repair(&mut self) -> Result<()> {
        let plate = self.prompter.read_plate()?;
        let Some(record) = self.registry.find(&plate) else {
            return self.prompter.say(format!("\n{NOT_IN_WORKSHOP}"));
        };
        if record.repairs().is_full() {
            warn!(%plate, "repair refused, repair list full");
            return self
                .prompter
                .say("This vehicle already has the maximum number of repairs");
        }
        let mut record = record.clone();
        let description = self
            .prompter
            .read_text("Enter the name of the repair to add:")?;
        let outcome = match record.add_repair(description) {
            Ok(index) => self.registry.update(record).map(|()| index),
            Err(err) => Err(err),
        };
        match outcome {
            Ok(index) => {
                debug!(%plate, index, "repair recorded");
                self.prompter.say("Repair added")
            }
            Err(err) => {
                warn!(%plate, %err, "repair not recorded");
                self.prompter.say(format!("The repair was not added: {err}"))
            }
        }
    }

    fn list_repairs(&mut self) -> Result<()> {
        let plate = self.prompter.read_plate()?;
        match self.registry.find(&plate) {
            Some(record) => self.prompter.show(record),
            None => self.prompter.say(format!("\n{NOT_IN_WORKSHOP}")),
        }
    }

    fn remove(&mut self) -> Result<()> {
        let plate = self.prompter.read_plate()?;
        match self.registry.remove(&plate) {
            Ok(_) => {
                debug!(%plate, "vehicle removed");
                self.prompter.say("Vehicle removed")
            }
            Err(WorkshopError::NotFound(_)) => self.prompter.say("This vehicle does not exist"),
            Err(err) => Err(err.into()),
        }
    }
}

/// Run a full session over `input`/`output` and hand back the final registry.
pub fn run_session<R: BufRead, W: Write>(registry: Registry, input: R, output: W) -> Result<Registry> {
    let mut shell = Shell::new(registry, input, output);
    shell.run()?;
    let (registry, _) = shell.into_parts();
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Plate;
    use std::io::Cursor;

    fn session(registry: Registry, script: &str) -> (Registry, String) {
        let mut shell = Shell::new(registry, Cursor::new(script.as_bytes().to_vec()), Vec::new());
        shell.run().expect("session runs");
        assert!(shell.registry().vehicle_count() <= shell.registry().capacity());
        let (registry, output) = shell.into_parts();
        (registry, String::from_utf8(output).unwrap())
    }

    fn session_bytes(script: &[u8]) -> (Registry, String) {
        let mut shell = Shell::new(Registry::new(), Cursor::new(script.to_vec()), Vec::new());
        shell.run().expect("session survives undecodable input");
        let (registry, output) = shell.into_parts();
        (registry, String::from_utf8(output).unwrap())
    }

    #[test]
    fn undecodable_line_mid_session_keeps_vehicles() {
        let (registry, out) = session_bytes(b"1\n\xff\xfe\n1234BCD\nFord\nFocus\nRed\n\xff\n0\n");
        assert!(out.contains("The plate format is not correct."));
        assert!(out.contains("Vehicle added to the workshop"));
        assert!(out.contains("Goodbye!"));
        assert!(registry.exists(&Plate::new("1234BCD").unwrap()));
    }

    #[test]
    fn check_in_then_exit() {
        let (registry, out) = session(Registry::new(), "1\n1234bcd\nFord\nFocus\nRed\n0\n");
        let record = registry.find(&Plate::new("1234BCD").unwrap()).unwrap();
        assert_eq!(record.make(), "Ford");
        assert!(out.contains("Vehicle added to the workshop"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn full_workshop_refuses_before_asking_for_plate() {
        let mut registry = Registry::with_capacity(1, 3);
        registry
            .insert(Plate::new("0001BCD").unwrap(), "Seat", "Ibiza", "White")
            .unwrap();
        let (registry, out) = session(registry, "1\n2\n0\n");
        assert!(out.contains("The workshop is full"));
        assert!(!out.contains("Enter the vehicle plate"));
        assert_eq!(registry.vehicle_count(), 1);
        assert!(out.contains("Vehicle 1 in the workshop:"));
    }

    #[test]
    fn duplicate_plate_is_reported_and_skipped() {
        let script = "1\n1234BCD\nFord\nFocus\nRed\n1\n1234BCD\n0\n";
        let (registry, out) = session(Registry::new(), script);
        assert!(out.contains("This vehicle is already in the workshop"));
        assert_eq!(registry.vehicle_count(), 1);
    }

    #[test]
    fn repairs_are_written_back_until_full() {
        let mut script = String::from("1\n1234BCD\nFord\nFocus\nRed\n");
        for repair in ["Oil", "Brakes", "Tyres"] {
            script.push_str(&format!("4\n1234BCD\n{repair}\n"));
        }
        script.push_str("4\n1234BCD\n5\n1234BCD\n0\n");

        let (registry, out) = session(Registry::new(), &script);
        let record = registry.find(&Plate::new("1234BCD").unwrap()).unwrap();
        assert_eq!(record.repairs().iter().collect::<Vec<_>>(), ["Oil", "Brakes", "Tyres"]);
        assert_eq!(out.matches("Repair added").count(), 3);
        assert!(out.contains("This vehicle already has the maximum number of repairs"));
        assert!(out.contains("  Repair 3: Tyres"));
    }

    #[test]
    fn unknown_plates_are_reported() {
        let (_, out) = session(Registry::new(), "3\n9999XYZ\n4\n9999XYZ\n5\n9999XYZ\n6\n9999XYZ\n0\n");
        assert!(out.contains("Vehicle not found"));
        assert_eq!(out.matches(NOT_IN_WORKSHOP).count(), 2);
        assert!(out.contains("This vehicle does not exist"));
    }

    #[test]
    fn remove_then_list_shows_empty_workshop() {
        let script = "1\n1234BCD\nFord\nFocus\nRed\n6\n1234BCD\n2\n0\n";
        let (registry, out) = session(Registry::new(), script);
        assert!(out.contains("Vehicle removed"));
        assert!(out.contains("There are no vehicles in the workshop"));
        assert_eq!(registry.vehicle_count(), 0);
    }

    #[test]
    fn end_of_input_mid_prompt_ends_session() {
        let (registry, out) = session(Registry::new(), "1\n1234BCD\nFord\n");
        assert_eq!(registry.vehicle_count(), 0);
        assert!(out.contains("Vehicle model:"));
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn invalid_menu_choice_is_reprompted() {
        let (_, out) = session(Registry::new(), "9\nx\n0\n");
        assert_eq!(out.matches("Welcome to the workshop").count(), 3);
    }
}
