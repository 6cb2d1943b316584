//! The interactive session: menu loop, feature handlers, and the
//! prompt-until-valid loops around the pure validators.
//!
//! Generic over its reader and writer so tests can drive a whole session
//! from a scripted buffer. All terminal reads go through [`Session::read_line`];
//! reading whole lines means a malformed entry is consumed entirely and can
//! never corrupt the next prompt.

use std::io::{BufRead, Write};

use wattlog::api::{ApplianceApi, CmdMessage};
use wattlog::error::{Result, WattlogError};
use wattlog::input::{self, InputError};

use super::menu::{self, MenuChoice};
use super::render;

pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    api: ApplianceApi,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, api: ApplianceApi) -> Self {
        Self { input, output, api }
    }

    /// Runs the menu loop until the user picks exit.
    ///
    /// Feature handlers never fail on bad input; the only errors that can
    /// escape are I/O errors and a closed input stream.
    pub fn run(&mut self) -> Result<()> {
        loop {
            menu::write_menu(&mut self.output)?;
            let line = self.read_line()?;

            match MenuChoice::parse(&line) {
                Ok(MenuChoice::Register) => self.handle_register()?,
                Ok(MenuChoice::ViewAll) => self.handle_view()?,
                Ok(MenuChoice::Search) => self.handle_search()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye.")?;
                    return Ok(());
                }
                Err(_) => {
                    let invalid = CmdMessage::error("Invalid choice. Try again.");
                    render::print_messages(&mut self.output, &[invalid])?;
                }
            }
        }
    }

    fn handle_register(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Register Appliance ---")?;
        let name = self.prompt("Appliance name: ", input::parse_name)?;
        let power_w = self.prompt("Power rating (W): ", input::parse_power_watts)?;
        let hours = self.prompt("Daily usage (hours 0-24): ", input::parse_hours)?;

        let result = self.api.register_appliance(name, power_w, hours);
        render::print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn handle_view(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- All Registered Appliances ---")?;
        let result = self.api.view_appliances();
        if !result.listed.is_empty() {
            render::print_listing(&mut self.output, &result.listed)?;
        }
        render::print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn handle_search(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Search Appliance ---")?;
        if !self.api.has_appliances() {
            let empty = CmdMessage::info("No appliances registered yet.");
            render::print_messages(&mut self.output, &[empty])?;
            return Ok(());
        }

        let term = self.prompt("Enter name to search: ", input::parse_name)?;
        let result = self.api.search_appliances(&term);
        render::print_matches(&mut self.output, &result.listed)?;
        render::print_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    /// Prompts until `parse` accepts a line. Each rejection prints the
    /// reason and asks again; only the stream failing ends the loop.
    fn prompt<T>(
        &mut self,
        text: &str,
        parse: impl Fn(&str) -> std::result::Result<T, InputError>,
    ) -> Result<T> {
        loop {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
            let line = self.read_line()?;

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    let message = CmdMessage::error(format!("Error: {}", e));
                    render::print_messages(&mut self.output, &[message])?;
                }
            }
        }
    }

    /// Reads one line, without its terminator. EOF becomes `InputClosed`.
    fn read_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(WattlogError::InputClosed);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(buf)
    }
}
