use std::io::{self, Write};
use wattlog::input::{InputError, InputResult};

/// One of the four menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    ViewAll,
    Search,
    Exit,
}

impl MenuChoice {
    /// Maps the numeric menu codes. Anything else, out-of-list integers
    /// and malformed tokens alike, is an unrecognized choice.
    pub fn parse(raw: &str) -> InputResult<Self> {
        match raw.trim().parse::<i32>() {
            Ok(1) => Ok(MenuChoice::Register),
            Ok(2) => Ok(MenuChoice::ViewAll),
            Ok(3) => Ok(MenuChoice::Search),
            Ok(0) => Ok(MenuChoice::Exit),
            _ => Err(InputError::UnknownChoice),
        }
    }
}

/// Writes the banner and option list, ending on the unterminated
/// `Choose: ` prompt.
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "==============================")?;
    writeln!(out, " Appliance Energy Tracker")?;
    writeln!(out, "==============================")?;
    writeln!(out, "1. Register appliance")?;
    writeln!(out, "2. View all appliances")?;
    writeln!(out, "3. Search appliance by name")?;
    writeln!(out, "0. Exit")?;
    write!(out, "Choose: ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_codes() {
        assert_eq!(MenuChoice::parse("1"), Ok(MenuChoice::Register));
        assert_eq!(MenuChoice::parse("2"), Ok(MenuChoice::ViewAll));
        assert_eq!(MenuChoice::parse("3"), Ok(MenuChoice::Search));
        assert_eq!(MenuChoice::parse("0"), Ok(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse(" 2 "), Ok(MenuChoice::ViewAll));
    }

    #[test]
    fn rejects_out_of_list_integers() {
        assert_eq!(MenuChoice::parse("4"), Err(InputError::UnknownChoice));
        assert_eq!(MenuChoice::parse("-1"), Err(InputError::UnknownChoice));
        assert_eq!(MenuChoice::parse("99"), Err(InputError::UnknownChoice));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(MenuChoice::parse("x"), Err(InputError::UnknownChoice));
        assert_eq!(MenuChoice::parse(""), Err(InputError::UnknownChoice));
        assert_eq!(MenuChoice::parse("2.5"), Err(InputError::UnknownChoice));
    }

    #[test]
    fn menu_lists_all_options() {
        let mut out = Vec::new();
        write_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1. Register appliance"));
        assert!(text.contains("2. View all appliances"));
        assert!(text.contains("3. Search appliance by name"));
        assert!(text.contains("0. Exit"));
        assert!(text.ends_with("Choose: "));
    }
}
