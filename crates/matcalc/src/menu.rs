//! Interactive menu: time the algorithms, or multiply random matrices of any size.

use std::io::{BufRead, Write};

use anyhow::Result;

use matcalc_core::registry::DefaultFactory;
use matcalc_core::{CancellationToken, MatrixError};
use matcalc_orchestration::interfaces::ResultPresenter;

use crate::app::{read_line, run_random, run_timings};
use crate::config::AppConfig;

/// A menu entry. Any unrecognized input exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Times,
    AnyN,
    Exit,
}

impl MenuChoice {
    /// Parse a line of user input.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::Times,
            "2" => Self::AnyN,
            _ => Self::Exit,
        }
    }
}

const MENU: &str = "Menu:\n1. Test algorithm times\n2. Test for any value of n\n3. Exit\n\nInput: ";

/// Run the menu loop until the user exits or input ends.
///
/// Errors from a single run are reported and the menu continues; only I/O
/// failures end the loop with an error.
pub fn run_menu<R: BufRead, W: Write>(
    config: &AppConfig,
    factory: &DefaultFactory,
    presenter: &dyn ResultPresenter,
    cancel: &CancellationToken,
    mut input: R,
    mut out: W,
) -> Result<()> {
    loop {
        write!(out, "{MENU}")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };

        match MenuChoice::parse(&line) {
            MenuChoice::Times => {
                cancel.reset();
                match run_timings(config, factory, presenter, cancel, &mut out) {
                    Ok(()) => {}
                    Err(e)
                        if matches!(
                            e.downcast_ref::<MatrixError>(),
                            Some(MatrixError::Cancelled)
                        ) =>
                    {
                        writeln!(out, "\nTiming cancelled.")?;
                    }
                    Err(e) => presenter.present_error(&format!("{e:#}")),
                }
            }
            MenuChoice::AnyN => {
                write!(out, "Input any value of n: ")?;
                out.flush()?;
                let Some(line) = read_line(&mut input)? else {
                    return Ok(());
                };
                match line.parse::<usize>() {
                    Ok(n) => {
                        if let Err(e) = run_random(n, config, factory, presenter) {
                            presenter.present_error(&format!("{e:#}"));
                        }
                    }
                    Err(_) => writeln!(out, "Invalid value of n: {line:?}")?,
                }
            }
            MenuChoice::Exit => return Ok(()),
        }
        writeln!(out)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use matcalc_cli::presenter::CLIResultPresenter;

    fn run(args: &[&str], input: &str) -> String {
        let config =
            AppConfig::try_parse_from(std::iter::once("matcalc").chain(args.iter().copied()))
                .unwrap();
        let presenter = CLIResultPresenter::new(false, true);
        let mut out = Vec::new();
        run_menu(
            &config,
            &DefaultFactory::new(),
            &presenter,
            &CancellationToken::new(),
            input.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_choices() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Times);
        assert_eq!(MenuChoice::parse(" 2 "), MenuChoice::AnyN);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("x"), MenuChoice::Exit);
    }

    #[test]
    fn exit_immediately() {
        let out = run(&[], "3\n");
        assert!(out.starts_with("Menu:"));
        assert_eq!(out.matches("Menu:").count(), 1);
    }

    #[test]
    fn end_of_input_exits() {
        let out = run(&[], "");
        assert!(out.contains("Input: "));
    }

    #[test]
    fn any_n_then_exit() {
        let out = run(&["--seed", "5"], "2\n3\n3\n");
        assert!(out.contains("Input any value of n: "));
        assert_eq!(out.matches("Menu:").count(), 2);
    }

    #[test]
    fn invalid_n_is_reported() {
        let out = run(&[], "2\nabc\n3\n");
        assert!(out.contains("Invalid value of n: \"abc\""));
    }

    #[test]
    fn times_as_json() {
        let out = run(&["--json", "--max-n", "4", "--rounds", "1"], "1\n3\n");
        assert!(out.contains("\"n\": 4"));
    }
}
