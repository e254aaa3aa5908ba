//! Interactive counting sort demonstration.
//!
//! Reads a sequence of integers from standard input, asks for the sort order
//! and whether to display the output buffer after each placement step, then
//! prints the sorted sequence. Malformed tokens are re-prompted; a closed
//! stdin is fatal.

use std::io::{self, Write};
use std::process;

use scanner_rust::{Scanner, ScannerError};
use tallysort::prelude::*;

/// Streams each placement state straight to stdout, one line per step.
/// Slots the sort has not filled yet print as 0.
struct PrintState;

impl StateObserver<i64> for PrintState {
    fn on_placement(&mut self, state: &[i64]) {
        print_sequence(state);
    }
}

fn print_sequence(values: &[i64]) {
    let line = values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{line}");
}

fn eof_error() -> ScannerError {
    ScannerError::IOError(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "standard input closed",
    ))
}

fn prompt(text: &str) -> Result<(), ScannerError> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(())
}

fn read_size(sc: &mut Scanner<io::Stdin>) -> Result<usize, ScannerError> {
    prompt("Please input the number of values: ")?;

    loop {
        match sc.next_usize() {
            Ok(Some(size)) if size > 0 => return Ok(size),
            Ok(Some(_)) => prompt("The size must be at least 1, try again: ")?,
            Ok(None) => return Err(eof_error()),
            Err(ScannerError::ParseIntError(_)) => {
                prompt("That is not a positive integer, try again: ")?;
            },
            Err(err) => return Err(err),
        }
    }
}

fn read_values(sc: &mut Scanner<io::Stdin>, size: usize) -> Result<Vec<i64>, ScannerError> {
    prompt(&format!("Please input {size} integer values: "))?;

    let mut values = Vec::with_capacity(size);

    while values.len() < size {
        match sc.next_i64() {
            Ok(Some(value)) => values.push(value),
            Ok(None) => return Err(eof_error()),
            Err(ScannerError::ParseIntError(_)) => {
                prompt(&format!(
                    "That is not an integer, {} value(s) still to read: ",
                    size - values.len()
                ))?;
            },
            Err(err) => return Err(err),
        }
    }

    Ok(values)
}

fn read_direction(sc: &mut Scanner<io::Stdin>) -> Result<Direction, ScannerError> {
    prompt("Please choose the order (1 = ascending, 2 = descending): ")?;

    loop {
        match sc.next_usize() {
            Ok(Some(1)) => return Ok(Direction::Ascending),
            Ok(Some(2)) => return Ok(Direction::Descending),
            Ok(Some(_)) => prompt("Please enter 1 or 2: ")?,
            Ok(None) => return Err(eof_error()),
            Err(ScannerError::ParseIntError(_)) => prompt("Please enter 1 or 2: ")?,
            Err(err) => return Err(err),
        }
    }
}

fn read_show_state(sc: &mut Scanner<io::Stdin>) -> Result<bool, ScannerError> {
    prompt("Display the state after each placement? (y/n): ")?;

    loop {
        match sc.next()? {
            Some(answer) => match answer.as_str() {
                "y" | "Y" | "yes" => return Ok(true),
                "n" | "N" | "no" => return Ok(false),
                _ => prompt("Please answer y or n: ")?,
            },
            None => return Err(eof_error()),
        }
    }
}

fn run() -> Result<(), ScannerError> {
    let mut sc = Scanner::new(io::stdin());

    let size = read_size(&mut sc)?;
    let values = read_values(&mut sc, size)?;
    let direction = read_direction(&mut sc)?;
    let show_state = read_show_state(&mut sc)?;

    println!();

    let result = if show_state {
        counting_sort_observed(&values, direction, &mut PrintState)
    } else {
        counting_sort(&values, direction)
    };

    // The size prompt enforces at least one value, so the engine cannot see
    // an empty sequence here; surface the error anyway rather than panic.
    let sorted = match result {
        Ok(sorted) => sorted,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        },
    };

    println!("\nThe values in {direction} order are :");
    print_sequence(&sorted);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("input error: {err}");
        process::exit(1);
    }
}
