//! Prompt-driven form: pick a shape, enter its lengths, read the result.

use std::io::{BufRead, Write};

use anyhow::Result;
use solidcalc::{check_length, ShapeKind, Solid};

use crate::config::Config;
use crate::render;

/// One line of input, trimmed. `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Resolve a menu answer given as a 1-based number or a shape name.
fn parse_choice(answer: &str) -> Option<ShapeKind> {
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| ShapeKind::ALL.get(i))
            .copied();
    }
    answer.parse().ok()
}

/// Ask for one length until a valid one is entered. `None` at end of input.
fn prompt_length(
    field: &'static str,
    unit: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<f64>> {
    loop {
        if unit.is_empty() {
            write!(output, "{field}: ")?;
        } else {
            write!(output, "{field} ({unit}): ")?;
        }
        output.flush()?;

        let Some(answer) = read_line(input)? else {
            return Ok(None);
        };
        let value = match answer.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                writeln!(output, "  `{answer}` is not a number")?;
                continue;
            }
        };
        match check_length(field, value) {
            Ok(v) => return Ok(Some(v)),
            Err(e) => {
                tracing::debug!(field, value, "rejected input");
                writeln!(output, "  {e}")?;
            }
        }
    }
}

/// Run the form until the user quits or input ends.
pub fn run(input: &mut impl BufRead, output: &mut impl Write, config: &Config) -> Result<()> {
    loop {
        writeln!(output, "Shapes:")?;
        write!(output, "{}", render::shape_menu())?;
        write!(output, "Choose a shape (number or name, empty to quit): ")?;
        output.flush()?;

        let Some(answer) = read_line(input)? else {
            break;
        };
        if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
            break;
        }
        let Some(kind) = parse_choice(&answer) else {
            writeln!(output, "  unknown shape `{answer}`\n")?;
            continue;
        };

        let mut values = Vec::new();
        for &field in kind.parameter_names() {
            match prompt_length(field, &config.unit, input, output)? {
                Some(v) => values.push(v),
                None => return Ok(()),
            }
        }

        let solid = match Solid::from_values(kind, &values) {
            Ok(solid) => solid,
            Err(e) => {
                tracing::debug!(shape = %kind, error = %e, "rejected dimensions");
                writeln!(output, "  {e}\n")?;
                continue;
            }
        };
        writeln!(output)?;
        write!(output, "{}", render::report(&solid, config.precision, &config.unit))?;
        writeln!(output)?;
    }
    Ok(())
}
