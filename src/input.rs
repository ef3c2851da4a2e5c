//! Collects launch inputs from command-line values and interactive prompts.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::core::ballistics::LaunchParameters;
use crate::core::gravity::{Body, GravityTable};
use crate::error::{InputField, TrajectoryError};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
    #[error("input ended unexpectedly (EOF)")]
    Eof,
    #[error(transparent)]
    Invalid(#[from] TrajectoryError),
}

/// Unparsed values as typed by the user. `None` means "ask for it".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub body: Option<String>,
    pub height: Option<String>,
    pub velocity: Option<String>,
    pub angle: Option<String>,
}

/// A validated launch together with the body it takes place on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Launch {
    pub body: Body,
    pub params: LaunchParameters,
}

pub fn parse_number(text: &str, field: InputField) -> Result<f64, TrajectoryError> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| {
        TrajectoryError::invalid(field, format!("'{trimmed}' is not a number"))
    })
}

pub fn parse_ordinal(text: &str) -> Result<i64, TrajectoryError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| {
        TrajectoryError::invalid(
            InputField::Body,
            format!("'{trimmed}' is not a whole number"),
        )
    })
}

pub fn body_menu(table: &GravityTable) -> String {
    let mut menu = String::from("Select the body your object is at:\n");
    for (body, gravity) in table.entries() {
        menu.push_str(&format!(
            " {}. {} ({gravity:.2} m/s^2)\n",
            body.ordinal(),
            body.name()
        ));
    }
    menu
}

fn read_line<R: BufRead, W: Write>(
    prompt: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<String, InputError> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    Ok(line.trim().to_string())
}

fn value_or_prompt<R: BufRead, W: Write>(
    given: Option<String>,
    prompt: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<String, InputError> {
    match given {
        Some(value) => Ok(value),
        None => read_line(prompt, reader, writer),
    }
}

fn collect_conditions<R: BufRead, W: Write>(
    raw: &mut RawInputs,
    reader: &mut R,
    writer: &mut W,
) -> Result<(f64, f64, f64), InputError> {
    let height_text = value_or_prompt(raw.height.take(), "Initial height (m): ", reader, writer)?;
    let initial_height = parse_number(&height_text, InputField::InitialHeight)?;

    let velocity_text =
        value_or_prompt(raw.velocity.take(), "Initial velocity (m/s): ", reader, writer)?;
    let initial_velocity = parse_number(&velocity_text, InputField::InitialVelocity)?;

    let angle_text = value_or_prompt(raw.angle.take(), "Launch angle (degrees): ", reader, writer)?;
    let launch_angle_degrees = parse_number(&angle_text, InputField::LaunchAngle)?;

    Ok((initial_height, initial_velocity, launch_angle_degrees))
}

/// Fills in missing values by prompting, in the order body, height, velocity,
/// angle, then parses and validates them. Any parse or validation failure
/// aborts collection.
pub fn collect<R: BufRead, W: Write>(
    mut raw: RawInputs,
    table: &GravityTable,
    reader: &mut R,
    writer: &mut W,
) -> Result<Launch, InputError> {
    let body_text = value_or_prompt(raw.body.take(), &body_menu(table), reader, writer)?;
    let ordinal = parse_ordinal(&body_text)?;
    let body = Body::from_ordinal(ordinal)?;
    let gravity = table.gravity(body);

    let (height, velocity, angle) = collect_conditions(&mut raw, reader, writer)?;
    let params = LaunchParameters::new(height, velocity, angle, gravity)?;
    Ok(Launch { body, params })
}

/// Like [`collect`] but never asks for a body: the same launch is returned
/// once per body in the table. A body given in `raw` is ignored.
pub fn collect_all_bodies<R: BufRead, W: Write>(
    mut raw: RawInputs,
    table: &GravityTable,
    reader: &mut R,
    writer: &mut W,
) -> Result<Vec<Launch>, InputError> {
    let (height, velocity, angle) = collect_conditions(&mut raw, reader, writer)?;
    table
        .entries()
        .map(|(body, gravity)| {
            let params = LaunchParameters::new(height, velocity, angle, gravity)?;
            Ok(Launch { body, params })
        })
        .collect()
}
