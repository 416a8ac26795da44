use crate::core::units::DensityUnit;
use crate::utils::error::{ConverterError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Query(Query),
    Exit,
}

/// `add <name> <value><unit>`, with the value still in `unit`.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    pub name: String,
    pub value: f64,
    pub unit: DensityUnit,
}

/// `<mass>mg <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub mass_mg: i64,
    pub substance: String,
}

const MASS_SUFFIX: &str = "mg";

/// Classifies one input line (without its line terminator).
pub fn parse_command(line: &str) -> Result<Command> {
    let lowered = line.to_lowercase();
    if lowered == "exit" {
        Ok(Command::Exit)
    } else if lowered.starts_with("add") {
        parse_add(line).map(Command::Add)
    } else {
        parse_query(line).map(Command::Query)
    }
}

pub fn parse_add(line: &str) -> Result<AddCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 || !parts[0].eq_ignore_ascii_case("add") {
        return Err(ConverterError::InvalidAddFormat);
    }

    let name = parts[1].to_lowercase();
    let density_text: String = parts[2..]
        .concat()
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ' && *c != '/')
        .collect();

    let (unit, position) = DensityUnit::ALL
        .iter()
        .find_map(|unit| density_text.find(unit.match_key()).map(|at| (*unit, at)))
        .ok_or(ConverterError::UnitNotFound)?;

    let literal = &density_text[..position];
    let value = literal
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConverterError::InvalidDensityValue {
            literal: literal.to_string(),
        })?;

    Ok(AddCommand { name, value, unit })
}

pub fn parse_query(line: &str) -> Result<Query> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [mass, substance] = parts.as_slice() else {
        return Err(ConverterError::InvalidQueryFormat);
    };

    let literal = mass
        .strip_suffix(MASS_SUFFIX)
        .ok_or(ConverterError::InvalidQueryFormat)?;
    let mass_mg = literal
        .parse::<i64>()
        .map_err(|_| ConverterError::InvalidMassValue {
            literal: literal.to_string(),
        })?;

    Ok(Query {
        mass_mg,
        substance: substance.to_lowercase(),
    })
}
