use crate::core::conversion::volume_for;
use crate::core::parser::{parse_command, AddCommand, Command, Query};
use crate::domain::model::Registry;
use crate::domain::ports::Storage;
use crate::utils::error::{ConverterError, Result};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter a command, or 'exit' to quit: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit,
}

/// Owns the registry for the lifetime of one interactive run.
pub struct Session<S: Storage> {
    storage: S,
    registry: Registry,
}

impl<S: Storage> Session<S> {
    /// Loads the registry from `storage`. A missing store yields an empty
    /// registry; anything else unreadable is an error.
    pub fn open(storage: S) -> Result<Self> {
        let registry = storage.load()?;
        tracing::info!("Loaded {} substances", registry.len());
        Ok(Self { storage, registry })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Handles one line of input. Only storage failures during `exit` are
    /// returned as errors; everything else becomes a reply.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        match parse_command(line) {
            Ok(Command::Exit) => {
                self.persist()?;
                Ok(Outcome::Exit)
            }
            Ok(Command::Add(add)) => Ok(Outcome::Reply(self.add(add))),
            Ok(Command::Query(query)) => Ok(Outcome::Reply(self.query(&query))),
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {}", line, e);
                Ok(Outcome::Reply(e.user_friendly_message()))
            }
        }
    }

    /// Prompts, reads and replies until `exit` or end of input. The registry
    /// is saved before returning in both cases.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let mut buffer = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buffer.clear();
            let read = input.read_until(b'\n', &mut buffer)?;
            if read == 0 {
                tracing::debug!("End of input, exiting");
                writeln!(output)?;
                return self.persist();
            }

            // Undecodable bytes become U+FFFD and fall through to the parser.
            let line = String::from_utf8_lossy(&buffer);
            let command = line.strip_suffix('\n').unwrap_or(&line);
            let command = command.strip_suffix('\r').unwrap_or(command);

            match self.handle_line(command)? {
                Outcome::Exit => return Ok(()),
                Outcome::Reply(reply) => writeln!(output, "{}", reply)?,
            }
        }
    }

    fn add(&mut self, add: AddCommand) -> String {
        let density = add.unit.to_grams_per_ml(add.value);

        if let Some(previous) = self.registry.insert(add.name.clone(), density) {
            tracing::info!("Replaced {} density {} with {} g/mL", add.name, previous, density);
        } else {
            tracing::info!("Added {} with density {} g/mL", add.name, density);
        }

        if let Err(e) = self.persist() {
            tracing::error!("❌ Failed to save after adding {}: {}", add.name, e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            return format!(
                "Added {} with density {:?} g/mL, but saving failed: {}",
                add.name,
                density,
                e.user_friendly_message()
            );
        }

        format!(
            "Added {} with density {:?} g/mL to the database.",
            add.name, density
        )
    }

    fn query(&self, query: &Query) -> String {
        match volume_for(&self.registry, &query.substance, query.mass_mg) {
            Some(volume) => format!(
                "For {} mg of {}, you need {:.2} mL or {:.2} tablespoons.",
                query.mass_mg, query.substance, volume.milliliters, volume.tablespoons
            ),
            None => ConverterError::SubstanceNotFound {
                name: query.substance.clone(),
            }
            .user_friendly_message(),
        }
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(&self.registry)?;
        tracing::debug!("Saved {} substances", self.registry.len());
        Ok(())
    }
}
