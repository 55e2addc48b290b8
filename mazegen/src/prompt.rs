use std::io::{self, BufRead, Write};

use crate::error::AppError;

pub const DIMENSION_PROMPT: &str = "What should the dimension of your maze be [0 to exit]? ";

/// Asks for a maze dimension until it gets one in range, or 0 to exit
#[derive(Debug, Clone, Copy)]
pub struct DimensionPrompt {
    pub min: i32,
    pub max: i32,
}

impl DimensionPrompt {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn range_hint(&self) -> String {
        format!(
            "Please enter a number between {} and {}, inclusive.",
            self.min, self.max
        )
    }

    /// Checks a dimension given without the prompt, e.g. on the command line
    pub fn check(&self, dimension: i32) -> Result<i32, AppError> {
        if (self.min..=self.max).contains(&dimension) {
            Ok(dimension)
        } else {
            Err(AppError::OutOfRange {
                value: dimension,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Returns `None` when the user asks to exit, either with 0 or by closing the input
    pub fn ask<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        prompt: &str,
    ) -> io::Result<Option<i32>> {
        let mut line = String::new();

        loop {
            write!(output, "{}", prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(None);
            }

            let response = match line.trim().parse::<i32>() {
                Ok(response) => response,
                Err(_) => {
                    writeln!(output, "Illegal integer format. Try again.")?;
                    continue;
                }
            };

            if response == 0 {
                return Ok(None);
            }

            if self.check(response).is_ok() {
                return Ok(Some(response));
            }

            log::debug!("dimension {} rejected", response);
            writeln!(output, "{}", self.range_hint())?;
        }
    }
}
