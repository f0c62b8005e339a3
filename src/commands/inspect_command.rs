//! JPEG metadata inspection command
//!
//! Prints the segment layout, the Exif IFD0 entries and the orientation
//! of a file instead of rendering it.

use std::io::{self, Write};

use clap::ArgMatches;
use log::info;

use crate::api::Glyphcast;
use crate::commands::command_traits::Command;
use crate::exif::errors::{ExifError, ExifResult};

/// Command for describing a file's orientation metadata
pub struct InspectCommand {
    /// Path to the input file
    input_file: String,
}

impl InspectCommand {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new InspectCommand instance or an error
    pub fn new(args: &ArgMatches) -> ExifResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| ExifError::GenericError("Missing input file".to_string()))?
            .clone();

        Ok(InspectCommand { input_file })
    }
}

impl Command for InspectCommand {
    fn execute(&self) -> ExifResult<()> {
        info!("Inspecting {}", self.input_file);

        let report = Glyphcast::default().inspect(&self.input_file)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write!(out, "{}", report)?;
        out.flush()?;

        Ok(())
    }
}
