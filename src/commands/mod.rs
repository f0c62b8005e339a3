//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod render_command;
pub mod inspect_command;

pub use command_traits::{Command, CommandFactory};
pub use render_command::RenderCommand;
pub use inspect_command::InspectCommand;

use clap::ArgMatches;
use crate::exif::errors::ExifResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
#[derive(Default)]
pub struct GlyphcastCommandFactory;

impl GlyphcastCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GlyphcastCommandFactory
    }
}

impl CommandFactory for GlyphcastCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> ExifResult<Box<dyn Command>> {
        if args.get_flag("inspect") {
            Ok(Box::new(InspectCommand::new(args)?))
        } else {
            // Default to rendering
            Ok(Box::new(RenderCommand::new(args)?))
        }
    }
}
