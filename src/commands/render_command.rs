//! Text rendering command
//!
//! This module implements the default command: decode an image, turn it
//! upright and print it as text.

use std::io::{self, Write};

use clap::ArgMatches;
use log::{debug, info};

use crate::api::Glyphcast;
use crate::commands::command_traits::Command;
use crate::config::{parse_dimension, RenderOptions};
use crate::exif::errors::{ExifError, ExifResult};
use crate::render::Charset;

/// Command for rendering an image as text
pub struct RenderCommand {
    /// Path to the input file
    input_file: String,
    /// Resolved rendering options
    options: RenderOptions,
}

impl RenderCommand {
    /// Create a new render command
    ///
    /// Options are taken from `--config` when given, then overridden by
    /// any flag set on the command line.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new RenderCommand instance or an error
    pub fn new(args: &ArgMatches) -> ExifResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| ExifError::GenericError("Missing input file".to_string()))?
            .clone();

        let options = resolve_options(args)?;
        debug!("Render options: {:?}", options);

        Ok(RenderCommand {
            input_file,
            options,
        })
    }

    /// Options this command renders with
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Command for RenderCommand {
    fn execute(&self) -> ExifResult<()> {
        info!("Rendering {} at {}x{}", self.input_file, self.options.width, self.options.height);

        let text = Glyphcast::new(self.options.clone()).render(&self.input_file)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;

        Ok(())
    }
}

/// Merges the optional config file with command-line flags
pub fn resolve_options(args: &ArgMatches) -> ExifResult<RenderOptions> {
    let mut options = match args.get_one::<String>("config") {
        Some(path) => RenderOptions::load(path)?,
        None => RenderOptions::default(),
    };

    if let Some(width) = args.get_one::<String>("width") {
        options.width = parse_dimension("width", width)?;
    }
    if let Some(height) = args.get_one::<String>("height") {
        options.height = parse_dimension("height", height)?;
    }
    if let Some(name) = args.get_one::<String>("charset") {
        options.charset = Charset::preset(name)?;
    }
    if args.get_flag("color") {
        options.color = true;
    }
    if args.get_flag("invert") {
        options.invert = true;
    }
    if args.get_flag("no-orient") {
        options.orient = false;
    }

    Ok(options)
}
