use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use glyphcast::utils::logger::Logger;
use glyphcast::commands::{CommandFactory, GlyphcastCommandFactory};
use glyphcast::render::charset::{preset_names, DEFAULT_CHARSET};

fn main() {
    let charset_help = format!(
        "Glyph ramp preset ({}), default {}",
        preset_names().join(", "),
        DEFAULT_CHARSET
    );

    let matches = ClapCommand::new("glyphcast")
        .version("0.1")
        .about("Render images as text, honoring the JPEG Exif orientation")
        .arg(
            Arg::new("input")
                .help("Input image file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .help("Emit 24-bit ANSI color for each glyph")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("width")
                .short('W')
                .long("width")
                .help("Output width in characters [default: 80]")
                .value_name("COLS")
                .required(false),
        )
        .arg(
            Arg::new("height")
                .short('H')
                .long("height")
                .help("Output height in lines [default: 40]")
                .value_name("ROWS")
                .required(false),
        )
        .arg(
            Arg::new("charset")
                .long("charset")
                .help(charset_help)
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("invert")
                .long("invert")
                .help("Map dark pixels to dense glyphs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-orient")
                .long("no-orient")
                .help("Ignore the Exif orientation tag")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("inspect")
                .short('i')
                .long("inspect")
                .help("Print JPEG segments and Exif orientation instead of rendering")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with rendering options")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log records to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = matches.get_one::<String>("log-file").map(String::as_str);

    if let Err(e) = Logger::init_global_logger(log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = GlyphcastCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
