//! SVG Glyphs CLI
//!
//! Usage:
//!   svg-glyphs [OPTIONS] [ICON]
//!
//! Options:
//!   --width <LEN>, --height <LEN>, --size <LEN>  Override dimensions
//!   --class <CLASS>                              Extra class after the default
//!   --fill <PAINT>, --monochrome                 Brand icon paint mode
//!   --tokens <FILE>                              Token sheet (TOML) over the defaults
//!   --indent <N>, --compact, --standalone        Output layout
//!   --list                                       List catalog icons
//!   --path <DATA>                                Parse and normalize path data
//!   -h, --help                                   Print help

use std::path::PathBuf;
use std::process;

use clap::Parser;

use svg_glyphs::{
    IconName, IconOptions, Length, Paint, PathData, RenderConfig, SerializeConfig, Tokens,
};

#[derive(Parser)]
#[command(name = "svg-glyphs")]
#[command(about = "Render catalog icons as SVG markup")]
struct Cli {
    /// Icon name, e.g. close or chevron-down
    icon: Option<String>,

    /// Width as a length (20, 20px, 50%) or a length token name
    #[arg(long)]
    width: Option<String>,

    /// Height as a length or a length token name
    #[arg(long)]
    height: Option<String>,

    /// Width and height together
    #[arg(long, conflicts_with_all = ["width", "height"])]
    size: Option<String>,

    /// Extra class appended after the icon's default class
    #[arg(long, default_value = "")]
    class: String,

    /// Paint for monochrome brand icons: #hex, keyword, currentColor or token(name)
    #[arg(long)]
    fill: Option<String>,

    /// Paint every layer of a brand icon with --fill
    #[arg(long)]
    monochrome: bool,

    /// Token sheet (TOML) layered over the defaults
    #[arg(long)]
    tokens: Option<PathBuf>,

    /// Base indentation level
    #[arg(long, default_value_t = 0)]
    indent: usize,

    /// Single-line output
    #[arg(long)]
    compact: bool,

    /// Prepend an XML declaration
    #[arg(long)]
    standalone: bool,

    /// List catalog icons and exit
    #[arg(long)]
    list: bool,

    /// Parse path data and print it in canonical form
    #[arg(long, value_name = "DATA")]
    path: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.list {
        print_catalog();
        return;
    }

    if let Some(data) = &cli.path {
        match data.parse::<PathData>() {
            Ok(path) => println!("{}", path),
            Err(e) => {
                eprint!("{}", e.format(data, "<path>"));
                process::exit(1);
            }
        }
        return;
    }

    let Some(icon) = &cli.icon else {
        eprintln!("Error: no icon given (run with --list to see the catalog)");
        process::exit(1);
    };

    let icon: IconName = match icon.parse() {
        Ok(icon) => icon,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Load tokens over the embedded defaults
    let tokens = match &cli.tokens {
        Some(path) => match Tokens::from_file(path) {
            Ok(user) => Tokens::defaults().clone().overlay(user),
            Err(e) => {
                eprintln!("Error loading tokens '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Tokens::defaults().clone(),
    };

    let options = match build_options(&cli, &tokens) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    let serialize = SerializeConfig::new()
        .with_pretty_print(!cli.compact)
        .with_standalone(cli.standalone);
    let config = RenderConfig::new()
        .with_serialize(serialize)
        .with_tokens(tokens);

    println!("{}", icon.render(&options, &config, cli.indent));
}

fn build_options(cli: &Cli, tokens: &Tokens) -> Result<IconOptions, String> {
    let mut options = IconOptions::new()
        .with_class(cli.class.clone())
        .with_monochrome(cli.monochrome);

    if let Some(size) = &cli.size {
        options = options.with_size(parse_length(size, tokens)?);
    }
    if let Some(width) = &cli.width {
        options = options.with_width(parse_length(width, tokens)?);
    }
    if let Some(height) = &cli.height {
        options = options.with_height(parse_length(height, tokens)?);
    }
    if let Some(fill) = &cli.fill {
        let paint: Paint = fill.parse().map_err(|e| format!("--fill: {}", e))?;
        options = options.with_fill(paint);
    }
    Ok(options)
}

/// A length literal, or the name of a length token
fn parse_length(text: &str, tokens: &Tokens) -> Result<Length, String> {
    match text.parse::<Length>() {
        Ok(length) => Ok(length),
        Err(e) => tokens.length(text).ok_or_else(|| e.to_string()),
    }
}

fn print_catalog() {
    for name in IconName::ALL {
        let kind = if name.is_brand() { "brand" } else { "" };
        println!("{:<16}{:<28}{}", name.as_str(), name.default_class(), kind);
    }
}
