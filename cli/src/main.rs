//! sitemark CLI - markup to HTML conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use sitemark::render::{to_html, to_html_with_stats, to_json};
use sitemark::{parse_file, JsonFormat, RenderOptions, DEFAULT_INDENT_WIDTH, DEFAULT_LINE_WIDTH};

const DEFAULT_INPUT: &str = "in.txt";
const DEFAULT_OUTPUT: &str = "out.txt";

#[derive(Parser)]
#[command(name = "sitemark")]
#[command(version)]
#[command(about = "Convert sitemark markup to indented HTML", long_about = None)]
struct Cli {
    /// Input markup file (default: in.txt)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (default: out.txt)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    layout: LayoutArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct LayoutArgs {
    /// Maximum output line width
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH, env = "SITEMARK_WIDTH")]
    width: usize,

    /// Spaces per nesting level
    #[arg(long, default_value_t = DEFAULT_INDENT_WIDTH)]
    indent: usize,

    /// Directory prefix for image sources
    #[arg(long, default_value = "img")]
    image_dir: String,

    /// File extension for image sources
    #[arg(long, default_value = "png")]
    image_ext: String,
}

impl LayoutArgs {
    fn to_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_line_width(self.width)
            .with_indent_width(self.indent)
            .with_image_dir(self.image_dir.clone())
            .with_image_extension(self.image_ext.clone())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert markup to HTML
    Render {
        /// Input markup file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Check that markup converts without errors
    Check {
        /// Input markup file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show conversion statistics as JSON
    Stats {
        /// Input markup file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            layout,
        }) => cmd_render(&input, output.as_deref(), &layout.to_options()),
        Some(Commands::Check { input, layout }) => cmd_check(&input, &layout.to_options()),
        Some(Commands::Stats {
            input,
            compact,
            layout,
        }) => cmd_stats(&input, compact, &layout.to_options()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert in.txt to out.txt in the working directory
            let input = cli.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            let output = cli.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
            cmd_render(&input, Some(&output), &cli.layout.to_options())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    log::info!("read {} lines from {}", doc.line_count(), input.display());

    let html = to_html(&doc, options)?;

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", html);
    }

    Ok(())
}

fn cmd_check(input: &Path, options: &RenderOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    to_html(&doc, options)?;
    println!("{} {}", "OK".green().bold(), input.display());
    Ok(())
}

fn cmd_stats(
    input: &Path,
    compact: bool,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let result = to_html_with_stats(&doc, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", to_json(&result.stats, format)?);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "sitemark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markup to HTML conversion tool");
    println!();
    println!("License: MIT");
}
