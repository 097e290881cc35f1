use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;

use munsell_tone::data::{loader, writer};
use munsell_tone::{annotate_table, ToneTable};

const DEFAULT_TONE_COLUMN: &str = "色調";

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
    column: String,
}

fn print_usage() {
    eprintln!("Usage: munsell-tone <input.(csv|json)> [options]");
    eprintln!();
    eprintln!("Appends マンセル値/R/G/B columns derived from the tone column.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <path>   output file (default: <input>_rgb.<ext>)");
    eprintln!("  -c, --column <name>   tone column name (default: {DEFAULT_TONE_COLUMN})");
    eprintln!("  -h, --help            show this help");
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut output = None;
    let mut column = DEFAULT_TONE_COLUMN.to_string();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "-o" | "--output" => {
                let value = args.next().context("missing value after --output")?;
                output = Some(PathBuf::from(value));
            }
            "-c" | "--column" => {
                column = args.next().context("missing value after --column")?;
            }
            other if other.starts_with('-') => {
                print_usage();
                bail!("unknown option: {other}");
            }
            other => {
                if input.is_some() {
                    print_usage();
                    bail!("only one input file is expected");
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    let Some(input) = input else {
        print_usage();
        bail!("no input file given");
    };
    Ok(Args { input, output, column })
}

/// `<stem>_rgb.<ext>` next to the input.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("csv");
    input.with_file_name(format!("{stem}_rgb.{ext}"))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    let tones = ToneTable::builtin();

    let mut table = loader::load_file(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    info!("loaded {} rows from {}", table.len(), args.input.display());

    let summary = annotate_table(&tones, &mut table, &args.column)?;

    let output = args.output.unwrap_or_else(|| default_output(&args.input));
    writer::write_file(&table, &output)
        .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "{}: {} rows ({} converted, {} unknown tone, {} failed)",
        output.display(),
        summary.rows,
        summary.converted,
        summary.unknown,
        summary.failed,
    );
    Ok(())
}
