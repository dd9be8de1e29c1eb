//! # bidishape CLI
//!
//! Usage:
//!   bidishape input.txt --rtl
//!   echo 'abc אבג' | bidishape --levels --vtol
//!   bidishape --config bidi.json --json < input.txt
//!
//! Every input line is one paragraph. Set `RUST_LOG=bidishape=trace` to watch
//! the resolver work.

use std::env;
use std::fs;
use std::io::{self, Read};

use bidishape::{log2vis_str, BidiConfig, BidiError, Direction, ShapingOptions, Visual};

const USAGE: &str = "\
Usage: bidishape [FILE] [OPTIONS]

Reads FILE (or stdin) and prints each line in visual order.

Options:
  --ltr, --rtl         Force the paragraph direction
  --wltr, --wrtl       Detect the direction, falling back to LTR/RTL
  --nomirror           Do not mirror characters on right-to-left levels
  --noreordernsm       Do not keep marks after their base on RTL runs
  --noarabic           Do not join or shape Arabic
  --clean              Remove explicit formatting codes and LRM/RLM
  --levels             Also print the resolved levels
  --ltov, --vtol       Also print the logical/visual index maps
  --json               Print one JSON object per line instead
  --config FILE        Load options from a JSON configuration file
";

/// What to print besides the visual line.
#[derive(Debug, Default)]
struct Output {
    levels: bool,
    ltov: bool,
    vtol: bool,
    json: bool,
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print!("{}", USAGE);
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), BidiError> {
    let mut config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => BidiConfig::from_json(&fs::read_to_string(&w[1])?)?,
        None => BidiConfig::default(),
    };
    let mut output = Output::default();
    let mut input_path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ltr" => config.direction = Direction::Ltr,
            "--rtl" => config.direction = Direction::Rtl,
            "--wltr" => config.direction = Direction::WeakLtr,
            "--wrtl" => config.direction = Direction::WeakRtl,
            "--nomirror" => config.options.remove(ShapingOptions::SHAPE_MIRRORING),
            "--noreordernsm" => config.options.remove(ShapingOptions::REORDER_NSM),
            "--noarabic" => config.options.remove(ShapingOptions::ARABIC),
            "--clean" => config.clean = true,
            "--levels" => output.levels = true,
            "--ltov" => output.ltov = true,
            "--vtol" => output.vtol = true,
            "--json" => output.json = true,
            "--config" => {
                // Already loaded above.
                iter.next();
            }
            other if other.starts_with('-') => {
                return Err(BidiError::InvalidInput(format!(
                    "unknown option {}\n\n{}",
                    other, USAGE
                )));
            }
            path => input_path = Some(path.to_string()),
        }
    }

    let input = match input_path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    for line in input.lines() {
        let mut visual = log2vis_str(line, config.direction, config.options)?;
        if config.clean {
            visual.remove_bidi_marks()?;
        }
        print_visual(&visual, &output)?;
    }
    Ok(())
}

fn print_visual(visual: &Visual, output: &Output) -> Result<(), BidiError> {
    if output.json {
        let json = serde_json::to_string(visual)
            .map_err(|e| BidiError::InvalidInput(format!("cannot serialize output: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", visual.as_string());
    if output.levels {
        println!("{}", join(visual.levels.iter()));
    }
    if output.ltov {
        let positions = visual.logical_to_visual.iter().map(|p| match p {
            Some(p) => p.to_string(),
            None => "-".to_string(),
        });
        println!("{}", join(positions));
    }
    if output.vtol {
        println!("{}", join(visual.visual_to_logical.iter()));
    }
    Ok(())
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(" ")
}
