//! Generate bidishape's `src/unicode/tables.rs`.
//!
//! ```text
//! cargo run --manifest-path tools/ucd-gen/Cargo.toml -- <ucd dir> 14.0.0 > src/unicode/tables.rs
//! ```
//!
//! `<ucd dir>` must hold `UnicodeData.txt` and `ArabicShaping.txt` of the
//! named Unicode version.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

const SHAPE_TAGS: [&str; 4] = ["<isolated>", "<final>", "<initial>", "<medial>"];

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        eprintln!("usage: ucd-gen <ucd dir> <unicode version>");
        std::process::exit(2);
    }
    match generate(Path::new(&args[0]), &args[1]) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn generate(dir: &Path, version: &str) -> Result<String, Box<dyn std::error::Error>> {
    let unicode_data = std::fs::read_to_string(dir.join("UnicodeData.txt"))?;
    let arabic_shaping = std::fs::read_to_string(dir.join("ArabicShaping.txt"))?;

    let mut shapes: BTreeMap<u32, [u32; 4]> = BTreeMap::new();
    let mut transparent_categories = Vec::new();
    for line in data_lines(&unicode_data) {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < 6 {
            return Err(format!("invalid line {}", line).into());
        }
        let cp = u32::from_str_radix(fields[0], 16)?;
        if matches!(fields[2], "Mn" | "Me" | "Cf") {
            transparent_categories.push(cp);
        }
        let parts: Vec<&str> = fields[5].split_whitespace().collect();
        if let [tag, base] = parts[..] {
            if let Some(shape) = SHAPE_TAGS.iter().position(|t| *t == tag) {
                let base = u32::from_str_radix(base, 16)?;
                shapes.entry(base).or_insert([0; 4])[shape] = cp;
            }
        }
    }

    // Listed entries win; unlisted Mn/Me/Cf are transparent. Listed U entries
    // are kept only where they override that default.
    let mut joining: BTreeMap<u32, char> = BTreeMap::new();
    for cp in transparent_categories {
        joining.insert(cp, 'T');
    }
    for line in data_lines(&arabic_shaping) {
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        if fields.len() < 3 {
            return Err(format!("invalid line {}", line).into());
        }
        let cp = u32::from_str_radix(fields[0], 16)?;
        let kind = fields[2]
            .chars()
            .next()
            .ok_or_else(|| format!("missing joining type in {}", line))?;
        if kind == 'U' && !joining.contains_key(&cp) {
            continue;
        }
        joining.insert(cp, kind);
    }

    let mut ranges: Vec<(u32, u32, char)> = Vec::new();
    for (&cp, &kind) in &joining {
        match ranges.last_mut() {
            Some(last) if last.1 + 1 == cp && last.2 == kind => last.1 = cp,
            _ => ranges.push((cp, cp, kind)),
        }
    }

    let mut s = String::new();
    writeln!(s, "//! Arabic joining types and presentation forms.")?;
    writeln!(s, "//!")?;
    writeln!(s, "//! Generated by `tools/ucd-gen` from UnicodeData.txt and ArabicShaping.txt")?;
    writeln!(s, "//! (Unicode {}). Do not edit by hand.", version)?;
    writeln!(s)?;
    writeln!(s, "use crate::types::JoiningType;")?;
    writeln!(s)?;
    writeln!(s, "/// `(code point, [isolated, final, initial, medial])`; 0 means no such form.")?;
    writeln!(s, "pub(crate) static ARABIC_SHAPES: [(u32, [u32; 4]); {}] = [", shapes.len())?;
    for (base, forms) in &shapes {
        let forms: Vec<String> = forms.iter().map(|&f| hex_or_zero(f)).collect();
        writeln!(s, "    (0x{:04X}, [{}]),", base, forms.join(", "))?;
    }
    writeln!(s, "];")?;
    writeln!(s)?;
    writeln!(s, "/// `(first, last, joining type)`, sorted and non-overlapping. Code points")?;
    writeln!(s, "/// missing here are not listed in ArabicShaping.txt and are not of general")?;
    writeln!(s, "/// category Mn, Me or Cf.")?;
    writeln!(s, "pub(crate) static JOINING_RANGES: [(u32, u32, JoiningType); {}] = [", ranges.len())?;
    for (first, last, kind) in ranges {
        writeln!(s, "    (0x{:04X}, 0x{:04X}, JoiningType::{}),", first, last, kind)?;
    }
    writeln!(s, "];")?;
    Ok(s)
}

fn data_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
}

fn hex_or_zero(cp: u32) -> String {
    if cp == 0 {
        "0".to_string()
    } else {
        format!("0x{:04X}", cp)
    }
}
