use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use placement_core::{
    FurnitureCatalog, PlacementBatch, Position, facing_rotation, generate_manifest,
};

type DynError = Box<dyn Error>;
type Flags = HashMap<String, String>;

fn main() -> Result<(), DynError> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        print_usage();
        return Ok(());
    }

    match args[0].as_str() {
        "solve" => run_solve(&args[1..]),
        "facing" => run_facing(&args[1..]),
        "catalog" => run_catalog(&args[1..]),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn run_solve(args: &[String]) -> Result<(), DynError> {
    let flags = parse_flags(args)?;
    let request_file = required_str(&flags, "--request")?;
    let pretty = optional_bool(&flags, "--pretty", false)?;
    println!("{}", render_manifest(request_file, pretty)?);
    Ok(())
}

fn run_facing(args: &[String]) -> Result<(), DynError> {
    let flags = parse_flags(args)?;
    let x = required_f64(&flags, "--x")?;
    let y = required_f64(&flags, "--y")?;
    println!("{}", facing_rotation(Position { x, y }));
    Ok(())
}

fn run_catalog(args: &[String]) -> Result<(), DynError> {
    let flags = parse_flags(args)?;
    let file = required_str(&flags, "--file")?;
    print!("{}", render_catalog(file)?);
    Ok(())
}

/// Solves the batch in `path` and renders the manifest as JSON.
///
/// A manifest with collisions is still a successful solve; only unreadable
/// or malformed input is an error.
fn render_manifest(path: impl AsRef<Path>, pretty: bool) -> Result<String, DynError> {
    let raw = fs::read_to_string(path)?;
    let batch: PlacementBatch =
        serde_json::from_str(&raw).map_err(|err| format!("invalid request file: {err}"))?;
    let manifest = generate_manifest(&batch);

    let rendered = if pretty {
        serde_json::to_string_pretty(&manifest)?
    } else {
        serde_json::to_string(&manifest)?
    };
    Ok(rendered)
}

/// Lists catalog entries as tab-separated lines in id order.
fn render_catalog(path: impl AsRef<Path>) -> Result<String, DynError> {
    let raw = fs::read_to_string(path)?;
    let catalog = FurnitureCatalog::from_json(&raw)?;

    let mut out = String::new();
    for entry in catalog.entries() {
        match &entry.dimensions {
            Some(dimensions) => out.push_str(&format!(
                "{}\t{}\t{}\t{}x{}x{}\n",
                entry.id,
                entry.name,
                entry.category,
                dimensions.width,
                dimensions.height,
                dimensions.depth
            )),
            None => out.push_str(&format!(
                "{}\t{}\t{}\t-\n",
                entry.id, entry.name, entry.category
            )),
        }
    }
    Ok(out)
}

fn parse_flags(args: &[String]) -> Result<Flags, DynError> {
    if args.len() % 2 != 0 {
        return Err("expected flag-value pairs".into());
    }

    let mut flags = HashMap::new();
    let mut index = 0;
    while index < args.len() {
        let flag = args[index].as_str();
        if !flag.starts_with("--") {
            return Err(format!("expected flag at position {}", index + 1).into());
        }
        let value = args[index + 1].clone();
        if flags.insert(flag.to_string(), value).is_some() {
            return Err(format!("duplicate flag: {flag}").into());
        }
        index += 2;
    }
    Ok(flags)
}

fn required_str<'a>(flags: &'a Flags, key: &str) -> Result<&'a str, DynError> {
    flags
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| format!("missing required {key}").into())
}

fn required_f64(flags: &Flags, key: &str) -> Result<f64, DynError> {
    required_str(flags, key)?
        .parse::<f64>()
        .map_err(|err| format!("invalid float for {key}: {err}").into())
}

fn optional_bool(flags: &Flags, key: &str, default: bool) -> Result<bool, DynError> {
    match flags.get(key) {
        Some(value) => value
            .parse::<bool>()
            .map_err(|err| format!("invalid bool for {key}: {err}").into()),
        None => Ok(default),
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  placement-cli solve --request <path> [--pretty <bool>]");
    eprintln!("  placement-cli facing --x <f64> --y <f64>");
    eprintln!("  placement-cli catalog --file <path>");
}
