use clap::Parser;
use serde_json::Value;
use json_get::{parse_path, GetOptions, JsonGet, JsonType};
use tracing::Level;

/// Simple runner: pass JSON and a path via CLI.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON document (string). You can also pipe a file using shell quoting.
    json: String,
    /// Path expression, e.g. `foo/bar[2]`
    path: String,
    /// Expected type of the result, e.g. `int` or `list<str>`
    #[arg(long = "type", default_value = "any")]
    ty: JsonType,
    /// Fallback JSON returned when the path does not exist (optional)
    #[arg(long)]
    default: Option<String>,
    /// Print the parsed path elements instead of resolving them
    #[arg(long)]
    parse_only: bool,
    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.parse_only {
        let parsed = parse_path(&args.path)?;
        println!("{}", serde_json::to_string(&parsed)?);
        return Ok(());
    }

    // Parse input JSON.
    let data: Value = serde_json::from_str(&args.json)
        .map_err(|e| format!("Invalid JSON: {e}"))?;

    // Build options.
    let mut opts = GetOptions::default().expect(args.ty.clone());
    if let Some(def) = args.default.as_ref() {
        let fallback = serde_json::from_str::<Value>(def)
            .unwrap_or_else(|_| Value::String(def.clone()));
        opts = opts.or_default(fallback);
    }

    let jg = JsonGet::new(&data).with_options(opts);
    let out = jg.get(&args.path)?;
    println!("{}", serde_json::to_string_pretty(out)?);
    Ok(())
}
