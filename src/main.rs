use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use dumpwalk::{dump_walk, pre_dump_indented, Value, DEFAULT_INDENT};
use std::fs;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("dumpwalk")
        .about("Render JSON as an indented dump tree")
        .arg(
            Arg::new("input")
                .help("Input JSON file (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .help("String repeated once per nesting level")
                .default_value(DEFAULT_INDENT),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .help("Escape the dump and wrap it for an HTML page")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Read and parse the JSON input
    let json_content = match matches.get_one::<String>("input") {
        Some(input_file) => fs::read_to_string(input_file)
            .with_context(|| format!("failed to read {}", input_file))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };
    let json: serde_json::Value =
        serde_json::from_str(&json_content).context("input is not valid JSON")?;
    let value = Value::from_json(json);

    let indent = matches
        .get_one::<String>("indent")
        .map(String::as_str)
        .unwrap_or(DEFAULT_INDENT);
    debug!(indent_width = indent.len(), html = matches.get_flag("html"), "rendering");

    let output = if matches.get_flag("html") {
        pre_dump_indented(&value, indent)
    } else {
        dump_walk(&value, indent)
    };

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }

    Ok(())
}
