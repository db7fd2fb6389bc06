//! # fieldwork basics demo
//!
//! Walks a set of sample inputs through a single field, then parses a small
//! search form in both fail-fast and collect-all mode.
//!
//! ## Running
//!
//! ```bash
//! cargo run --package basics-demo
//! cargo run --package basics-demo -- q=rust limit=1000 mode=fuzzy
//! ```
//!
//! Arguments are `key=value` pairs forming the raw input mapping; a bare
//! `key` maps to an absent value.

use std::collections::HashMap;

use clap::Parser;
use once_cell::sync::Lazy;

use fieldwork_core::logging::setup_logging;
use fieldwork_forms::{Field, Form};

/// An optional paging limit: defaults to 10, clamped to `[0, 100]`.
static LIMIT_FIELD: Lazy<Field<i32>> =
    Lazy::new(|| Field::i32("limit").with_default(10).clamp_min(0).clamp_max(100));

static QUERY_FIELD: Lazy<Field<String>> = Lazy::new(|| Field::string("q").required());

static MODE_FIELD: Lazy<Field<String>> = Lazy::new(|| {
    Field::string("mode")
        .with_default("plain".to_string())
        .one_of(["plain".to_string(), "regex".to_string()])
});

static SEARCH_FORM: Lazy<Form> = Lazy::new(|| {
    Form::new([
        QUERY_FIELD.to_any(),
        LIMIT_FIELD.to_any(),
        MODE_FIELD.to_any(),
    ])
});

#[derive(Parser)]
#[command(name = "basics", about = "fieldwork demonstration: typed parsing of key=value input")]
struct Args {
    /// Raw inputs as `key=value` pairs (a bare `key` maps to an absent value)
    inputs: Vec<String>,

    /// Log filter directive (e.g. "debug", "fieldwork_forms=trace")
    #[arg(long, default_value = "info")]
    log: String,

    /// Emit JSON logs instead of the human-readable format
    #[arg(long)]
    json_logs: bool,
}

fn main() {
    let args = Args::parse();
    setup_logging(&args.log, !args.json_logs);

    demonstrate_single_field();

    let inputs = if args.inputs.is_empty() {
        tracing::info!("no inputs given, using the built-in sample");
        sample_inputs()
    } else {
        parse_inputs(&args.inputs)
    };
    demonstrate_form(&inputs);
}

/// Runs the `limit` field over a fixed set of sample inputs.
fn demonstrate_single_field() {
    println!("== single field: {} ==", LIMIT_FIELD.name());
    for input in [Some("0"), Some("50"), Some("-10"), Some("1000"), Some("x"), None] {
        let shown = input.unwrap_or("<absent>");
        match LIMIT_FIELD.validate(input) {
            Ok(Some(value)) => println!("{shown:>9} -> {value}"),
            Ok(None) => println!("{shown:>9} -> <absent>"),
            Err(err) => println!("{shown:>9} -> ERROR: {err}"),
        }
    }
}

/// Parses the search form in both modes and prints the outcome.
fn demonstrate_form(inputs: &HashMap<String, Option<String>>) {
    println!("\n== form: fail-fast ==");
    match SEARCH_FORM.parse(inputs) {
        Ok(result) => {
            println!("q     = {:?}", result.get(&QUERY_FIELD));
            println!("limit = {:?}", result.get(&LIMIT_FIELD));
            println!("mode  = {:?}", result.get(&MODE_FIELD));
        }
        Err(err) => println!("first failure: {err}"),
    }

    println!("\n== form: collect-all ==");
    match SEARCH_FORM.parse_all(inputs) {
        Ok(result) => {
            println!("q     = {:?}", result.get(&QUERY_FIELD));
            println!("limit = {:?}", result.get(&LIMIT_FIELD));
            println!("mode  = {:?}", result.get(&MODE_FIELD));
        }
        Err(err) => {
            println!("{err}:");
            let payload = serde_json::to_string_pretty(&err)
                .unwrap_or_else(|e| format!("<unserializable: {e}>"));
            println!("{payload}");
        }
    }
}

/// The sample input: a present query, an out-of-range limit, no mode.
fn sample_inputs() -> HashMap<String, Option<String>> {
    let mut inputs = HashMap::new();
    inputs.insert("q".to_string(), Some("rust forms".to_string()));
    inputs.insert("limit".to_string(), Some("1000".to_string()));
    inputs
}

/// Splits `key=value` arguments into the raw input mapping. A bare `key`
/// maps to an absent value.
fn parse_inputs(pairs: &[String]) -> HashMap<String, Option<String>> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), Some(value.to_string())),
            None => (pair.clone(), None),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inputs_splits_pairs() {
        let inputs = parse_inputs(&["q=rust".to_string(), "limit".to_string()]);
        assert_eq!(inputs.get("q"), Some(&Some("rust".to_string())));
        assert_eq!(inputs.get("limit"), Some(&None));
    }

    #[test]
    fn test_sample_inputs_parse() {
        let result = SEARCH_FORM.parse(&sample_inputs()).unwrap();
        assert_eq!(result.get(&LIMIT_FIELD), Some(&100));
        assert_eq!(result.get(&MODE_FIELD), Some(&"plain".to_string()));
    }
}
