//! `jd-diff` — generate a JSON Patch between two documents.
//!
//! Usage:
//!   jd-diff '<target-json>' [--no-lcs] [--id <pointer>=<key>]...
//!
//! The source document is read from stdin; the target document is the first
//! argument. The patch array is printed to stdout.

use std::io::{self, Read, Write};

use json_delta::{diff, to_json_patch, DiffOptions};

fn parse_options(args: &[String]) -> Result<DiffOptions, String> {
    let mut options = DiffOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--no-lcs" => options = options.without_lcs(),
            "--id" => {
                let pair = iter
                    .next()
                    .ok_or_else(|| "--id requires <pointer>=<key>".to_string())?;
                let (pointer, key) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("bad --id argument `{pair}`, expected <pointer>=<key>"))?;
                options = options.with_identity_key(pointer, key);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(options)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let target_text = match args.get(1) {
        Some(t) => t.clone(),
        None => {
            eprintln!("First argument must be the target document JSON.");
            std::process::exit(1);
        }
    };
    let options = match parse_options(&args[2..]) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let src: serde_json::Value = match serde_json::from_str(buf.trim()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid source document: {e}");
            std::process::exit(1);
        }
    };
    let dst: serde_json::Value = match serde_json::from_str(&target_text) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid target document: {e}");
            std::process::exit(1);
        }
    };

    match diff(&src, &dst, &options) {
        Ok(ops) => {
            let out = serde_json::to_string(&to_json_patch(&ops)).expect("serialize patch");
            io::stdout().write_all(out.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
