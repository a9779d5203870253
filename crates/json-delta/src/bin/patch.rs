//! `jd-patch` — apply a JSON Patch (RFC 6902) to a document.
//!
//! Usage:
//!   jd-patch '<patch-array-json>'
//!
//! The document is read from stdin. The patch operations are the first
//! argument. The patched document is printed to stdout.

use std::io::{self, Read, Write};

use json_delta::{apply_ops, from_json_patch, validate_patch};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let patch_text = match args.get(1) {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a JSON Patch array.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let doc: serde_json::Value = match serde_json::from_str(buf.trim()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid document: {e}");
            std::process::exit(1);
        }
    };
    let patch: serde_json::Value = match serde_json::from_str(&patch_text) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid patch: {e}");
            std::process::exit(1);
        }
    };

    let errors = validate_patch(&patch);
    if !errors.is_empty() {
        for err in errors {
            eprintln!("{err}");
        }
        std::process::exit(1);
    }

    let ops = match from_json_patch(&patch) {
        Ok(ops) => ops,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match apply_ops(doc, &ops) {
        Ok(result) => {
            let out = serde_json::to_string(&result.doc).expect("serialize patched document");
            io::stdout().write_all(out.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
