// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![warn(clippy::all)]

//! A small command-line app that renders serialized statements.
//! Run with `cargo run --features json_example --example json_dump FILENAME.json`
//!
//! The input is a JSON array of statements as produced by `serde_json` from
//! `Vec<sqlrestore::ast::Statement>`. Every statement is printed flat,
//! pretty printed, and with its digest.

use std::fs;
use std::io::{stdin, Read};

use simple_logger::SimpleLogger;
use sqlrestore::ast::Statement;
use sqlrestore::digest::digest;
use sqlrestore::format::Pretty;

fn main() {
    SimpleLogger::new().init().unwrap();

    let filename = std::env::args().nth(1).expect(
        r#"
No arguments provided!

Usage:
$ cargo run --features json_example --example json_dump FILENAME.json [--indent N]

To read from stdin instead of a file:
$ cargo run --features json_example --example json_dump -

"#,
    );

    let indent = match std::env::args().nth(2).as_deref() {
        Some("--indent") => std::env::args()
            .nth(3)
            .and_then(|n| n.parse().ok())
            .expect("--indent needs a number"),
        Some(s) => panic!("Unexpected parameter: {s}"),
        None => 4,
    };

    let contents = if filename == "-" {
        let mut buf = Vec::new();
        stdin()
            .read_to_end(&mut buf)
            .expect("failed to read from stdin");
        String::from_utf8(buf).expect("stdin content wasn't valid utf8")
    } else {
        fs::read_to_string(&filename)
            .unwrap_or_else(|_| panic!("Unable to read the file {}", &filename))
    };

    let statements: Vec<Statement> = match serde_json::from_str(&contents) {
        Ok(statements) => statements,
        Err(e) => {
            println!("Error during deserialization: {e}");
            std::process::exit(1);
        }
    };

    let mut failed = false;
    for (i, stmt) in statements.iter().enumerate() {
        println!("-- [{i}] {}", stmt.kind());
        match stmt.to_pretty_sql(indent, " ") {
            Ok(pretty) => println!("Restored:\n{stmt}\nPretty:\n{pretty}"),
            Err(e) => {
                println!("Error during rendering: {e}");
                for crumb in e.breadcrumbs() {
                    println!("  at {crumb}");
                }
                failed = true;
                continue;
            }
        }
        match digest(stmt) {
            Ok(d) => println!("Normalized:\n{}\nDigest: {d}", d.normalized),
            Err(e) => println!("Error during normalization: {e}"),
        }
    }

    std::process::exit(if failed { 1 } else { 0 });
}
