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

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn read_keywords() -> Vec<String> {
    let path = Path::new("src").join("keywords.txt");
    if !path.is_file() {
        panic!("Missing src/keywords.txt");
    }
    println!("cargo:rerun-if-changed={}", path.display());

    let data = std::fs::read_to_string(path).expect("Error reading src/keywords.txt");

    let mut keywords = data
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            if line.split_ascii_whitespace().count() != 1 {
                panic!("Invalid keyword: {}", line);
            }
            Some(line.to_ascii_uppercase())
        })
        .collect::<Vec<_>>();
    keywords.sort();
    keywords.dedup();
    keywords
}

fn write_reserved_keywords<W>(file: &mut BufWriter<W>, keywords: &[String])
where
    W: ?Sized + Write,
{
    writeln!(file, "/// Reserved words, sorted.").unwrap();
    writeln!(file, "pub const RESERVED_KEYWORDS: &[&str] = &[").unwrap();
    keywords.iter().for_each(|kw| {
        writeln!(file, "    \"{}\",", kw).unwrap();
    });
    writeln!(file, "];\n").unwrap();
}

fn write_phf_set<W>(file: &mut BufWriter<W>, keywords: &[String])
where
    W: ?Sized + Write,
{
    let mut set = phf_codegen::Set::new();
    for kw in keywords {
        set.entry(kw.as_str());
    }

    write!(
        file,
        "static RESERVED_KEYWORD_SET: phf::Set<&'static str> = {}",
        set.build()
    )
    .unwrap();
    writeln!(file, ";").unwrap();
}

fn main() {
    let keywords = read_keywords();
    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("keyword_gen.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    write_reserved_keywords(&mut file, &keywords);
    write_phf_set(&mut file, &keywords);
}
