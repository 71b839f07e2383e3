/**
 * Turns resources/locales.txt into the static culture table used by
 * the i18n module.
 */

use std::{env, fs::File, io::{BufRead, BufReader, BufWriter, Write}, path::Path};

use thiserror::Error;

const LOCALES_PATH: &str = "resources/locales.txt";
const GENERATED_FILE: &str = "locales.rs";

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("OUT_DIR is not available: {0}")]
    OutDir(#[from] env::VarError),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Line {line_num} has {fields} field(s), expected 'locale|region|name'")]
    MalformedLine { line_num: usize, fields: usize },
}

struct LocaleLine {
    locale: String,
    region: String,
    english_name: String,
}

fn parse_locales(path: &str, locales: &mut Vec<LocaleLine>) -> Result<(), BuildError> {
    locales.clear();

    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if line_buffer.len() > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        match fields.as_slice() {
            [locale, region, english_name] if !locale.is_empty() && !english_name.is_empty() => {
                locales.push(LocaleLine {
                    locale: locale.to_string(),
                    region: region.to_string(),
                    english_name: english_name.to_string(),
                });
            }
            _ => {
                return Err(BuildError::MalformedLine {
                    line_num: line_number,
                    fields: fields.len(),
                });
            }
        }
    }

    Ok(())
}

fn write_locales(path: &Path, locales: &[LocaleLine]) -> Result<(), BuildError> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "// Generated from {} by build/rust_build.rs.", LOCALES_PATH)?;
    writeln!(out, "pub(crate) static LOCALES: &[(&str, &str, &str)] = &[")?;
    for line in locales {
        writeln!(
            out,
            "    ({:?}, {:?}, {:?}),",
            line.locale, line.region, line.english_name
        )?;
    }
    writeln!(out, "];")?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed={}", LOCALES_PATH);
    println!("cargo:rerun-if-changed=build/rust_build.rs");

    let mut locales = Vec::new();
    parse_locales(LOCALES_PATH, &mut locales)?;

    let out_dir = env::var("OUT_DIR")?;
    write_locales(&Path::new(&out_dir).join(GENERATED_FILE), &locales)?;
    Ok(())
}
