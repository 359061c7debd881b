//! INI reader used for every configuration file.
//!
//! Responsibilities:
//! - Read a character stream fully and parse it into `ConfigValues`.
//!
//! Does NOT handle:
//! - The INI grammar itself; that is `configparser`'s job.
//! - Opening files or attaching paths to errors (see `loader`).
//!
//! Invariants:
//! - Section and key names are case-sensitive.
//! - Keys declared before any section header land in `DEFAULT_SECTION`.
//! - A key without a value is stored as the empty string.
//! - A leading UTF-8 byte order mark is ignored.

use std::io::Read;

use configparser::ini::Ini;
use thiserror::Error;

use crate::constants::DEFAULT_SECTION;
use crate::types::ConfigValues;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Errors produced while reading INI text.
#[derive(Error, Debug)]
pub enum IniError {
    #[error("failed to read configuration text: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration syntax: {0}")]
    Syntax(String),
}

/// Parse INI text from `reader` into a section → key → value mapping.
pub fn read_ini<R: Read>(mut reader: R) -> Result<ConfigValues, IniError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    if text.starts_with(BYTE_ORDER_MARK) {
        text.drain(..BYTE_ORDER_MARK.len_utf8());
    }
    parse_ini(text)
}

fn parse_ini(text: String) -> Result<ConfigValues, IniError> {
    let mut ini = Ini::new_cs();
    ini.set_default_section(DEFAULT_SECTION);

    let parsed = ini.read(text).map_err(IniError::Syntax)?;

    Ok(parsed
        .into_iter()
        .map(|(section, entries)| {
            let entries = entries
                .into_iter()
                .map(|(key, value)| (key, value.unwrap_or_default()))
                .collect();
            (section, entries)
        })
        .collect())
}
