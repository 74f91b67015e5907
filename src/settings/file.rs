//! Settings file persistence.
//!
//! Only the generation parameters are persisted; output destination and
//! clipboard choice are per-run flags.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use super::Settings;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{}\n",
        settings.pass_length, settings.number_of_passwords, settings.with_symbols
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !path.exists() {
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() == 3 {
        settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
        settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
        settings.with_symbols = parts[2].parse().unwrap_or(settings.with_symbols);
    } else {
        // Unrecognized layout: rewrite with current values.
        save(settings)?;
    }

    Ok(())
}

#[inline]
fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/entropass/settings")
}
