//! Password output: terminal, file, and clipboard formatting.

use std::fs::OpenOptions;
use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use zeroize::Zeroize;

use super::entropy::Strength;
use super::service::Password;

fn tier_color(tier: Strength) -> Color {
    match tier {
        Strength::VeryWeak => Color::Red,
        Strength::Weak => Color::DarkYellow,
        Strength::Reasonable => Color::Yellow,
        Strength::Strong => Color::Green,
        Strength::VeryStrong => Color::Cyan,
    }
}

/// Print passwords to stdout in draw order.
///
/// With `annotate`, each line carries the entropy score and a colored tier
/// label; without it (quiet mode, piped output) only the bare values are
/// printed.
pub fn print_terminal(passwords: &[Password], annotate: bool) {
    for password in passwords {
        if annotate {
            let tier = Strength::classify(password.entropy);
            let label = tier.label().with(tier_color(tier));
            println!("{}  {} bits ({})", password.value, password.entropy, label);
        } else {
            println!("{}", password.value);
        }
    }
}

/// Append password values to `path`, one per line. The write buffer is
/// zeroized after flushing.
pub fn write_file(passwords: &[Password], path: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut buf: Vec<u8> = Vec::new();
    for password in passwords {
        buf.extend_from_slice(password.value.as_bytes());
        buf.push(b'\n');
    }

    let result = file.write_all(&buf).and_then(|_| file.flush());
    buf.zeroize();
    result
}

/// Newline-joined values for the clipboard. The caller owns zeroizing the
/// returned string once the clipboard has taken it.
pub fn clipboard_text(passwords: &[Password]) -> String {
    let mut text = String::new();
    for password in passwords {
        text.push_str(&password.value);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(value: &str, entropy: u32) -> Password {
        Password {
            value: value.to_string(),
            entropy,
        }
    }

    #[test]
    fn clipboard_text_joins_values_in_order() {
        let passwords = vec![password("abc", 14), password("XYZ", 14)];
        assert_eq!(clipboard_text(&passwords), "abc\nXYZ\n");
    }

    #[test]
    fn write_file_appends_one_value_per_line() {
        let path = std::env::temp_dir().join(format!("entropass-test-{}", std::process::id()));
        let path = path.to_string_lossy().into_owned();

        let first = vec![password("abc", 14)];
        let second = vec![password("XYZ", 14)];
        write_file(&first, &path).unwrap();
        write_file(&second, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(contents, "abc\nXYZ\n");
    }
}
