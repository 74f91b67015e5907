//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use rand::thread_rng;
use zeroize::Zeroize;

use entropass::pass::{self, GenerationRequest, Password};

use super::{CliFlags, print_help, prompts, quiet};
use crate::settings::Settings;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.handle_save();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("entropass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if self.flags.symbols {
            self.settings.with_symbols = true;
        }

        // Apply output file
        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = if path.ends_with('/') || path == "." {
                if path == "." {
                    "entropass.txt".to_string()
                } else {
                    format!("{}entropass.txt", path)
                }
            } else {
                path.clone()
            };
        }

        // Handle clipboard
        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }

        // Never persist settings a bare run cannot satisfy.
        if let Err(e) = self.request().validate() {
            prompts::warn(&format!("Not saving settings: {}", e));
            return;
        }

        if let Err(e) = self.settings.save_to_file() {
            prompts::warn(&format!("Failed to save settings: {}", e));
        } else {
            prompts::settings_saved();
        }
    }

    /// The generation request the current settings describe.
    fn request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.settings.pass_length,
            count: self.settings.number_of_passwords,
            with_symbols: self.settings.with_symbols,
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) {
        let request = self.request();

        let passwords = match pass::generate(&request, &mut thread_rng()) {
            Ok(passwords) => passwords,
            Err(e) => {
                prompts::error(&format!("Error: {}", e));
                std::process::exit(1);
            }
        };

        if self.settings.to_clipboard {
            self.copy_to_clipboard(&passwords);
        } else if !self.settings.output_file_path.is_empty() {
            self.write_to_file(&passwords);
        } else {
            let annotate = !quiet::enabled() && quiet::stdout_is_tty();
            pass::output::print_terminal(&passwords, annotate);
        }
    }

    fn copy_to_clipboard(&mut self, passwords: &[Password]) {
        let mut text = pass::output::clipboard_text(passwords);
        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(text.clone()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(passwords.len());
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                }
            }
        }
        text.zeroize();
    }

    fn write_to_file(&self, passwords: &[Password]) {
        let path = &self.settings.output_file_path;
        if let Err(e) = pass::output::write_file(passwords, path) {
            prompts::error(&format!("Failed to write {}: {}", path, e));
            std::process::exit(1);
        }

        let full_path = std::fs::canonicalize(path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| path.clone());
        prompts::passwords_written(passwords.len(), &full_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with(settings: Settings, flags: CliFlags) -> Context {
        Context {
            settings,
            clipboard: None,
            flags,
        }
    }

    #[test]
    fn unsatisfiable_settings_fail_request_validation() {
        // --save -l 999 must not persist a length no bare run can generate.
        let context = context_with(
            Settings {
                pass_length: 999,
                ..Default::default()
            },
            CliFlags {
                save: true,
                ..Default::default()
            },
        );
        assert!(context.request().validate().is_err());
    }

    #[test]
    fn default_settings_pass_request_validation() {
        let context = context_with(Settings::default(), CliFlags::default());
        assert!(context.request().validate().is_ok());
    }

    #[test]
    fn request_mirrors_settings() {
        let context = context_with(
            Settings {
                pass_length: 16,
                number_of_passwords: 5,
                with_symbols: true,
                ..Default::default()
            },
            CliFlags::default(),
        );

        let request = context.request();
        assert_eq!(request.length, 16);
        assert_eq!(request.count, 5);
        assert!(request.with_symbols);
    }
}
