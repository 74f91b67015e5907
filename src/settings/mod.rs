//! Generation settings with persisted defaults.

mod file;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub with_symbols: bool,
    pub output_file_path: String,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 10,
            number_of_passwords: 3,
            with_symbols: false,
            output_file_path: String::new(),
            to_clipboard: false,
        }
    }
}
