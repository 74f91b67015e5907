#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub symbols: bool,
    pub clipboard: bool,
    pub save: bool,
    pub default: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub output: Option<String>,
}
