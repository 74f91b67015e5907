use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-s" | "--symbols" => flags.symbols = true,
            "-b" | "--board" => flags.clipboard = true,
            "-d" | "--default" => flags.default = true,
            "--save" => flags.save = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(parse_number(args, i, "--length")?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(parse_number(args, i, "--number")?);
            }
            "-o" | "--output" => {
                // Path is optional; bare -o falls back to the default file.
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn parse_number(args: &[String], i: usize, flag: &str) -> Result<usize, ParseError> {
    let value = args
        .get(i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}
