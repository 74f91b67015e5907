//! Command-line interface.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode with the given arguments.
pub fn run(args: Vec<String>) {
    let mut context = match Context::new(args) {
        Ok(context) => context,
        Err(message) => {
            prompts::error(&message);
            eprintln!("Try 'entropass --help' for usage.");
            std::process::exit(2);
        }
    };

    let _ = context.run();
}

/// Print CLI usage.
pub fn print_help() {
    println!("entropass - password generator with entropy scoring");
    println!();
    println!("Generates passwords from a reduced character set (ambiguous glyphs");
    println!("like l, o, I, O, 0 and | are excluded) and rates each one with an");
    println!("entropy estimate and a strength tier. Characters never repeat within");
    println!("a password, so length is capped at 57 (76 with --symbols).");
    println!();
    println!("USAGE:");
    println!("  entropass [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!(" Password:");
    println!("  -l, --length <N>    Characters per password (default: 10)");
    println!("  -n, --number <N>    How many to generate (default: 3)");
    println!("  -s, --symbols       Include symbols in the character pool");
    println!();
    println!(" Output:");
    println!("  -o, --output [FILE] Append to file (default: entropass.txt)");
    println!("  -b, --board         Copy to clipboard instead of printing");
    println!("  -q, --quiet         Print bare passwords, no annotations");
    println!();
    println!(" Settings:");
    println!("      --save          Save current flags as defaults");
    println!("  -d, --default       Ignore saved defaults for this run");
    println!();
    println!(" Info:");
    println!("  -h, --help          Display this help message");
    println!("  -v, --version       Display version");
}
