use std::env;

mod cli;
mod settings;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    cli::run(args);
}
