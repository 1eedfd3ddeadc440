use std::env;
use log::error;

use percode::engine::use_command;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() <= 2 {
        error!("Usage:\n  {} encode <text>\n  {} decode <percent_encoded_text>",
                  args[0], args[0]);
        return;
    }

    if let Err(e) = use_command(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
