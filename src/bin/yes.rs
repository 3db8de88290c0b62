use clap::Parser;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(
    name = "yes",
    version,
    about = "Repeatedly output a line with all specified STRING(s), or 'y'."
)]
struct Cli {
    /// strings joined by single spaces into the repeated line
    #[arg(value_name = "STRING")]
    string: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    let line = if cli.string.is_empty() {
        "y".to_string()
    } else {
        cli.string.join(" ")
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // No internal stopping condition: this runs until the process is
    // terminated or the consumer closes the pipe.
    loop {
        if writeln!(out, "{line}").is_err() {
            break;
        }
    }
}
