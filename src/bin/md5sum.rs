use clap::Parser;
use std::io;

use leafutils::checksum;

#[derive(Parser, Debug)]
#[command(name = "md5sum", version, about = "Compute or check MD5 message digests")]
struct Cli {
    /// read checksums from the FILEs and check them
    #[arg(short = 'c', long = "check")]
    check: bool,
    /// files to digest, or checksum lists with --check; standard input
    /// when none are given
    #[arg(value_name = "FILE")]
    files: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut err = stderr.lock();

    let result = if cli.check {
        checksum::verify(&cli.files, false, &mut out, &mut err)
    } else {
        checksum::generate(&cli.files, &mut out, &mut err)
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("md5sum: {error}");
            std::process::exit(1);
        }
    }
}
