const USAGE: &str = "\
Usage: false [ignored command line arguments]
  or:  false OPTION
Exit with a status code indicating failure.

      --help     display this help and exit

NOTE: your shell may have its own version of false, which usually supersedes
the version described here.  Please refer to your shell's documentation
for details about the options it supports.
";

/// Arguments are deliberately ignored rather than parsed; an argument
/// parser would reject flags this program is required to swallow. Only
/// a leading `--help` is recognized.
fn main() {
    if std::env::args().nth(1).as_deref() == Some("--help") {
        print!("{USAGE}");
        std::process::exit(0);
    }
    std::process::exit(1);
}
