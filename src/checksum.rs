//! MD5 digest computation and check-list handling for `md5sum`.

use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, Read, Write};
use std::sync::LazyLock;

const PROGRAM: &str = "md5sum";

/// 32 lowercase hex digits, one space, a one-character mode indicator,
/// then the target file name through end of line. Existing checksum
/// files depend on this exact shape.
static CHECK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^([a-f0-9]{32}) (.)(.+)$").expect("check line regex is valid"));

/// One parsed line of a checksum list. Lives only as long as the line
/// it was parsed from.
pub struct CheckLine<'a> {
    pub digest: &'a str,
    /// Traditionally ` ` for text mode or `*` for binary; recorded but
    /// not otherwise interpreted.
    pub mode: char,
    pub target: &'a str,
}

pub fn parse_check_line(line: &str) -> Option<CheckLine<'_>> {
    let caps = CHECK_LINE_RE.captures(line)?;
    Some(CheckLine {
        digest: caps.get(1)?.as_str(),
        mode: caps.get(2)?.as_str().chars().next()?,
        target: caps.get(3)?.as_str(),
    })
}

/// Streams `reader` to completion and returns the digest as 32
/// lowercase hex characters.
pub fn digest_reader<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut ctx = md5::Context::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        ctx.consume(&buf[..n]);
    }
    Ok(format!("{:x}", ctx.compute()))
}

/// Opens and digests one file; the handle is dropped on return.
fn file_digest(path: &str) -> io::Result<String> {
    let mut file = File::open(path)?;
    digest_reader(&mut file)
}

fn report_file_error(err: &mut dyn Write, path: &str, error: &io::Error) -> io::Result<()> {
    if error.kind() == ErrorKind::NotFound {
        writeln!(err, "{PROGRAM}: {path}: No such file or directory")
    } else {
        writeln!(err, "{PROGRAM}: {path}: {error}")
    }
}

/// Generate mode: one `digest  name` line per argument, standard input
/// (named `-`) when no arguments are given. Unreadable files report to
/// `err` and processing continues; the returned exit code is 1 if any
/// file failed.
pub fn generate(files: &[String], out: &mut dyn Write, err: &mut dyn Write) -> io::Result<i32> {
    if files.is_empty() {
        let digest = digest_reader(&mut io::stdin().lock())?;
        writeln!(out, "{digest}  -")?;
        return Ok(0);
    }
    let mut exit_code = 0;
    for file in files {
        match file_digest(file) {
            Ok(digest) => writeln!(out, "{digest}  {file}")?,
            Err(error) => {
                report_file_error(err, file, &error)?;
                exit_code = 1;
            }
        }
    }
    Ok(exit_code)
}

/// Verify mode: each argument is a checksum list; every well-formed
/// line names a target whose digest is recomputed and compared.
/// Malformed lines are skipped, with a diagnostic when `warn` is set.
/// The command surface currently never sets `warn`; the capability is
/// part of the contract regardless.
pub fn verify(
    files: &[String],
    warn: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<i32> {
    let mut exit_code = 0;
    for list in files {
        let file = match File::open(list) {
            Ok(f) => f,
            Err(error) => {
                report_file_error(err, list, &error)?;
                exit_code = 1;
                continue;
            }
        };
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let Some(entry) = parse_check_line(&line) else {
                if warn {
                    writeln!(
                        err,
                        "{PROGRAM}: {list}: {}: improperly formatted MD5 checksum line",
                        index + 1
                    )?;
                }
                continue;
            };
            let recomputed = if entry.target == "-" {
                digest_reader(&mut io::stdin().lock())
            } else {
                file_digest(entry.target)
            };
            match recomputed {
                Ok(digest) if digest == entry.digest => {
                    writeln!(out, "{}: OK", entry.target)?;
                }
                Ok(_) => {
                    writeln!(out, "{}: FAILED", entry.target)?;
                    exit_code = 1;
                }
                Err(error) => {
                    report_file_error(err, entry.target, &error)?;
                    exit_code = 1;
                }
            }
        }
    }
    Ok(exit_code)
}
