//! Human-friendly CLI status lines.
//!
//! Scan progress uses `[i]`/`[+]` prefixes, argument failures use `[-]`.
//! When `color` is true, ANSI escape codes are emitted via `owo_colors`.

use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn info(w: &mut impl Write, message: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(w, "{} {message}", "[i]".cyan())
    } else {
        writeln!(w, "[i] {message}")
    }
}

pub fn success(w: &mut impl Write, message: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(w, "{} {message}", "[+]".green())
    } else {
        writeln!(w, "[+] {message}")
    }
}

pub fn failure(w: &mut impl Write, message: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(w, "{} {message}", "[-]".red())
    } else {
        writeln!(w, "[-] {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_carry_the_documented_prefixes() {
        let mut info_buf = Vec::new();
        let mut success_buf = Vec::new();
        let mut failure_buf = Vec::new();

        info(&mut info_buf, "scanning", false).unwrap();
        success(&mut success_buf, "done", false).unwrap();
        failure(&mut failure_buf, "bad args", false).unwrap();

        assert_eq!(String::from_utf8(info_buf).unwrap(), "[i] scanning\n");
        assert_eq!(String::from_utf8(success_buf).unwrap(), "[+] done\n");
        assert_eq!(String::from_utf8(failure_buf).unwrap(), "[-] bad args\n");
    }
}
