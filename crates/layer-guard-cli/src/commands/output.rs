//! Console report for check results.

use layer_guard_core::{CheckResult, Summary};
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

/// Escape sequences used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    red: &'static str,
    green: &'static str,
    yellow: &'static str,
    blue: &'static str,
    reset: &'static str,
}

impl Palette {
    /// Bold ANSI colors.
    pub const ANSI: Self = Self {
        red: "\x1b[1;31m",
        green: "\x1b[1;32m",
        yellow: "\x1b[1;33m",
        blue: "\x1b[1;34m",
        reset: "\x1b[0m",
    };

    /// No escape codes at all.
    #[cfg(test)]
    pub const PLAIN: Self = Self {
        red: "",
        green: "",
        yellow: "",
        blue: "",
        reset: "",
    };
}

/// Prints the report to stdout in color.
///
/// Returns true iff no result carries a violation.
pub fn report(results: &[CheckResult]) -> io::Result<bool> {
    let mut out = io::stdout().lock();
    let passed = write_report(&mut out, results, Palette::ANSI)?;
    out.flush()?;
    Ok(passed)
}

/// Prints the standalone notice for a mapped file that does not exist.
pub fn print_missing(name: &str) {
    let p = Palette::ANSI;
    println!("{}WARNING: {name} not found, skipping.{}", p.yellow, p.reset);
}

/// Prints the error shown when no mapped file exists.
pub fn print_no_files() {
    let p = Palette::ANSI;
    println!("{}No files found to check.{}", p.red, p.reset);
}

/// Writes the full report: banner, one section per file, summary.
///
/// Returns true iff the batch has no violations; warnings never count.
pub fn write_report<W: Write>(
    out: &mut W,
    results: &[CheckResult],
    p: Palette,
) -> io::Result<bool> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{}{rule}{}", p.blue, p.reset)?;
    writeln!(
        out,
        "{}  layer-guard governance check v{}{}",
        p.blue,
        env!("CARGO_PKG_VERSION"),
        p.reset
    )?;
    writeln!(out, "{}{rule}{}", p.blue, p.reset)?;
    writeln!(out)?;

    for result in results {
        write_section(out, result, p)?;
    }

    let summary = Summary::of(results);
    writeln!(out, "{}{rule}{}", p.blue, p.reset)?;
    writeln!(out, "Files checked    : {}", summary.files)?;
    writeln!(out, "Passed           : {}{}{}", p.green, summary.passed, p.reset)?;
    writeln!(out, "Failed           : {}{}{}", p.red, summary.failed(), p.reset)?;
    writeln!(out, "Total violations : {}{}{}", p.red, summary.violations, p.reset)?;
    writeln!(out, "Total warnings   : {}{}{}", p.yellow, summary.warnings, p.reset)?;
    writeln!(out, "{}{rule}{}", p.blue, p.reset)?;
    writeln!(out)?;

    Ok(summary.all_passed())
}

fn write_section<W: Write>(out: &mut W, result: &CheckResult, p: Palette) -> io::Result<()> {
    let status = if result.passed() {
        format!("{}PASS{}", p.green, p.reset)
    } else {
        format!("{}FAIL{}", p.red, p.reset)
    };
    writeln!(out, "[{status}] {} (Layer: {})", result.file, result.layer)?;

    for v in &result.violations {
        writeln!(out, "  {}VIOLATION:{} {v}", p.red, p.reset)?;
    }
    for w in &result.warnings {
        writeln!(out, "  {}WARNING:{}   {w}", p.yellow, p.reset)?;
    }
    if result.is_clean() {
        writeln!(out, "  {}No violations or warnings.{}", p.green, p.reset)?;
    }
    writeln!(out)
}
