use std::{
    fs,
    io::{self, Read},
    iter,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use pyscan::{error::PositionalError, lexer, parser, source_map};

mod commandline;

use commandline::Options;

fn main() -> Result<ExitCode> {
    let options = Options::parse();

    stderrlog::new()
        .module("pyscan")
        .quiet(options.quiet)
        .verbosity(options.verbose as usize + 1)
        .init()?;

    let content = read_source(&options)?;
    let scanned = lexer::scan_with_diagnostics(&content, &options.scanner_config());

    info!("Scanner finished");

    for token in scanned.tokens.iter() {
        println!("{}", token);
    }

    if options.diagnostics {
        for err in scanned.errors.iter() {
            describe_error(err, &content);
        }
    }

    let verdict = parser::parse(&scanned.tokens);

    info!("Recognizer finished");

    match verdict {
        Ok(()) => {
            println!("Parsing successful!");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_source(options: &Options) -> Result<String> {
    if let Some(expr) = &options.expr {
        return Ok(expr.clone());
    }

    match &options.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read standard input")?;
            Ok(content)
        }
    }
}

fn describe_error(err: &impl PositionalError, content: &str) {
    let start: usize = err.range().start().into();
    let Some(line) = source_map::find_line(content, err.range().start()) else {
        eprintln!("{}", err.describe());
        return;
    };
    let line_start: usize = line.range().start().into();

    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    // Diagnostics may run across lines; only the first one is underlined.
    let padding = content[line_start..start].chars().count();
    let underline = err
        .range()
        .lookup(content)
        .chars()
        .take_while(|&ch| ch != '\n' && ch != '\r')
        .count()
        .max(1);

    let gutter = format!("{}", line.line_no());

    eprintln!("{}| {}", gutter, line.for_display());
    eprintln!(
        "{}| {}{}--- {}",
        pad_char(' ', gutter.len()),
        pad_char(' ', padding),
        pad_char('^', underline),
        err.describe()
    );
}
