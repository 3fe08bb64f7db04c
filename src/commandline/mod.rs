use std::path::PathBuf;

use clap::Parser;

use pyscan::lexer::ScannerConfig;

#[derive(Debug, Parser)]
#[clap(about = "Scans Python-flavoured source and checks it is a simple expression")]
pub struct Options {
    /// File to scan. Reads standard input when neither a file nor `--expr` is given
    #[clap(conflicts_with = "expr")]
    pub file: Option<PathBuf>,
    /// Scan the given source text instead of a file
    #[clap(short, long)]
    pub expr: Option<String>,
    /// Treat `print` as an ordinary identifier
    #[clap(long)]
    pub no_print_keyword: bool,
    /// Report skipped characters and unterminated literals
    #[clap(short, long)]
    pub diagnostics: bool,
    /// Increase logging verbosity (may be repeated)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Silence all logging
    #[clap(short, long)]
    pub quiet: bool,
}

impl Options {
    pub fn scanner_config(&self) -> ScannerConfig {
        ScannerConfig {
            print_is_keyword: !self.no_print_keyword,
        }
    }
}
