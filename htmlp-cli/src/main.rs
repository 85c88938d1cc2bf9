//! htmlp CLI
//!
//! Prints the tokens of a markup document, one per line.
//!
//! Usage:
//!   htmlp                    Tokenize ./index.html
//!   htmlp page.html          Tokenize a file
//!   htmlp --html '<p>hi</p>' Tokenize a string
//!   htmlp page.html --all    Also print EOF, empty and undefined tokens

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use htmlp::{SourceInfo, Token, TokenKind, Tokenizer};
use htmlp_common::warning::clear_warnings;
use owo_colors::OwoColorize;

#[derive(Parser, Debug)]
#[command(name = "htmlp", version, about = "Print the tokens of a markup document")]
struct Args {
    /// File to tokenize
    #[arg(default_value = "index.html")]
    path: PathBuf,

    /// Tokenize this text instead of a file
    #[arg(long, value_name = "TEXT")]
    html: Option<String>,

    /// Print every token kind, not just tags and text
    #[arg(short, long)]
    all: bool,
}

/// Tags and text are always shown; the rest only with `--all`.
const fn is_shown(kind: TokenKind, all: bool) -> bool {
    all || matches!(
        kind,
        TokenKind::OpenTag | TokenKind::CloseTag | TokenKind::String
    )
}

fn print_token(out: &mut impl Write, token: &Token) -> io::Result<()> {
    writeln!(out, "HTMLP_TYPE_{}: {}", token.kind(), token.text())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let info = match args.html {
        Some(text) => SourceInfo::Text(text),
        None => SourceInfo::File(args.path),
    };

    clear_warnings();
    let mut tokenizer = Tokenizer::default();
    if tokenizer.init(&info).is_err() {
        eprintln!("{}", tokenizer.get_error().red());
        std::process::exit(1);
    }

    let mut out = BufWriter::new(io::stdout().lock());
    loop {
        let token = tokenizer.get_token();
        if is_shown(token.kind(), args.all) {
            print_token(&mut out, &token)?;
        }
        if token.is_error() {
            out.flush()?;
            eprintln!("{}", token.text().red());
            break;
        }
        if token.is_eof() {
            break;
        }
    }
    out.flush()?;

    tokenizer.free();
    Ok(())
}
