use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;

use chatmark::{escape_html, render_inline_markup};

mod cli;
use cli::Cli;

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn render_lines(input: &str, escape_only: bool, out: &mut impl Write) -> io::Result<()> {
    for line in input.lines() {
        let html = if escape_only {
            escape_html(line)
        } else {
            render_inline_markup(line)
        };
        writeln!(out, "{}", html)?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.files.is_empty() {
        let input = read_all(None)?;
        render_lines(&input, cli.escape_only, &mut out)?;
    } else {
        for file in &cli.files {
            log::debug!("rendering {}", file.display());
            let input = read_all(Some(file))?;
            render_lines(&input, cli.escape_only, &mut out)?;
        }
    }

    Ok(())
}
