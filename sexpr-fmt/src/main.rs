use std::{
    fs,
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use log::{error, info, LevelFilter};

use sexpr_fmt::{
    format_sexpression, markdown_section, try_format_sexpression, LayoutConfig,
    DEFAULT_COLUMN_WIDTH, DEFAULT_INDENT_WIDTH,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files holding one formula per line; stdin is read when none are given
    files: Vec<PathBuf>,

    #[arg(short = 'w', long, default_value_t = DEFAULT_COLUMN_WIDTH)]
    column_width: usize,

    #[arg(short, long, default_value_t = DEFAULT_INDENT_WIDTH)]
    indent_width: usize,

    /// Reject formulas whose parentheses do not balance
    #[arg(short, long)]
    strict: bool,

    /// Print each formula under a numbered markdown heading, in a code block
    #[arg(short, long)]
    markdown: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, PartialEq, Eq)]
struct Formula {
    source: String,
    line: usize,
    text: String,
}

fn formulas_in(source: &str, text: &str) -> Vec<Formula> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| Formula {
            source: source.to_string(),
            line: idx + 1,
            text: line.to_string(),
        })
        .collect()
}

fn read_formulas(files: &[PathBuf]) -> anyhow::Result<Vec<Formula>> {
    if files.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read formulas from stdin")?;
        return Ok(formulas_in("<stdin>", &text));
    }
    let mut formulas = Vec::new();
    for path in files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read formulas from {}", path.display()))?;
        formulas.extend(formulas_in(&path.display().to_string(), &text));
    }
    Ok(formulas)
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Writes each formula formatted to `out` and returns how many were skipped as malformed.
/// Sections are numbered over the printed formulas only.
fn write_formulas(
    formulas: Vec<Formula>,
    config: &LayoutConfig,
    strict: bool,
    markdown: bool,
    out: &mut impl Write,
) -> io::Result<usize> {
    let mut n_malformed = 0;
    let mut n = 0;
    for formula in formulas {
        let formatted = if strict {
            match try_format_sexpression(&formula.text, config) {
                Ok(formatted) => formatted,
                Err(e) => {
                    error!("{}:{}: {e}", formula.source, formula.line);
                    n_malformed += 1;
                    continue;
                }
            }
        } else {
            format_sexpression(&formula.text, config)
        };
        n += 1;
        if markdown {
            out.write_all(markdown_section(n, &formatted).as_bytes())?;
        } else {
            out.write_all(formatted.as_bytes())?;
        }
    }
    Ok(n_malformed)
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();
    simple_logger::SimpleLogger::new()
        .with_level(level(args.verbose))
        .init()?;
    let config = LayoutConfig {
        column_width: args.column_width,
        indent_width: args.indent_width,
    };
    let formulas = read_formulas(&args.files)?;
    info!("formatting {} formulas with {config:?}", formulas.len());

    let mut out = BufWriter::new(io::stdout().lock());
    let n_malformed = write_formulas(formulas, &config, args.strict, args.markdown, &mut out)?;
    out.flush()?;

    if n_malformed > 0 {
        error!("{n_malformed} malformed formulas were skipped");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_blank_lines_skipped() {
        let formulas = formulas_in("axioms.txt", "(a b)\n\n   \n(c d)\n");
        assert_eq!(
            formulas,
            vec![
                Formula {
                    source: "axioms.txt".to_string(),
                    line: 1,
                    text: "(a b)".to_string(),
                },
                Formula {
                    source: "axioms.txt".to_string(),
                    line: 4,
                    text: "(c d)".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_strict_skips_malformed_and_continues() {
        let formulas = formulas_in("axioms.txt", "(a b)\n(c d))\n(e f)\n");
        let mut out = Vec::new();
        let n_malformed =
            write_formulas(formulas, &LayoutConfig::default(), true, true, &mut out).unwrap();
        assert_eq!(n_malformed, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "## Formula 1\n\nFormula 1 states:\n```\n(a b)\n```\n\n\
             ## Formula 2\n\nFormula 2 states:\n```\n(e f)\n```\n\n"
        );
    }

    #[test]
    fn test_lenient_formats_everything() {
        let formulas = formulas_in("axioms.txt", "(a b)\n(c d))\n(e f)\n");
        let mut out = Vec::new();
        let n_malformed =
            write_formulas(formulas, &LayoutConfig::default(), false, false, &mut out).unwrap();
        assert_eq!(n_malformed, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "(a b)\n(c d))\n(e f)\n");
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level(0), LevelFilter::Warn);
        assert_eq!(level(1), LevelFilter::Debug);
        assert_eq!(level(7), LevelFilter::Trace);
    }

    #[test]
    fn test_cli_parses_options() {
        let cli = Cli::parse_from([
            "sexpr-fmt", "-w", "60", "--strict", "-vv", "a.txt", "b.txt",
        ]);
        assert_eq!(cli.column_width, 60);
        assert_eq!(cli.indent_width, DEFAULT_INDENT_WIDTH);
        assert!(cli.strict && !cli.markdown);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }
}
