use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use jlispy::{EvalContext, ParseNode, Session, DEFAULT_MAX_DEPTH, VERSION};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// jlispy evaluates S-expressions and Q-expressions, interactively or from
/// the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this input, print the result and exit.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Evaluate the contents of a file as one program and exit.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Maximum nesting depth before evaluation gives up.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the parse tree as JSON before each result.
    #[arg(long)]
    print_tree: bool,

    /// Load and save prompt history in this file.
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let session = Session::new(EvalContext::with_max_depth(args.max_depth));

    if let Some(source) = &args.eval {
        if args.print_tree {
            print_tree(&session.parse(source)?)?;
        }
        println!("{}", session.eval_source(source)?);
        return Ok(());
    }

    if let Some(path) = &args.file {
        let value = session
            .eval_file(path)
            .with_context(|| format!("failed to evaluate {}", path.display()))?;
        println!("{}", value);
        return Ok(());
    }

    repl(&session, &args)
}

fn repl(session: &Session, args: &Args) -> anyhow::Result<()> {
    println!("JLispy Version {}", VERSION);
    println!("Press Ctrl+C to Exit\n");

    let mut editor = DefaultEditor::new()?;
    if let Some(path) = &args.history {
        match editor.load_history(path) {
            Ok(()) => {}
            Err(err) if is_missing_file(&err) => {}
            Err(err) => eprintln!("failed to load history from {}: {}", path.display(), err),
        }
    }

    loop {
        match editor.readline("jlispy> ") {
            Ok(line) => {
                editor.add_history_entry(line.as_str())?;
                if args.print_tree && !line.trim().is_empty() {
                    match session.parse(&line) {
                        Ok(tree) => print_tree(&tree)?,
                        Err(err) => {
                            eprintln!("{}", err);
                            continue;
                        }
                    }
                }
                match session.eval_line(&line) {
                    Ok(Some(value)) => println!("{}", value),
                    Ok(None) => {}
                    Err(err) => eprintln!("{}", err),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &args.history {
        editor
            .save_history(path)
            .with_context(|| format!("failed to save history to {}", path.display()))?;
    }
    Ok(())
}

/// A history file that does not exist yet is normal on first run.
fn is_missing_file(err: &ReadlineError) -> bool {
    matches!(err, ReadlineError::Io(io) if io.kind() == std::io::ErrorKind::NotFound)
}

fn print_tree(tree: &ParseNode) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(tree)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_only_missing_history_is_silent() {
        assert!(is_missing_file(&ReadlineError::Io(Error::from(ErrorKind::NotFound))));
        assert!(!is_missing_file(&ReadlineError::Io(Error::from(
            ErrorKind::PermissionDenied
        ))));
        assert!(!is_missing_file(&ReadlineError::Interrupted));
    }

    #[test]
    fn test_missing_history_file_loads_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = DefaultEditor::new().unwrap();
        let err = editor
            .load_history(&dir.path().join("history.txt"))
            .unwrap_err();
        assert!(is_missing_file(&err));
    }
}
