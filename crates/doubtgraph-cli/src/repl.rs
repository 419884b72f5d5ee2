//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::{Outcome, Session};
use rustyline::config::Config as EditorConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(session: &mut Session, history_size: usize) -> Result<()> {
    println!(
        "{}",
        session
            .formatter()
            .info("doubtgraph REPL - Type '/help' for commands, 'exit' to quit")
    );
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = match session.invoker() {
            Some(id) => format!("doubtgraph ({})> ", id),
            None => "doubtgraph> ".to_string(),
        };

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match session.execute_line(line).await {
                    Ok(Outcome::Exit) => {
                        println!("{}", session.formatter().info("Goodbye!"));
                        break;
                    }
                    Ok(Outcome::Help) => print_help(session.formatter()),
                    Ok(Outcome::Output(text)) => println!("{}", text),
                    Ok(Outcome::Nothing) => {}
                    Err(e) => {
                        eprintln!("{}", session.formatter().error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", session.formatter().info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", session.formatter().error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let dir = home.join(".doubtgraph");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

/// Print the command overview.
pub fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  /trust [source] <target>   - Record trust in target");
    println!("  /doubt [source] <target>   - Record doubt of target");
    println!("  /clear [source] <target>   - Remove the relation from source to target");
    println!("  /clear all                 - Wipe the whole graph");
    println!("  /stat                      - Show doubt and trust rankings");
    println!("    source defaults to your own role when omitted");
    println!("  /as <member-id>            - Act as another roster member");
    println!("  /roster                    - List roster members");
    println!("  /help, help, ?             - Show this help");
    println!("  exit, quit                 - Exit REPL");
    println!();
}
