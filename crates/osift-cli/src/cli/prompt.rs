//! Thin stdin prompt adapter; all pipeline logic stays prompt-free.

use anyhow::Result;
use std::io::{self, Write};

/// Prints `msg` and reads one trimmed line from stdin.
pub fn prompt(msg: &str) -> Result<String> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Like [`prompt`], but an empty answer falls back to `default`.
pub fn prompt_or_default(msg: &str, default: &str) -> Result<String> {
    let answer = prompt(&format!("{msg} (default: {default}): "))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}
