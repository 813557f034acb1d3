use crate::view::ListView;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Read, Write};

/// Resolve a free-text argument: `-` reads stdin, `\n` escapes become line breaks
pub fn resolve_text(value: Option<String>) -> Result<Option<String>> {
    match value {
        Some(v) if v == "-" => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(Some(content))
        }
        Some(v) => Ok(Some(v.replace("\\n", "\n"))),
        None => Ok(None),
    }
}

/// Ask a yes/no question on stdout; anything but `y` means no
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

pub fn print_list(view: &ListView) {
    for item in &view.items {
        match item.id {
            Some(ref id) => println!("{}  {}", id.cyan(), item.label),
            None => println!("{}", item.label.dimmed()),
        }
    }
}
