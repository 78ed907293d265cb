//! Interactive prompt wrappers around dialoguer.
//!
//! Every prompt refuses to run without a terminal on both ends, so piped
//! invocations fail fast with a pointer at the flag-based path.

use std::io::IsTerminal;
use std::path::Path;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Completion;
use dialoguer::{Confirm, FuzzySelect, Input, Select};

fn require_terminal() -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive input required. Pass values as flags or run on a TTY."
        ));
    }
    Ok(())
}

/// Prompt for text input with an optional default.
pub fn prompt_input(prompt: &str, default: Option<&str>) -> anyhow::Result<String> {
    require_terminal()?;

    let theme = ColorfulTheme::default();
    let builder = Input::<String>::with_theme(&theme).with_prompt(prompt);

    let result = if let Some(def) = default {
        builder.default(def.to_string()).interact_text()?
    } else {
        builder.interact_text()?
    };

    Ok(result)
}

/// Prompt for a filesystem path with tab completion.
pub fn prompt_path(prompt: &str, default: Option<&str>) -> anyhow::Result<String> {
    require_terminal()?;

    let theme = ColorfulTheme::default();
    let completion = PathCompletion;
    let builder = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .completion_with(&completion);

    let result = if let Some(def) = default {
        builder.default(def.to_string()).interact_text()?
    } else {
        builder.interact_text()?
    };

    Ok(result)
}

/// Prompt for selection from a short list of options.
pub fn prompt_select(prompt: &str, options: &[&str], default: usize) -> anyhow::Result<usize> {
    require_terminal()?;

    let theme = ColorfulTheme::default();
    let result = Select::with_theme(&theme)
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;

    Ok(result)
}

/// Prompt for selection from a long list with fuzzy matching (donor names).
pub fn prompt_fuzzy_select(prompt: &str, options: &[String]) -> anyhow::Result<usize> {
    require_terminal()?;

    let theme = ColorfulTheme::default();
    let result = FuzzySelect::with_theme(&theme)
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()?;

    Ok(result)
}

/// Prompt for confirmation.
pub fn prompt_confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    require_terminal()?;

    let theme = ColorfulTheme::default();
    let result = Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    Ok(result)
}

/// Filesystem completion for path prompts.
pub struct PathCompletion;

impl PathCompletion {
    fn candidates(input: &str) -> Vec<String> {
        let (dir, prefix) = split_input(input);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut matches = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with(&prefix) {
                let mut full = if dir == "." && !input.starts_with("./") {
                    name.clone()
                } else {
                    format!("{}/{}", dir.trim_end_matches('/'), name)
                };
                if entry.path().is_dir() {
                    full.push('/');
                }
                matches.push(full);
            }
        }
        matches.sort();
        matches
    }
}

impl Completion for PathCompletion {
    fn get(&self, input: &str) -> Option<String> {
        let matches = Self::candidates(input);
        match matches.len() {
            0 => None,
            1 => Some(matches[0].clone()),
            _ => {
                // Extend to the longest common prefix across matches
                let common = longest_common_prefix(&matches);
                if common.len() > input.len() {
                    Some(common)
                } else {
                    None
                }
            }
        }
    }
}

fn split_input(input: &str) -> (String, String) {
    if input.ends_with('/') {
        return (input.to_string(), String::new());
    }
    let path = Path::new(input);
    let prefix = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string());
    (dir, prefix)
}

fn longest_common_prefix(values: &[String]) -> String {
    let first = match values.first() {
        Some(f) => f.as_str(),
        None => return String::new(),
    };
    let mut end = first.len();
    for value in &values[1..] {
        let shared = first
            .char_indices()
            .zip(value.chars())
            .take_while(|((_, a), b)| a == b)
            .count();
        let byte_end: usize = first
            .char_indices()
            .nth(shared)
            .map(|(i, _)| i)
            .unwrap_or(first.len());
        end = end.min(byte_end);
    }
    first[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_common_prefix() {
        let values = vec!["coffer.json".to_string(), "coffer.toml".to_string()];
        assert_eq!(longest_common_prefix(&values), "coffer.");
    }

    #[test]
    fn test_split_input_bare_name() {
        let (dir, prefix) = split_input("cof");
        assert_eq!(dir, ".");
        assert_eq!(prefix, "cof");
    }

    #[test]
    fn test_split_input_nested() {
        let (dir, prefix) = split_input("/tmp/cof");
        assert_eq!(dir, "/tmp");
        assert_eq!(prefix, "cof");
    }

    #[test]
    fn test_split_input_trailing_slash() {
        let (dir, prefix) = split_input("/tmp/");
        assert_eq!(dir, "/tmp/");
        assert!(prefix.is_empty());
    }

    #[test]
    fn test_path_completion_single_match() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("coffer.json");
        std::fs::write(&file, b"{}").unwrap();

        let input = format!("{}/cof", dir.path().display());
        let completion = PathCompletion;
        let result = completion.get(&input).unwrap();
        assert!(result.ends_with("coffer.json"));
    }

    #[test]
    fn test_path_completion_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let input = format!("{}/zzz", dir.path().display());
        let completion = PathCompletion;
        assert!(completion.get(&input).is_none());
    }
}
