use crate::error::OrderError;
use crate::models::{OrderReport, Options, TieBreak};
use crate::order::{alien_order, derive_order_with};
use crate::scenarios::SCENARIOS;
use anyhow::{bail, Context};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

/// Handle the solve command
pub fn handle_solve(
    words: Vec<String>,
    file: Option<&Path>,
    tie_break: TieBreak,
    json: bool,
    strict: bool,
) -> anyhow::Result<()> {
    let words = if !words.is_empty() {
        words
    } else {
        read_words(file)?
    };
    info!(count = words.len(), %tie_break, "deriving order");

    let result = derive_order_with(&words, &Options { tie_break });

    if json {
        let report = OrderReport::from(&result);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let order = result.as_ref().map(|o| o.as_str()).unwrap_or_default();
        println!("{order}");
    }

    match result {
        Err(e) if strict => Err(e.into()),
        _ => Ok(()),
    }
}

/// Handle the demo command
pub fn handle_demo() -> anyhow::Result<()> {
    let mut failed = 0;

    for (i, scenario) in SCENARIOS.iter().enumerate() {
        let actual = alien_order(scenario.words);

        println!("Test {}: {}", i + 1, scenario.name);
        println!("  Input:    {:?}", scenario.words);
        println!("  Expected: {}", display_order(scenario.expected));
        println!("  Actual:   {}", display_order(&actual));
        if actual != scenario.expected {
            println!("  MISMATCH");
            failed += 1;
        }
        println!();
    }

    if failed > 0 {
        bail!("{failed} of {} scenarios failed", SCENARIOS.len());
    }

    println!("All {} scenarios passed", SCENARIOS.len());
    Ok(())
}

fn display_order(order: &str) -> &str {
    if order.is_empty() {
        "(empty string)"
    } else {
        order
    }
}

/// Read one word per line from `file`, or stdin for `None` and `-`
pub fn read_words(file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let content = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(OrderError::from)
            .with_context(|| format!("Failed to read words from {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(OrderError::from)
                .context("Failed to read words from stdin")?;
            buf
        }
    };

    Ok(parse_words(&content))
}

/// Split on line endings; blank lines are empty words
pub fn parse_words(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_words() {
        assert_eq!(parse_words("wrt\r\nwrf\ner\n"), vec!["wrt", "wrf", "er"]);
        assert_eq!(parse_words("a\n\nb"), vec!["a", "", "b"]);
        assert!(parse_words("").is_empty());
    }

    #[test]
    fn test_read_words_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "z").unwrap();
        writeln!(file, "x").unwrap();

        let words = read_words(Some(file.path())).unwrap();
        assert_eq!(words, vec!["z", "x"]);
    }

    #[test]
    fn test_read_words_missing_file() {
        let err = read_words(Some(Path::new("/nonexistent/words.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read words"));
    }

    #[test]
    fn test_demo_passes() {
        handle_demo().unwrap();
    }

    #[test]
    fn test_solve_strict_fails_on_cycle() {
        let words = vec!["z".to_string(), "x".to_string(), "z".to_string()];
        let err = handle_solve(words, None, TieBreak::FirstSeen, false, true).unwrap_err();

        assert!(err.to_string().contains("cycle"));
    }
}
