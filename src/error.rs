use thiserror::Error;

/// Reasons a word list admits no ordering of its alphabet
#[derive(Error, Debug)]
pub enum OrderError {
    #[error(
        "Word #{position} \"{earlier}\" is followed by its own prefix \"{later}\"",
        position = .index + 1
    )]
    PrefixViolation {
        index: usize,
        earlier: String,
        later: String,
    },

    #[error(
        "Characters {chars} cannot be ordered, they form a cycle: {cycle}",
        chars = format_chars(.unresolved),
        cycle = format_cycle(.path)
    )]
    CycleDetected {
        unresolved: Vec<char>,
        path: Vec<char>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrderError {
    /// Stable identifier used in JSON reports
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::PrefixViolation { .. } => "prefix_violation",
            OrderError::CycleDetected { .. } => "cycle_detected",
            OrderError::Io(_) => "io",
        }
    }
}

/// Format a cycle as `z → x → z`
pub fn format_cycle(path: &[char]) -> String {
    path.iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

fn format_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias
pub type Result<T> = std::result::Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cycle() {
        assert_eq!(format_cycle(&['z', 'x', 'z']), "z → x → z");
        assert_eq!(format_cycle(&['a']), "a");
        assert_eq!(format_cycle(&[]), "");
    }

    #[test]
    fn test_prefix_violation_message() {
        let err = OrderError::PrefixViolation {
            index: 0,
            earlier: "abc".to_string(),
            later: "ab".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Word #1 \"abc\" is followed by its own prefix \"ab\""
        );
        assert_eq!(err.kind(), "prefix_violation");
    }

    #[test]
    fn test_cycle_message() {
        let err = OrderError::CycleDetected {
            unresolved: vec!['z', 'x'],
            path: vec!['z', 'x', 'z'],
        };
        assert_eq!(
            err.to_string(),
            "Characters 'z', 'x' cannot be ordered, they form a cycle: z → x → z"
        );
        assert_eq!(err.kind(), "cycle_detected");
    }
}
