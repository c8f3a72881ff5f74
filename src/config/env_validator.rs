//! Environment variable validation with typo suggestions
//!
//! Invalid values never abort a run: the caller falls back to a default and
//! reports the returned [`EnvWarning`].

use std::fmt;

/// An environment variable held a value outside its allowed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvWarning {
    pub var: String,
    pub value: String,
    pub suggestion: Option<String>,
    pub valid_values: Vec<String>,
}

impl fmt::Display for EnvWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} value '{}'", self.var, self.value)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{}'?", suggestion)?;
        }
        Ok(())
    }
}

/// Validator for one enumerated environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, or describe why it was rejected
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, EnvWarning>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| EnvWarning {
            var: self.var_name.to_string(),
            value: value.to_string(),
            suggestion: self.suggest(value).map(str::to_string),
            valid_values: self.valid_values.iter().map(|v| v.to_string()).collect(),
        })
    }

    /// Closest valid value within two edits, if any
    fn suggest(&self, value: &str) -> Option<&'a str> {
        let input = value.to_lowercase();
        self.valid_values
            .iter()
            .map(|valid| (*valid, levenshtein(&input, valid)))
            .min_by_key(|(_, dist)| *dist)
            .filter(|(_, dist)| (1..=2).contains(dist))
            .map(|(valid, _)| valid)
    }
}

/// Levenshtein edit distance over bytes
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
