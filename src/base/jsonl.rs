/// An ordered table of rows stored as JSON lines, one row per line. Row order
/// is storage order and is preserved on round trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jsonl<T>(Vec<T>);

impl<T> Default for Jsonl<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Jsonl<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Jsonl<T> {
    fn from(inner: Vec<T>) -> Self {
        Self(inner)
    }
}

impl<T> IntoIterator for Jsonl<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Jsonl<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> FromIterator<T> for Jsonl<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> std::fmt::Display for Jsonl<T>
where
    T: serde::Serialize,
{
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.iter() {
            let s = serde_json::to_string(row).map_err(|_| std::fmt::Error)?;
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid row at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl ParseError {
    /// One-based line number of the offending row.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<T> std::str::FromStr for Jsonl<T>
where
    T: serde::de::DeserializeOwned,
{
    type Err = ParseError;

    /// Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                serde_json::from_str::<T>(x).map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}
