use std::fmt;

/// Ordered set of class tokens.
///
/// Insertion order is preserved. Pushing a token that is already present
/// moves it to the end, so later additions take precedence when a stylesheet
/// resolves the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Push one or more whitespace separated tokens. Empty input is ignored.
    pub fn push(&mut self, tokens: impl AsRef<str>) {
        for token in tokens.as_ref().split_whitespace() {
            if let Some(existing) = self.tokens.iter().position(|t| t == token) {
                self.tokens.remove(existing);
            }
            self.tokens.push(token.to_string());
        }
    }

    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.push(token);
        }
    }

    /// Append every token of `other` after the tokens of `self`.
    pub fn merge(&mut self, other: &ClassList) {
        self.extend(other.iter());
    }

    /// Concatenate, with `other` taking precedence.
    pub fn merged(mut self, other: &ClassList) -> Self {
        self.merge(other);
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl From<&str> for ClassList {
    fn from(tokens: &str) -> Self {
        let mut list = Self::new();
        list.push(tokens);
        list
    }
}

impl From<String> for ClassList {
    fn from(tokens: String) -> Self {
        Self::from(tokens.as_str())
    }
}
