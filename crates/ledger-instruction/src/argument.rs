//! Named byte-string arguments of Spawn and Invoke actions.

use serde::{Deserialize, Serialize};

/// One named argument. The value is opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(with = "crate::serde_hex")]
    pub value: Vec<u8>,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered argument list.
///
/// Order is part of the instruction digest: entries are never sorted or
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments(Vec<Argument>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.push(Argument::new(name, value));
        self
    }

    pub fn push(&mut self, arg: Argument) {
        self.0.push(arg);
    }

    /// Value of the first argument called `name`.
    pub fn search(&self, name: &str) -> Option<&[u8]> {
        self.0
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Argument] {
        &self.0
    }
}

impl From<Vec<Argument>> for Arguments {
    fn from(args: Vec<Argument>) -> Self {
        Self(args)
    }
}

impl FromIterator<Argument> for Arguments {
    fn from_iter<I: IntoIterator<Item = Argument>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Arguments {
    type Item = Argument;
    type IntoIter = std::vec::IntoIter<Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_returns_first_match() {
        let args = Arguments::new()
            .with("coins", vec![1u8])
            .with("destination", vec![2u8; 4])
            .with("coins", vec![9u8]);

        assert_eq!(args.search("coins"), Some(&[1u8][..]));
        assert_eq!(args.search("destination"), Some(&[2u8; 4][..]));
        assert_eq!(args.search("missing"), None);
    }

    #[test]
    fn test_order_preserved() {
        let args: Arguments = vec![
            Argument::new("b", b"2".to_vec()),
            Argument::new("a", b"1".to_vec()),
        ]
        .into();
        let names: Vec<&str> = args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_value_serialized_as_hex() {
        let arg = Argument::new("darc", vec![0xaa, 0xbb]);
        let json = serde_json::to_string(&arg).unwrap();
        assert_eq!(json, r#"{"name":"darc","value":"aabb"}"#);
    }
}
