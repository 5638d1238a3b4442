use indexmap::IndexMap;
use serde::Serialize;

/// Symbol table. Keeps the order labels were first declared in; redeclaring
/// a label moves its address but not its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Labels {
    labels: IndexMap<String, u32>,
}

impl Labels {
    pub fn new() -> Self {
        Self {
            labels: IndexMap::new(),
        }
    }

    /// Returns the address the label had before, if any.
    pub fn add(&mut self, key: String, value: u32) -> Option<u32> {
        self.labels.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<u32> {
        self.labels.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.labels.iter().map(|(label, addr)| (label.as_str(), *addr))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redeclare_overwrites_in_place() {
        let mut labels = Labels::new();
        assert_eq!(labels.add("FIRST".to_owned(), 0x1000), None);
        assert_eq!(labels.add("SECOND".to_owned(), 0x1003), None);
        assert_eq!(labels.add("FIRST".to_owned(), 0x1006), Some(0x1000));

        assert_eq!(labels.get("FIRST"), Some(0x1006));
        assert_eq!(labels.get("THIRD"), None);
        assert_eq!(
            labels.iter().collect::<Vec<_>>(),
            vec![("FIRST", 0x1006), ("SECOND", 0x1003)]
        );
    }
}
