use crate::types::Llsd;

/// String-keyed members. Entries keep insertion order, which makes
/// encoding a map a deterministic function of the value.
#[derive(PartialEq, Debug, Default)]
pub struct LlsdMap(Vec<(String, Llsd)>);

impl LlsdMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inserts the pair, replacing the value in place if the key is
    /// already present.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Llsd) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| k == &key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Llsd> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Llsd)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Llsd)> for LlsdMap {
    fn from_iter<I: IntoIterator<Item = (String, Llsd)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
