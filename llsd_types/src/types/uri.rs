use derive_more::{Deref, From};

#[derive(From, Deref, PartialEq, Eq, Clone, Debug, Default)]
pub struct Uri(String);

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Self(String::from(s))
    }
}
