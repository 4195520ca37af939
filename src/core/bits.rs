use serde::{Deserialize, Serialize};

pub type Symbol = string_cache::DefaultAtom; // delegate label or selector name

/// Identity of an operation that may be forwarded to observers.
///
/// Selectors are interned, so cloning and comparing them is cheap.
#[derive(Hash, Eq, PartialEq, Clone, Serialize, Deserialize, Debug)]
pub struct Selector(Symbol);

impl Selector {
    pub fn new(name: &str) -> Self {
        Self(Symbol::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for Selector {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<Symbol> for Selector {
    fn from(value: Symbol) -> Self {
        Self(value)
    }
}
