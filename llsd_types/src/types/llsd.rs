use crate::types::{Date, LlsdMap, LlsdType, Uri};
use derive_more::From;
use uuid::Uuid;


/// A structured-data value. The tag fully determines which payload is
/// active; encoders borrow the value and never mutate it.
#[derive(From, PartialEq, Debug)]
pub enum Llsd {
    Undef,
    Boolean(bool),
    Integer(i32),
    Real(f64),
    Uuid(Uuid),
    String(String),
    Date(Date),
    Uri(Uri),
    Binary(Vec<u8>),
    Array(Vec<Llsd>),
    Map(LlsdMap),
}

impl Llsd {
    /// Fresh value of the given kind, holding that kind's
    /// default/empty payload.
    pub fn new(llsd_type: LlsdType) -> Self {
        match llsd_type {
            LlsdType::Undef => Self::Undef,
            LlsdType::Boolean => Self::Boolean(false),
            LlsdType::Integer => Self::Integer(0),
            LlsdType::Real => Self::Real(0.0),
            LlsdType::Uuid => Self::Uuid(Uuid::nil()),
            LlsdType::String => Self::String(String::new()),
            LlsdType::Date => Self::Date(Date::epoch()),
            LlsdType::Uri => Self::Uri(Uri::default()),
            LlsdType::Binary => Self::Binary(Vec::new()),
            LlsdType::Array => Self::Array(Vec::new()),
            LlsdType::Map => Self::Map(LlsdMap::new()),
        }
    }

    pub fn get_type(&self) -> LlsdType {
        LlsdType::from(self)
    }
}

impl From<&str> for Llsd {
    fn from(s: &str) -> Self {
        Self::String(String::from(s))
    }
}

impl FromIterator<Llsd> for Llsd {
    fn from_iter<I: IntoIterator<Item = Llsd>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}
