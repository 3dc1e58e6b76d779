use crate::types::Llsd;
use anyhow::{anyhow, Result};
use derive_more::{Deref, From};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::any;

#[derive(From, Deref, Clone, Copy)]
pub struct LlsdTypeInt(u8);
impl From<LlsdType> for LlsdTypeInt {
    fn from(llsd_type: LlsdType) -> Self {
        let int = llsd_type.to_u8().unwrap();
        Self(int)
    }
}

/// We fix the type integers manually: an automatic discriminant may change w/ enum definition change or compilation, according to [`std::mem::discriminant()`] doc.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum LlsdType {
    Undef = 0,
    Boolean = 1,
    Integer = 2,
    Real = 3,
    Uuid = 4,
    String = 5,
    Date = 6,
    Uri = 7,
    Binary = 8,
    Array = 9,
    Map = 10,
}
impl TryFrom<LlsdTypeInt> for LlsdType {
    type Error = anyhow::Error;
    fn try_from(int: LlsdTypeInt) -> Result<Self> {
        LlsdType::from_u8(int.0).ok_or(anyhow!(
            "Unknown {} {}",
            any::type_name::<LlsdTypeInt>(),
            int.0
        ))
    }
}
impl From<&Llsd> for LlsdType {
    fn from(llsd: &Llsd) -> Self {
        match llsd {
            Llsd::Undef => LlsdType::Undef,
            Llsd::Boolean(_) => LlsdType::Boolean,
            Llsd::Integer(_) => LlsdType::Integer,
            Llsd::Real(_) => LlsdType::Real,
            Llsd::Uuid(_) => LlsdType::Uuid,
            Llsd::String(_) => LlsdType::String,
            Llsd::Date(_) => LlsdType::Date,
            Llsd::Uri(_) => LlsdType::Uri,
            Llsd::Binary(_) => LlsdType::Binary,
            Llsd::Array(_) => LlsdType::Array,
            Llsd::Map(_) => LlsdType::Map,
        }
    }
}
