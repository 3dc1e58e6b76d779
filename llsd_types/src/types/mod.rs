mod date;
mod llsd;
mod llsd_type;
mod map;
mod uri;

pub use date::*;
pub use llsd::*;
pub use llsd_type::*;
pub use map::*;
pub use uri::*;
