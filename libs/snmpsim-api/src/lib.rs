pub mod error;
pub mod grammar;
pub mod kind;
pub mod record;
pub mod tag;
pub mod value;

pub use error::{CodecError, ErrorKind};
pub use grammar::Grammar;
pub use kind::ValueKind;
pub use record::Record;
pub use tag::{TagCode, TypeTagTable};
pub use value::Value;
