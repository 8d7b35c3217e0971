pub mod condition;
pub mod enums;
pub mod keyword;
pub mod medicine;

pub use condition::*;
pub use enums::{KeywordCategory, ParseEnumError, VitalKind};
pub use keyword::*;
pub use medicine::*;
