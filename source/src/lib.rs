#[macro_use]
extern crate lazy_static;

pub mod files;
pub mod properties;

mod decomposition;
mod error;
mod property;
mod stopwords;
mod unicode;

pub use error::UcdError;

pub use unicode::UnicodeData;
pub use unicode::UNICODE_MAX;

pub use property::CodepointSet;
pub use property::PropertySets;
pub use property::PropertyTable;

pub use stopwords::StopwordList;
