pub mod output;
pub mod stopwords;
pub mod word_break;
