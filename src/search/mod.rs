pub mod keyword;

pub use keyword::KeywordScanner;
