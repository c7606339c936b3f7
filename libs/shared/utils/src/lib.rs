pub mod extractor;
pub mod filter;
pub mod format;
pub mod test_utils;
