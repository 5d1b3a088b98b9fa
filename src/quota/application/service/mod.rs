pub mod normalizer;
pub mod summarizer;
pub mod unit_converter;
