// Text normalization — stop-word sets and the tokenizer.

pub mod stopwords;
pub mod tokenizer;
