// Text normalization: turning raw fragments into comparable words.

pub mod tokenizer;
