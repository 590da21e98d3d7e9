pub mod alphabet;
pub mod bigrams;
pub mod matrix;
pub mod scorer;
pub mod types;
