pub mod input;
pub mod translate;

#[cfg(test)]
mod translate_tests;
