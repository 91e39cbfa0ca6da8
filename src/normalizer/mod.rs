mod field;
mod row_normalizer;
#[cfg(test)]
mod tests;

pub use field::Field;
pub use row_normalizer::Normalizer;
