mod renderer;
#[cfg(test)]
mod tests;

pub use renderer::{render_transaction, ReportRenderer, UNAVAILABLE};
