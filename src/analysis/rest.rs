//! Rest "analysis"
//!
//! Rest never produces mistakes and holds no smoothing state. It exists so
//! the analyzer interface stays uniform across exercises.

pub struct RestAnalyzer;

impl RestAnalyzer {
    pub fn evaluate(&mut self) -> Vec<&'static str> {
        Vec::new()
    }
}
