//! Sequential text-rewriting pipelines.
//!
//! Both pipelines are ordered lists of named steps; order is load-bearing
//! and every step is testable on its own.
//!
//! - **condense**: strips asides and basis tails for concise display
//! - **enrich**: expands citation/rating shorthand into readable, linkable
//!   prose for detailed views

pub mod condense;
pub mod enrich;

pub use condense::{condense, CONDENSE_STEPS};
pub use enrich::enrich;

/// One named rewrite step. Steps never fail; they map text to text.
#[derive(Clone, Copy)]
pub struct Step {
    pub name: &'static str,
    apply: fn(&str) -> String,
}

impl Step {
    pub const fn new(name: &'static str, apply: fn(&str) -> String) -> Self {
        Self { name, apply }
    }

    pub fn apply(&self, input: &str) -> String {
        (self.apply)(input)
    }
}

/// Run `input` through `steps` in order, each step consuming the previous
/// step's output.
pub fn run_pipeline(steps: &[Step], input: &str) -> String {
    steps
        .iter()
        .fold(input.to_string(), |text, step| step.apply(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_applies_steps_in_order() {
        const STEPS: [Step; 2] = [
            Step::new("upper", |text| text.to_uppercase()),
            Step::new("bang", |text| format!("{text}!")),
        ];
        assert_eq!(run_pipeline(&STEPS, "hi"), "HI!");
    }

    #[test]
    fn empty_pipeline_is_identity() {
        assert_eq!(run_pipeline(&[], "unchanged"), "unchanged");
    }
}
