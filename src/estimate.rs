//! Rough monthly cost band derived from model size
//!
//! Not a pricing lookup: a linear rule of thumb shown next to the
//! recommendation so users get an order of magnitude.

use serde::Serialize;

const MB_TO_RUPEES: f64 = 0.8;
const SPREAD: f64 = 1.9;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CostEstimate {
    pub min: u64,
    pub max: u64,
    pub currency: &'static str,
}

impl CostEstimate {
    /// Non-positive or non-finite sizes produce a zero band.
    pub fn from_model_size(model_size_mb: f64) -> Self {
        let size = if model_size_mb.is_finite() && model_size_mb > 0.0 {
            model_size_mb
        } else {
            0.0
        };
        let min = (size * MB_TO_RUPEES).round();
        let max = (min * SPREAD).round();
        Self {
            min: min as u64,
            max: max as u64,
            currency: "₹",
        }
    }

    pub fn display(&self) -> String {
        format!(
            "{}{} – {}{}",
            self.currency,
            group_thousands(self.min),
            self.currency,
            group_thousands(self.max)
        )
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
