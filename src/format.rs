//! Human-readable rendering of models
//!
//! Plain text via [`std::fmt::Display`] and a LaTeX formula via [`to_latex`].

use std::fmt;

use crate::model::Model;

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transfer Function parameters:")?;
        writeln!(f, "-----------------------------")?;
        writeln!(f, "Gain:  {}", self.gain())?;
        writeln!(f, "Delay: {}", self.delay())?;
        writeln!(f, "Poles: {}", format_list(self.poles()))?;
        writeln!(f, "Zeros: {}", format_list(self.zeros()))
    }
}

/// Render the model as a LaTeX formula
///
/// ```text
/// W(s) = \frac{K(1 + z₁s)...}{(1 + p₁s)...}e^{-d\tau}
/// ```
///
/// Negative elements render as `(1 - |v|s)`. The delay factor is left out
/// when the delay is zero.
pub fn to_latex(model: &Model) -> String {
    let zeros: String = model.zeros().iter().map(|&z| factor(z)).collect();
    let poles: String = model.poles().iter().map(|&p| factor(p)).collect();

    let delay = if model.delay() > 0.0 {
        format!("e^{{-{}\\tau}}", model.delay())
    } else {
        String::new()
    };

    format!(
        "W(s) = \\frac{{{}{}}}{{{}}}{}",
        model.gain(),
        zeros,
        poles,
        delay
    )
}

fn factor(value: f64) -> String {
    if value < 0.0 {
        format!("(1 - {}s)", value.abs())
    } else {
        format!("(1 + {}s)", value)
    }
}

fn format_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
