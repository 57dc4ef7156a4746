//! Score formatting.

/// Render a probability as a percentage with one decimal and a unit label.
///
/// `0.873` with label `"% AI probability"` becomes `"87.3% AI probability"`.
pub fn format_score(ai_probability: f64, unit_label: &str) -> String {
    // Adding 0.0 folds -0.0 into 0.0.
    let percent = ai_probability * 100.0 + 0.0;
    // Exact hundredths ties (x.x25, x.x75) round away from zero.
    let quarters = percent * 4.0;
    let percent = if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (percent * 10.0).round() / 10.0
    } else {
        percent
    };
    format!("{percent:.1}{unit_label}")
}
