//! Renders a prevalent-pattern map as `{A, B, C}: PI` lines.

use colocation_core::PatternSignature;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Renders patterns sorted by descending size, then lexicographically by
/// signature, one per line as `{A, B, C}: 0.500`.
pub fn render_report(prevalent: &BTreeMap<PatternSignature, f64>) -> String {
    let mut patterns: Vec<&PatternSignature> = prevalent.keys().collect();
    patterns.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut out = String::new();
    for pattern in patterns {
        let pi = prevalent[pattern];
        writeln!(out, "{pattern}: {pi:.3}").expect("writing to a String never fails");
    }
    out
}
