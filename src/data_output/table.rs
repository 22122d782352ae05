// src/data_output/table.rs

use crate::bodies::Body;
use crate::types::KinematicSamples;

const TABLE_HEADING: &str = "time(s)      speed(m/s)   displacement(m)";
const BANNER_TITLE: &str = "Tickertape Gravity Simulation";

/// Boxed banner naming the experiment and the body whose gravity is used.
pub fn format_banner(body: Body) -> String {
    let width = BANNER_TITLE.len();
    let rule = "-".repeat(width + 4);
    let body_line = format!("{} ({} m/s²)", body.name(), body.gravity());
    format!("{rule}\n| {BANNER_TITLE:<width$} |\n| {body_line:<width$} |\n{rule}\n")
}

/// Renders the samples as a bordered, right-aligned table.
///
/// Speed and displacement are shown with 5 decimal places; time uses the
/// default float formatting (whole seconds print without a fraction).
pub fn format_table(samples: &KinematicSamples) -> String {
    let rule = "-".repeat(TABLE_HEADING.len());
    let mut lines = vec![rule.clone(), TABLE_HEADING.to_string(), rule.clone()];
    lines.extend(
        samples
            .rows()
            .map(|(t, v, s)| format!("{t:>7}   {v:>13.5}   {s:>15.5}")),
    );
    lines.push(rule);
    lines.join("\n") + "\n"
}

pub fn print_table(samples: &KinematicSamples) {
    print!("{}", format_table(samples));
}

/// Result line for the recovered acceleration, e.g. `g = 9.80665m/s²`.
pub fn format_gravity(g: f64) -> String {
    format!("g = {g}m/s²")
}
