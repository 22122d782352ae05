// src/plot_functions/plot_tickertape.rs

use std::error::Error;
use std::path::Path;

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::constants::{
    COLOR_TICKERTAPE_DOT, DOT_RADIUS, TAPE_HALF_HEIGHT, TICKERTAPE_SUBTITLE, TICKERTAPE_TITLE,
    TICKERTAPE_X_LABEL,
};
use crate::error::KinematicsError;
use crate::plot_framework::{calculate_range, draw_strip_plot, ScatterSeries, StripPlotConfig};
use crate::types::KinematicSamples;

/// Builds the tickertape chart: one dot per sample at (displacement, 0).
///
/// Dots are one second apart in time, so their spacing along the tape grows
/// with the speed of the falling mass.
pub fn tickertape_plot_config(
    samples: &KinematicSamples,
) -> Result<StripPlotConfig, Box<dyn Error>> {
    if samples.is_empty() {
        return Err(Box::new(KinematicsError::EmptySamples));
    }

    let displacements = samples.displacements();
    let tape_y = Array1::<f64>::zeros(displacements.len());

    let s_min = *displacements.min()?;
    let s_max = *displacements.max()?;
    let (x_min, x_max) = calculate_range(s_min, s_max);

    let dots: Vec<(f64, f64)> = displacements
        .iter()
        .zip(tape_y.iter())
        .map(|(&s, &y)| (s, y))
        .collect();

    Ok(StripPlotConfig {
        title: TICKERTAPE_TITLE.to_string(),
        subtitle: TICKERTAPE_SUBTITLE.to_string(),
        x_range: x_min..x_max,
        y_range: -TAPE_HALF_HEIGHT..TAPE_HALF_HEIGHT,
        series: vec![ScatterSeries {
            data: dots,
            color: COLOR_TICKERTAPE_DOT,
            radius: DOT_RADIUS,
        }],
        x_label: TICKERTAPE_X_LABEL.to_string(),
    })
}

/// Renders the tickertape strip for `samples` into `output_file` (PNG).
pub fn plot_tickertape(samples: &KinematicSamples, output_file: &Path) -> Result<(), Box<dyn Error>> {
    let plot_config = tickertape_plot_config(samples)?;
    draw_strip_plot(output_file, &plot_config)
}
