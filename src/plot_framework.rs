// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::ChartBuilder;
use plotters::drawing::IntoDrawingArea;
use plotters::element::Circle;
use plotters::style::{Color, RGBColor};

use log::{debug, info};
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT, PLOT_HEIGHT, PLOT_WIDTH, RANGE_PADDING_MIN,
    RANGE_PADDING_RATIO,
};
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_MAIN_TITLE};

/// Calculate plot range with padding.
/// Adds RANGE_PADDING_RATIO of the span on each side, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        RANGE_PADDING_MIN
    } else {
        range * RANGE_PADDING_RATIO
    };
    (min - padding, max + padding)
}

#[derive(Clone)]
pub struct ScatterSeries {
    pub data: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub radius: i32,
}

/// A single-row chart with a title, a subtitle, an x axis and no y ticks.
#[derive(Clone)]
pub struct StripPlotConfig {
    pub title: String,
    pub subtitle: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<ScatterSeries>,
    pub x_label: String,
}

/// Draws a strip scatter chart into a PNG file.
///
/// The drawing area lives only for the duration of this call: it is presented
/// before a successful return and dropped on every error path.
pub fn draw_strip_plot<'a>(
    output_filename: &'a Path,
    plot_config: &StripPlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
        && plot_config.y_range.end > plot_config.y_range.start;
    if !valid_ranges {
        return Err(format!(
            "invalid plot ranges for '{}': x={:?}, y={:?}",
            output_filename.display(),
            plot_config.x_range,
            plot_config.y_range
        )
        .into());
    }

    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&COLOR_BACKGROUND)?;
    let titled_area = root_area.titled(&plot_config.title, FONT_TUPLE_MAIN_TITLE)?;

    let mut chart = ChartBuilder::on(&titled_area)
        .caption(&plot_config.subtitle, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(0)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    // Vertical gridlines only; the y axis carries no ticks or labels.
    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .x_labels(20)
        .y_labels(0)
        .disable_y_mesh()
        .x_label_formatter(&|x| format!("{x:.0}"))
        .bold_line_style(COLOR_GRID)
        .light_line_style(COLOR_BACKGROUND.mix(0.7))
        .axis_style(COLOR_TEXT)
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    for s in &plot_config.series {
        debug!("Drawing {} points", s.data.len());
        chart.draw_series(
            s.data
                .iter()
                .map(|&(x, y)| Circle::new((x, y), s.radius, s.color.filled())),
        )?;
    }

    root_area.present()?;
    info!("Plot saved as '{}'.", output_filename.display());
    Ok(())
}
