//! # Memory Over Time Chart
//!
//! Line chart of the memory samples, drawn directly with the egui painter.
//!
//! ## Axes
//!
//! - X: sample index `n`, labelled with about ten evenly spread ticks
//! - Y: memory in MB, logarithmic (base 10) or linear depending on config
//!
//! Values are mapped into the plot rectangle with `egui::lerp`. On a log axis
//! samples below 1MB are drawn at 1MB, since the logarithm of zero has no place
//! on the axis.

use eframe::egui;
use egui::Color32;

use crate::config::MemoryAxis;

/// Number of labelled ticks along the sample axis.
pub const X_TICK_COUNT: usize = 10;
/// Number of labelled grid lines along the memory axis.
pub const Y_TICK_COUNT: usize = 5;

const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 18.0;
const MARGIN_BOTTOM: f32 = 36.0;

/// Mapping between memory values and vertical chart position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    axis: MemoryAxis,
    lo: f64,
    hi: f64,
}

impl AxisScale {
    /// Scale covering `[min, max]`, widened when both ends coincide.
    pub fn new(axis: MemoryAxis, min: u64, max: u64) -> Self {
        let mut lo = project(axis, min as f64);
        let mut hi = project(axis, max as f64);
        if hi - lo < f64::EPSILON {
            lo -= 1.0;
            hi += 1.0;
        }
        Self { axis, lo, hi }
    }

    /// Position of `value` on the axis, 0.0 at the bottom and 1.0 at the top.
    pub fn fraction(&self, value: u64) -> f32 {
        ((project(self.axis, value as f64) - self.lo) / (self.hi - self.lo)) as f32
    }

    /// Memory value found at `fraction` of the axis height.
    pub fn value_at(&self, fraction: f32) -> f64 {
        let projected = self.lo + fraction as f64 * (self.hi - self.lo);
        match self.axis {
            MemoryAxis::Log => 10f64.powf(projected),
            MemoryAxis::Linear => projected,
        }
    }
}

fn project(axis: MemoryAxis, value: f64) -> f64 {
    match axis {
        MemoryAxis::Log => value.max(1.0).log10(),
        MemoryAxis::Linear => value,
    }
}

/// Sample indices that get a label on the x axis.
pub fn x_ticks(sample_count: usize, tick_count: usize) -> Vec<usize> {
    if sample_count == 0 || tick_count == 0 {
        return Vec::new();
    }
    if sample_count == 1 || tick_count == 1 {
        return vec![0];
    }
    let step = (sample_count - 1) as f64 / (tick_count - 1) as f64;
    let mut ticks: Vec<usize> = (0..tick_count).map(|i| (i as f64 * step).round() as usize).collect();
    ticks.dedup();
    ticks
}

/// Horizontal position of sample `index`, 0.0 at the left and 1.0 at the right.
pub fn x_fraction(index: usize, sample_count: usize) -> f32 {
    if sample_count <= 1 { 0.5 } else { index as f32 / (sample_count - 1) as f32 }
}

/// Render the memory chart into a full-width area of the given height.
///
/// # Parameters
///
/// * `ui` - egui UI to allocate the chart in
/// * `samples` - Memory samples in file order
/// * `axis` - Scale of the memory axis
/// * `height` - Total chart height including axis labels
pub fn render(ui: &mut egui::Ui, samples: &[u64], axis: MemoryAxis, height: f32) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.left() + MARGIN_LEFT, rect.top() + MARGIN_TOP),
        egui::pos2(rect.right() - MARGIN_RIGHT, rect.bottom() - MARGIN_BOTTOM),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    let (Some(&min), Some(&max)) = (samples.iter().min(), samples.iter().max()) else {
        return;
    };
    let scale = AxisScale::new(axis, min, max);
    let text_color = ui.visuals().text_color();
    let grid_stroke = egui::Stroke::new(1.0, ui.visuals().weak_text_color().gamma_multiply(0.3));
    let font = egui::FontId::monospace(10.0);

    // Memory axis grid and labels
    for i in 0..Y_TICK_COUNT {
        let f = i as f32 / (Y_TICK_COUNT - 1) as f32;
        let y = egui::lerp(plot.bottom()..=plot.top(), f);
        painter.line_segment([egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)], grid_stroke);
        painter.text(egui::pos2(plot.left() - 6.0, y), egui::Align2::RIGHT_CENTER, format!("{:.0}", scale.value_at(f)), font.clone(), text_color);
    }
    painter.text(rect.left_top() + egui::vec2(6.0, 2.0), egui::Align2::LEFT_TOP, "Memory (MB)", font.clone(), text_color);

    // Sample axis ticks and labels
    for index in x_ticks(samples.len(), X_TICK_COUNT) {
        let x = egui::lerp(plot.left()..=plot.right(), x_fraction(index, samples.len()));
        painter.line_segment([egui::pos2(x, plot.bottom()), egui::pos2(x, plot.bottom() + 4.0)], grid_stroke);
        painter.text(egui::pos2(x, plot.bottom() + 6.0), egui::Align2::CENTER_TOP, index.to_string(), font.clone(), text_color);
    }
    painter.text(egui::pos2(plot.center().x, rect.bottom() - 2.0), egui::Align2::CENTER_BOTTOM, "n", font.clone(), text_color);

    let to_screen = |index: usize, value: u64| {
        egui::pos2(
            egui::lerp(plot.left()..=plot.right(), x_fraction(index, samples.len())),
            egui::lerp(plot.bottom()..=plot.top(), scale.fraction(value)),
        )
    };
    let line_color = Color32::from_rgb(0, 128, 255);
    let points: Vec<egui::Pos2> = samples.iter().enumerate().map(|(i, &v)| to_screen(i, v)).collect();
    if points.len() == 1 {
        painter.circle_filled(points[0], 3.0, line_color);
    } else {
        painter.add(egui::Shape::line(points, egui::Stroke::new(2.0, line_color)));
    }

    // Nearest sample under the pointer
    if let Some(pointer) = response.hover_pos() {
        if plot.expand(4.0).contains(pointer) {
            let t = ((pointer.x - plot.left()) / plot.width()).clamp(0.0, 1.0);
            let index = (t * (samples.len().saturating_sub(1)) as f32).round() as usize;
            let value = samples[index];
            let pos = to_screen(index, value);
            painter.circle_stroke(pos, 4.0, egui::Stroke::new(1.5, Color32::YELLOW));
            painter.text(pos + egui::vec2(6.0, -6.0), egui::Align2::LEFT_BOTTOM, format!("n={} {}MB", index, value), font, Color32::YELLOW);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_scale_is_monotonic() {
        let scale = AxisScale::new(MemoryAxis::Log, 10, 10_000);
        assert!(scale.fraction(10).abs() < 1e-6);
        assert!((scale.fraction(10_000) - 1.0).abs() < 1e-6);
        assert!(scale.fraction(100) < scale.fraction(1_000));
        assert!((scale.fraction(100) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_log_scale_handles_zero() {
        let scale = AxisScale::new(MemoryAxis::Log, 0, 100);
        assert_eq!(scale.fraction(0), 0.0);
        assert_eq!(scale.fraction(1), 0.0);
        assert!(scale.fraction(0).is_finite());
    }

    #[test]
    fn test_flat_series_is_centered() {
        for axis in [MemoryAxis::Log, MemoryAxis::Linear] {
            let scale = AxisScale::new(axis, 512, 512);
            assert!((scale.fraction(512) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_value_at_inverts_fraction() {
        let scale = AxisScale::new(MemoryAxis::Linear, 100, 300);
        assert!((scale.value_at(0.5) - 200.0).abs() < 1e-9);
        let scale = AxisScale::new(MemoryAxis::Log, 10, 1000);
        assert!((scale.value_at(0.5) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_x_ticks() {
        assert!(x_ticks(0, X_TICK_COUNT).is_empty());
        assert_eq!(x_ticks(1, X_TICK_COUNT), vec![0]);
        assert_eq!(x_ticks(4, X_TICK_COUNT), vec![0, 1, 2, 3]);
        let ticks = x_ticks(100, X_TICK_COUNT);
        assert_eq!(ticks.len(), X_TICK_COUNT);
        assert_eq!(ticks.first(), Some(&0));
        assert_eq!(ticks.last(), Some(&99));
    }

    #[test]
    fn test_x_fraction_single_sample() {
        assert_eq!(x_fraction(0, 1), 0.5);
        assert_eq!(x_fraction(3, 4), 1.0);
    }
}
