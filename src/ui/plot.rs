use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::color::CategoryColors;
use crate::dashboard::format_fixed;
use crate::data::aggregate::GroupMean;

const CHART_HEIGHT: f32 = 320.0;
const PIE_HOLE: f64 = 0.3;
const PIE_PULL: f64 = 0.05;
const BAR_COLOR: Color32 = Color32::from_rgb(99, 110, 250);

// ---------------------------------------------------------------------------
// Gender pie (donut)
// ---------------------------------------------------------------------------

/// Donut chart of per-gender means; slice size is the share of the summed means.
pub fn gender_pie(ui: &mut Ui, groups: &[GroupMean]) {
    let colors = CategoryColors::new(groups.iter().map(|g| g.category.as_str()));
    let values: Vec<f64> = groups.iter().map(|g| g.mean).collect();
    let slices = pie_slices(&values, PIE_HOLE, PIE_PULL);

    Plot::new("gender_pie")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (group, slice) in groups.iter().zip(&slices) {
                let color = colors.color_for(&group.category);
                // Small ring segments stay convex, which the polygon fill needs.
                for quad in slice.segments(48) {
                    let polygon = Polygon::new(quad.into_iter().collect::<PlotPoints>())
                        .name(&group.category)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, color));
                    plot_ui.polygon(polygon);
                }

                let [x, y] = slice.label_anchor();
                let label = format!("{}\n{:.1}%", group.category, slice.fraction * 100.0);
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    RichText::new(label).color(Color32::WHITE).strong(),
                ));
            }
        });
}

/// One slice of a donut, angles in radians (clockwise from 12 o'clock).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
    pub inner: f64,
    pub offset: [f64; 2],
}

/// Split the unit disc into slices proportional to `values`.
/// Returns nothing when the values do not sum to a positive number.
pub fn pie_slices(values: &[f64], hole: f64, pull: f64) -> Vec<PieSlice> {
    let total: f64 = values.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let fraction = v / total;
            let end = start + fraction * TAU;
            let mid = to_plot_angle((start + end) / 2.0);
            let slice = PieSlice {
                start,
                end,
                fraction,
                inner: hole,
                offset: [pull * mid.cos(), pull * mid.sin()],
            };
            start = end;
            slice
        })
        .collect()
}

impl PieSlice {
    fn point(&self, radius: f64, angle: f64) -> [f64; 2] {
        let a = to_plot_angle(angle);
        [
            self.offset[0] + radius * a.cos(),
            self.offset[1] + radius * a.sin(),
        ]
    }

    /// Ring quads covering this slice.
    pub fn segments(&self, steps: usize) -> Vec<Vec<[f64; 2]>> {
        let steps = steps.max(1);
        let step = (self.end - self.start) / steps as f64;
        (0..steps)
            .map(|i| {
                let a0 = self.start + step * i as f64;
                let a1 = a0 + step;
                vec![
                    self.point(self.inner, a0),
                    self.point(1.0, a0),
                    self.point(1.0, a1),
                    self.point(self.inner, a1),
                ]
            })
            .collect()
    }

    /// Middle of the ring at the slice's mid-angle.
    pub fn label_anchor(&self) -> [f64; 2] {
        self.point((1.0 + self.inner) / 2.0, (self.start + self.end) / 2.0)
    }
}

fn to_plot_angle(clockwise_from_top: f64) -> f64 {
    FRAC_PI_2 - clockwise_from_top
}

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

/// Horizontal bars, one per group, in the order given (bottom to top).
pub fn education_bars(ui: &mut Ui, groups: &[GroupMean]) {
    let bars: Vec<Bar> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| Bar::new(i as f64, g.mean).name(&g.category).width(0.6))
        .collect();
    let names = category_names(groups);

    Plot::new("education_bars")
        .height(CHART_HEIGHT)
        .x_axis_label("Overall average")
        .y_axis_label("Parental education")
        .y_axis_formatter(move |mark, _range| category_tick(&names, mark.value))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .color(BAR_COLOR)
                    .name("Overall average"),
            );
        });
}

/// Vertical bars with one colour (and legend entry) per group.
pub fn race_bars(ui: &mut Ui, groups: &[GroupMean]) {
    let colors = CategoryColors::new(groups.iter().map(|g| g.category.as_str()));
    let names = category_names(groups);

    Plot::new("race_bars")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Race/ethnicity")
        .y_axis_label("Overall average")
        .x_axis_formatter(move |mark, _range| category_tick(&names, mark.value))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, g) in groups.iter().enumerate() {
                let bar = Bar::new(i as f64, g.mean)
                    .name(format!("{}: {}", g.category, format_fixed(g.mean)))
                    .width(0.6);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .color(colors.color_for(&g.category))
                        .name(&g.category),
                );
            }
        });
}

fn category_names(groups: &[GroupMean]) -> Vec<String> {
    groups.iter().map(|g| g.category.clone()).collect()
}

/// Axis label for a grid mark: the category at that integer position, or "".
fn category_tick(names: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    names.get(rounded as usize).cloned().unwrap_or_default()
}
