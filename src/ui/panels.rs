use eframe::egui::{self, Color32, RichText, Ui};

use crate::dashboard::{DashboardView, GenderPanel, Metric};
use crate::data::filter::GenderFilter;
use crate::state::{AppState, Halt};
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Title, subtitle and row counts.
pub fn top_bar(ui: &mut Ui, state: &AppState, title: &str) {
    ui.add_space(4.0);
    ui.heading(RichText::new(title).strong());
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Interactive analysis of exam results by demographics and preparation.");
        if let Some((total, visible)) = state.counts() {
            ui.separator();
            ui.label(format!("{total} students loaded, {visible} visible"));
        }
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the gender radio group.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();
    ui.strong("Select gender:");

    let mut selected = state.filter;
    for option in GenderFilter::ALL {
        ui.radio_value(&mut selected, option, option.label());
    }
    state.set_filter(selected);
}

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the whole dashboard body, or the message that replaces it.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    if let Some(halt) = &state.halt {
        halt_message(ui, halt);
        return;
    }
    let Some(view) = &state.view else {
        return;
    };

    ui.heading("Averages for the current selection");
    metrics_row(ui, &view.metrics);
    ui.separator();

    ui.heading("Averages by group");
    ui.columns(2, |cols: &mut [Ui]| {
        gender_column(&mut cols[0], view);
        cols[1].strong("Average by parental education");
        plot::education_bars(&mut cols[1], &view.by_parental_education);
    });

    ui.strong("Average by race/ethnicity");
    plot::race_bars(ui, &view.by_race_ethnicity);
    ui.separator();

    ui.heading("Detailed data (ranked by average)");
    ui.label("Filtered rows, sorted from highest to lowest overall average.");
    table::ranked_table(ui, &view.table);
}

fn gender_column(ui: &mut Ui, view: &DashboardView) {
    ui.strong("Average by gender");
    match &view.gender {
        GenderPanel::Breakdown(groups) => plot::gender_pie(ui, groups),
        GenderPanel::Single { filter, metric } => {
            ui.label(
                RichText::new(format!("Showing data only for: {filter}"))
                    .color(Color32::LIGHT_BLUE),
            );
            metric_card(ui, metric);
        }
    }
}

fn metrics_row(ui: &mut Ui, metrics: &[Metric]) {
    ui.columns(metrics.len(), |cols: &mut [Ui]| {
        for (col, metric) in cols.iter_mut().zip(metrics) {
            metric_card(col, metric);
        }
    });
}

fn metric_card(ui: &mut Ui, metric: &Metric) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.label(&metric.label);
        ui.label(RichText::new(&metric.value).size(28.0).strong());
    });
}

fn halt_message(ui: &mut Ui, halt: &Halt) {
    match halt {
        Halt::LoadFailed {
            path,
            message,
            missing_file,
        } => {
            ui.label(RichText::new(format!("Error: {message}")).color(Color32::RED));
            if *missing_file {
                ui.label(format!(
                    "Make sure '{}' is in the directory the dashboard is started from.",
                    path.display()
                ));
            }
        }
        Halt::NoData => {
            ui.label(RichText::new("No data found.").color(Color32::YELLOW));
        }
    }
}
