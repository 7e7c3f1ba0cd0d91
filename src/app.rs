use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    title: String,
}

impl DashboardApp {
    /// Load the configured dataset and build the initial view.
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            state: AppState::load(&config.data_path),
            title: config.title.clone(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, &self.title);
        });

        // ---- Left side panel: filters (only with a dataset) ----
        if self.state.dataset.is_some() {
            egui::SidePanel::left("filter_panel")
                .default_width(200.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: metrics, charts, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::central_panel(ui, &self.state);
                });
        });
    }
}
