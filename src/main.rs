use eframe::egui;
use student_dashboard::app::DashboardApp;
use student_dashboard::config::DashboardConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(&config)))),
    )
}
