// src/visualization/window.rs

use super::plotter::SharedPlotter;
use super::VisualizationConfig;
use eframe::egui;
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

pub struct StreamWindow {
    plotter: SharedPlotter,
    config: VisualizationConfig,
}

impl StreamWindow {
    pub fn new(plotter: SharedPlotter, config: VisualizationConfig) -> Self {
        Self { plotter, config }
    }

    /// Opens the native window and blocks until it is closed. Closing the
    /// window is the normal way to stop a live run, not an error.
    pub fn run(plotter: SharedPlotter, config: VisualizationConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([config.window_width as f32, config.window_height as f32])
                .with_title("Stream Sentinel - Live Anomaly Detection"),
            ..Default::default()
        };

        eframe::run_native(
            "Stream Sentinel",
            options,
            Box::new(|_cc| Ok(Box::new(StreamWindow::new(plotter, config)))),
        )
    }
}

impl eframe::App for StreamWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Repaint continuously while the feed thread appends verdicts.
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Stream Sentinel - Live Anomaly Detection");
            ui.separator();

            let plotter = self.plotter.lock().unwrap();

            if plotter.is_empty() {
                ui.label("Waiting for data...");
                return;
            }

            ui.horizontal(|ui| {
                ui.label(format!("Readings: {}", plotter.reading_count()));
                ui.separator();
                ui.label(format!("Anomalies: {}", plotter.anomaly_total()));
                if plotter.is_finished() {
                    ui.separator();
                    ui.label("Stream complete");
                }
            });

            let series: PlotPoints = plotter.series().into_iter().collect();
            let line = Line::new(series)
                .color(egui::Color32::LIGHT_BLUE)
                .width(1.5)
                .name("Data Stream");

            let anomalies: PlotPoints = plotter.anomalies().into_iter().collect();
            let markers = Points::new(anomalies)
                .color(egui::Color32::RED)
                .shape(MarkerShape::Circle)
                .radius(4.0)
                .name("Anomalies");

            let show_anomalies = self.config.show_anomalies;

            Plot::new("stream")
                .show_axes([true, true])
                .show_grid([true, true])
                .allow_zoom(true)
                .allow_drag(true)
                .allow_scroll(true)
                .legend(egui_plot::Legend::default())
                .show(ui, |plot_ui| {
                    plot_ui.line(line);
                    if show_anomalies {
                        plot_ui.points(markers);
                    }
                });
        });
    }
}
