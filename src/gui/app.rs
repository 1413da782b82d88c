//! Figure Window
//! A native window showing a single chart until the user closes it.

use crate::charts::{ChartPlotter, Figure};
use eframe::egui;
use egui::RichText;

/// Inner window size, matching a 10x6 inch figure.
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 600.0];

/// One chart per window.
pub struct FigureWindow {
    figure: Figure,
}

impl FigureWindow {
    pub fn new(_cc: &eframe::CreationContext<'_>, figure: Figure) -> Self {
        Self { figure }
    }
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(self.figure.title()).size(18.0).strong());
            });
            ui.add_space(8.0);
            ChartPlotter::draw_figure(ui, &self.figure);
        });
    }
}

/// Open a window for `figure` and block until it is closed.
pub fn show_blocking(figure: Figure) -> eframe::Result<()> {
    let title = figure.title();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size([400.0, 300.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Ok(Box::new(FigureWindow::new(cc, figure)))),
    )
}
