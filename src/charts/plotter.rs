//! Chart Plotter Module
//! Draws figures interactively using egui_plot.

use super::figure::{BarFigure, Figure, HistogramFigure, LineFigure, ScatterFigure, SCATTER_ALPHA};
use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, PlotUi, Points};

pub const LINE_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue
pub const BAR_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Light blue
pub const HIST_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green
pub const DENSITY_COLOR: Color32 = Color32::from_rgb(39, 174, 96); // Dark green

/// Creates egui_plot charts for lattice figures.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw a figure filling the available space.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
        let mut plot = Plot::new(figure.file_stem())
            .x_axis_label(figure.x_label())
            .y_axis_label(figure.y_label())
            .legend(Legend::default());

        if let Figure::Bar(bar) = figure {
            let labels: Vec<u32> = bar.bars.iter().map(|(label, _)| *label).collect();
            plot = plot.x_axis_formatter(move |mark, _range| {
                let value = mark.value;
                let idx = value.round();
                if (value - idx).abs() < 1e-6 && labels.contains(&(idx as u32)) {
                    format!("{}", idx as u32)
                } else {
                    String::new()
                }
            });
        }

        plot.show(ui, |plot_ui| match figure {
            Figure::Line(line) => Self::draw_line(plot_ui, line),
            Figure::Bar(bar) => Self::draw_bars(plot_ui, bar),
            Figure::Histogram(hist) => Self::draw_histogram(plot_ui, hist),
            Figure::Scatter(scatter) => Self::draw_scatter(plot_ui, scatter),
        });
    }

    fn to_plot_points(points: &[(f64, f64)]) -> PlotPoints {
        PlotPoints::from_iter(points.iter().map(|&(x, y)| [x, y]))
    }

    fn draw_line(plot_ui: &mut PlotUi, figure: &LineFigure) {
        plot_ui.line(
            Line::new(Self::to_plot_points(&figure.points))
                .color(LINE_COLOR)
                .width(1.5)
                .name("k-inf"),
        );
        plot_ui.points(
            Points::new(Self::to_plot_points(&figure.points))
                .radius(3.5)
                .color(LINE_COLOR),
        );
    }

    fn draw_bars(plot_ui: &mut PlotUi, figure: &BarFigure) {
        let bars: Vec<Bar> = figure
            .bars
            .iter()
            .map(|&(label, mean)| {
                Bar::new(label as f64, mean)
                    .width(0.8)
                    .fill(BAR_COLOR)
                    .name(format!("Range {label}"))
            })
            .collect();
        plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name("Mean PPPF"));
    }

    fn draw_histogram(plot_ui: &mut PlotUi, figure: &HistogramFigure) {
        if let Some(bins) = &figure.bins {
            let bars: Vec<Bar> = bins
                .bars()
                .map(|(low, high, count)| {
                    Bar::new((low + high) / 2.0, count as f64)
                        .width(bins.width)
                        .fill(HIST_COLOR.gamma_multiply(0.5))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).color(HIST_COLOR).name("Count"));
        }

        if !figure.density.is_empty() {
            plot_ui.line(
                Line::new(Self::to_plot_points(&figure.density))
                    .color(DENSITY_COLOR)
                    .width(2.0)
                    .name("Density"),
            );
        }
    }

    fn draw_scatter(plot_ui: &mut PlotUi, figure: &ScatterFigure) {
        plot_ui.points(
            Points::new(Self::to_plot_points(&figure.points))
                .radius(4.0)
                .color(LINE_COLOR.gamma_multiply(SCATTER_ALPHA))
                .name("Simulations"),
        );
    }
}
