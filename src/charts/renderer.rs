//! Static Chart Renderer
//! Writes figures as PNG images using plotters' bitmap backend.
//!
//! Every chart is 1000x600 px with a caption, labelled axes and a light grid.

use super::figure::{
    finite_range, BarFigure, Figure, HistogramFigure, LineFigure, ScatterFigure, SCATTER_ALPHA,
};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Output size in pixels, matching a 10x6 inch figure at 100 DPI.
pub const IMAGE_SIZE: (u32, u32) = (1000, 600);

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const BAR_COLOR: RGBColor = RGBColor(52, 152, 219);
const HIST_COLOR: RGBColor = RGBColor(46, 204, 113);
const DENSITY_COLOR: RGBColor = RGBColor(39, 174, 96);

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render one figure to a PNG file.
    pub fn render_to_file(figure: &Figure, path: &Path) -> Result<(), String> {
        let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
        Self::draw(&root, figure).map_err(|e| e.to_string())?;
        root.present().map_err(|e| e.to_string())
    }

    /// Draw a figure onto any plotters drawing area.
    pub fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        figure: &Figure,
    ) -> DrawResult<DB> {
        root.fill(&WHITE)?;
        match figure {
            Figure::Line(line) => Self::draw_line(root, figure, line),
            Figure::Bar(bar) => Self::draw_bars(root, figure, bar),
            Figure::Histogram(hist) => Self::draw_histogram(root, figure, hist),
            Figure::Scatter(scatter) => Self::draw_scatter(root, figure, scatter),
        }
    }

    fn draw_line<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        figure: &Figure,
        line: &LineFigure,
    ) -> DrawResult<DB> {
        let (x_range, y_range) = Self::point_ranges(&line.points);
        let mut chart = ChartBuilder::on(root)
            .caption(figure.title(), ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(65)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(figure.x_label())
            .y_desc(figure.y_label())
            .light_line_style(BLACK.mix(0.08))
            .draw()?;

        chart.draw_series(LineSeries::new(line.points.iter().copied(), &LINE_COLOR))?;
        chart.draw_series(
            line.points
                .iter()
                .map(|&p| Circle::new(p, 4, LINE_COLOR.filled())),
        )?;
        Ok(())
    }

    fn draw_bars<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        figure: &Figure,
        bar: &BarFigure,
    ) -> DrawResult<DB> {
        let max_label = bar.bars.iter().map(|(label, _)| *label).max().unwrap_or(0);
        let x_range = -0.5..(max_label as f64 + 0.5);
        let heights: Vec<f64> = bar.bars.iter().map(|(_, mean)| *mean).collect();
        let (lo, hi) = finite_range(&heights).unwrap_or((0.0, 1.0));
        let y_range = lo.min(0.0)..(hi.max(0.0) * 1.1).max(f64::MIN_POSITIVE);

        let mut chart = ChartBuilder::on(root)
            .caption(figure.title(), ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(65)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(max_label as usize + 1)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .x_desc(figure.x_label())
            .y_desc(figure.y_label())
            .light_line_style(BLACK.mix(0.08))
            .draw()?;

        chart.draw_series(bar.bars.iter().map(|&(label, mean)| {
            let x = label as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, mean)], BAR_COLOR.filled())
        }))?;
        Ok(())
    }

    fn draw_histogram<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        figure: &Figure,
        hist: &HistogramFigure,
    ) -> DrawResult<DB> {
        let (x_range, max_count) = match &hist.bins {
            Some(bins) => (bins.start..bins.end(), bins.max_count() as f64),
            None => (0.0..1.0, 1.0),
        };
        let density_peak = hist
            .density
            .iter()
            .map(|&(_, y)| y)
            .fold(0.0f64, f64::max);
        let y_top = (max_count.max(density_peak) * 1.1).max(1.0);

        let mut chart = ChartBuilder::on(root)
            .caption(figure.title(), ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(65)
            .build_cartesian_2d(x_range, 0.0..y_top)?;

        chart
            .configure_mesh()
            .x_desc(figure.x_label())
            .y_desc(figure.y_label())
            .light_line_style(BLACK.mix(0.08))
            .draw()?;

        if let Some(bins) = &hist.bins {
            chart.draw_series(bins.bars().map(|(low, high, count)| {
                Rectangle::new([(low, 0.0), (high, count as f64)], HIST_COLOR.mix(0.5).filled())
            }))?;
        }
        if !hist.density.is_empty() {
            chart.draw_series(LineSeries::new(
                hist.density.iter().copied(),
                DENSITY_COLOR.stroke_width(2),
            ))?;
        }
        Ok(())
    }

    fn draw_scatter<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        figure: &Figure,
        scatter: &ScatterFigure,
    ) -> DrawResult<DB> {
        let (x_range, y_range) = Self::point_ranges(&scatter.points);
        let mut chart = ChartBuilder::on(root)
            .caption(figure.title(), ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(65)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(figure.x_label())
            .y_desc(figure.y_label())
            .light_line_style(BLACK.mix(0.08))
            .draw()?;

        chart.draw_series(scatter.points.iter().map(|&p| {
            Circle::new(p, 5, LINE_COLOR.mix(SCATTER_ALPHA as f64).filled())
        }))?;
        Ok(())
    }

    fn point_ranges(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
        let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
        (Self::padded(&xs), Self::padded(&ys))
    }

    /// Data range with 5% padding; a unit range around a constant.
    fn padded(values: &[f64]) -> Range<f64> {
        match finite_range(values) {
            Some((lo, hi)) if hi > lo => {
                let pad = (hi - lo) * 0.05;
                (lo - pad)..(hi + pad)
            }
            Some((v, _)) => (v - 0.5)..(v + 0.5),
            None => 0.0..1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_widens_the_data_range() {
        let range = StaticChartRenderer::padded(&[1.0, 2.0, 3.0]);

        assert!((range.start - 0.9).abs() < 1e-12);
        assert!((range.end - 3.1).abs() < 1e-12);
    }

    #[test]
    fn constant_values_get_a_unit_range() {
        let range = StaticChartRenderer::padded(&[1.2, 1.2]);
        assert!((range.start - 0.7).abs() < 1e-12);
        assert!((range.end - 1.7).abs() < 1e-12);
        assert_eq!(StaticChartRenderer::padded(&[]), 0.0..1.0);
    }
}
