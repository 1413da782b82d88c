//! Charts module - Figure descriptions and their two renderers

mod figure;
mod plotter;
mod renderer;

pub use figure::{BarFigure, Figure, HistogramFigure, LineFigure, ScatterFigure, SCATTER_ALPHA};
pub use plotter::ChartPlotter;
pub use renderer::{StaticChartRenderer, IMAGE_SIZE};

use crate::config::{RenderConfig, RenderTarget};
use crate::gui;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to open chart window for '{figure}': {message}")]
    Display {
        figure: &'static str,
        message: String,
    },
    #[error("Failed to draw '{figure}': {message}")]
    Draw {
        figure: &'static str,
        message: String,
    },
    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render figures in order to the configured target.
///
/// Interactive display blocks on each window until it is closed. File output
/// returns the written PNG paths.
pub fn render_all(figures: &[Figure], config: &RenderConfig) -> Result<Vec<PathBuf>, RenderError> {
    match config.target {
        RenderTarget::InteractiveDisplay => {
            for figure in figures {
                info!(figure = figure.title(), "opening chart window");
                gui::show_blocking(figure.clone()).map_err(|e| RenderError::Display {
                    figure: figure.title(),
                    message: e.to_string(),
                })?;
            }
            Ok(Vec::new())
        }
        RenderTarget::FileOutput => {
            let dir = &config.output_directory;
            fs::create_dir_all(dir).map_err(|source| RenderError::OutputDirectory {
                path: dir.clone(),
                source,
            })?;

            figures
                .iter()
                .map(|figure| {
                    let path = dir.join(format!("{}.png", figure.file_stem()));
                    StaticChartRenderer::render_to_file(figure, &path).map_err(|message| {
                        RenderError::Draw {
                            figure: figure.title(),
                            message,
                        }
                    })?;
                    info!(path = %path.display(), "chart written");
                    Ok(path)
                })
                .collect()
        }
    }
}
