//! BITGRID - BIT-GRID FILE VISUALIZER
//!
//! Renders a file's raw bytes as a near-square grid of black and white
//! squares: one cell per byte, black where the byte is ASCII '1'. The cell
//! under the pointer is outlined and its index shown below the canvas.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

mod app;
mod grid;
mod loader;
mod util;

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui::{self, Align2, FontId, Rect, RichText, Sense, Stroke, Vec2};

use app::{BitGridApp, MAX_EDGE, MIN_EDGE};
use grid::GridGeometry;
use util::color::{
    ACCENT, BIT_CLEAR, BIT_SET, CANVAS_BACKGROUND, CANVAS_BORDER, HOVER_OUTLINE, MUTED_TEXT,
    PAGE_BACKGROUND, PANEL_DARK, TEXT_PRIMARY,
};
use util::format_bytes;

// =============================================================================
// Application Implementation
// =============================================================================

impl eframe::App for BitGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load the command-line file on the first frame only.
        if let Some(path) = self.initial_file.take() {
            self.begin_load(path);
        }

        // Drain completed loads. While any are in flight, poll again soon so
        // completions are observed without waiting for user input.
        let file_changed = self.poll_loads();
        if self.is_loading() || file_changed {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        // A file dropped anywhere on the window replaces the current one.
        let dropped_file = ctx.input(|i| {
            self.is_drop_target = !i.raw.hovered_files.is_empty();
            i.raw.dropped_files.first().and_then(|f| f.path.clone())
        });
        if let Some(path) = dropped_file {
            self.begin_load(path);
        }

        egui::TopBottomPanel::top("controls")
            .frame(egui::Frame::none().fill(PANEL_DARK).inner_margin(8.0))
            .show(ctx, |ui| self.draw_controls(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(PAGE_BACKGROUND).inner_margin(12.0))
            .show(ctx, |ui| {
                // The canvas can be up to 3000x3000 px; scroll both ways.
                egui::ScrollArea::both()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| self.draw_canvas(ui));
            });
    }
}

// =============================================================================
// Panels
// =============================================================================

impl BitGridApp {
    /// Draw the controls row: file picker, file label, size inputs, reset.
    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open file...").clicked() {
                if let Some(path) = rfd::FileDialog::new().pick_file() {
                    self.begin_load(path);
                }
            }

            match &self.file {
                Some(info) => {
                    ui.label(RichText::new(&info.name).color(TEXT_PRIMARY));
                    ui.label(RichText::new(format_bytes(info.size)).color(MUTED_TEXT));
                }
                None => {
                    ui.label(RichText::new("no file loaded").color(MUTED_TEXT));
                }
            }
            if self.is_loading() {
                ui.label(RichText::new("loading...").color(ACCENT));
            }

            ui.separator();

            ui.label(RichText::new("Width:").color(MUTED_TEXT));
            ui.add(
                egui::DragValue::new(&mut self.dimensions.width)
                    .range(MIN_EDGE..=MAX_EDGE)
                    .speed(4),
            );
            ui.label(RichText::new("Height:").color(MUTED_TEXT));
            ui.add(
                egui::DragValue::new(&mut self.dimensions.height)
                    .range(MIN_EDGE..=MAX_EDGE)
                    .speed(4),
            );
            if ui.button("Reset size").clicked() {
                self.dimensions.reset();
            }
        });

        // Backstop for values typed past the drag limits.
        self.dimensions.clamp();
    }

    /// Paint the bit grid at exactly the configured pixel size and track the
    /// hovered cell.
    ///
    /// Stateless render: background, one filled rect per bit (hover outline
    /// inside the loop so later cells keep painting over its edges), then the
    /// canvas border. Cells past the last bit stay background-colored.
    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let size = Vec2::new(
            self.dimensions.width as f32,
            self.dimensions.height as f32,
        );
        let (canvas, response) = ui.allocate_exact_size(size, Sense::hover());
        let geometry = GridGeometry::layout(self.bits.len(), size.x, size.y);

        // Hover first: the outline is painted in this same frame.
        self.hovered = response
            .hover_pos()
            .and_then(|pos| geometry.index_at((pos - canvas.min).to_pos2()));

        let painter = ui.painter();
        painter.rect_filled(canvas, 0.0, CANVAS_BACKGROUND);

        for (index, bit) in self.bits.iter().take(geometry.cell_count()).enumerate() {
            let cell = geometry.cell_rect(index).translate(canvas.min.to_vec2());
            painter.rect_filled(cell, 0.0, if bit { BIT_SET } else { BIT_CLEAR });

            if self.hovered == Some(index) {
                painter.rect_stroke(cell, 0.0, Stroke::new(2.0, HOVER_OUTLINE));
            }
        }

        painter.rect_stroke(canvas, 0.0, Stroke::new(1.0, CANVAS_BORDER));

        if self.file.is_none() && !self.is_loading() {
            self.draw_empty_hint(ui, canvas);
        }
        if self.is_drop_target {
            self.draw_drop_indicator(ui, canvas);
        }

        ui.add_space(6.0);
        self.draw_hover_readout(ui, &geometry);
    }

    /// Hint line shown before the first file is loaded.
    fn draw_empty_hint(&self, ui: &egui::Ui, canvas: Rect) {
        ui.painter().text(
            canvas.center(),
            Align2::CENTER_CENTER,
            "open a file or drop one here",
            FontId::proportional(14.0),
            MUTED_TEXT,
        );
    }

    /// Highlight shown while a file hovers over the window.
    fn draw_drop_indicator(&self, ui: &egui::Ui, canvas: Rect) {
        ui.painter()
            .rect_stroke(canvas.shrink(1.0), 0.0, Stroke::new(2.0, ACCENT));
        ui.painter().text(
            canvas.center(),
            Align2::CENTER_CENTER,
            "drop to load",
            FontId::proportional(16.0),
            ACCENT,
        );
    }

    /// One-line readout under the canvas: hovered bit index, cell and value.
    fn draw_hover_readout(&self, ui: &mut egui::Ui, geometry: &GridGeometry) {
        let hovered_bit = self
            .hovered
            .and_then(|index| self.bits.get(index).map(|bit| (index, bit)));
        let readout = match hovered_bit {
            Some((index, bit)) => {
                let col = index % geometry.columns;
                let row = index / geometry.columns;
                format!(
                    "bit {index}  cell ({col}, {row})  = {}",
                    if bit { '1' } else { '0' }
                )
            }
            None => "-".to_string(),
        };
        ui.label(RichText::new(readout).monospace().color(MUTED_TEXT));
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> eframe::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional initial file as the first command-line argument.
    let args: Vec<String> = std::env::args().collect();
    let initial_file = if args.len() > 1 {
        let path = PathBuf::from(&args[1]);
        if path.exists() {
            Some(path)
        } else {
            log::warn!("file not found: {}", args[1]);
            None
        }
    } else {
        None
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 680.0])
            .with_min_inner_size([480.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Bitgrid",
        options,
        Box::new(move |cc| Ok(Box::new(BitGridApp::new_with_file(cc, initial_file)))),
    )
}
