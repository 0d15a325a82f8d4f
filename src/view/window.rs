//! Native timer window (eframe/egui)

use std::sync::Arc;
use eframe::egui::{self, Color32, RichText};
use tracing::error;

use super::Scene;
use crate::{
    state::TimerWidget,
    tasks::window::{close_on_signal, repaint_task},
};

/// eframe app showing the widget's five labels in one centered row
pub struct TimerApp {
    widget: Arc<TimerWidget>,
    scene: Scene,
}

impl TimerApp {
    pub fn new(widget: Arc<TimerWidget>, scene: Scene) -> Self {
        Self { widget, scene }
    }

    /// Draw one frame from the widget's current labels
    pub fn show(&self, ctx: &egui::Context) {
        let grid = match self.widget.grid() {
            Ok(grid) => grid,
            Err(e) => {
                error!("Failed to read timer grid: {}", e);
                return;
            }
        };
        let finished = matches!(self.widget.is_finished(), Ok(true));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.spacing_mut().item_spacing.x = self.scene.hgap();
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    for text in grid.texts() {
                        let mut label = RichText::new(text)
                            .size(self.scene.font_size())
                            .monospace();
                        if finished {
                            label = label.color(Color32::RED);
                        }
                        ui.label(label);
                    }
                });
            });
        });
    }
}

impl eframe::App for TimerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

/// Fixed-size, non-resizable window carrying the scene title
pub fn native_options(scene: &Scene) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(scene.title())
            .with_inner_size(scene.size())
            .with_resizable(false),
        ..Default::default()
    }
}

/// Open the window and block until it is closed.
/// Must run on the main thread with a tokio runtime entered.
pub fn run(widget: Arc<TimerWidget>, scene: Scene) -> Result<(), eframe::Error> {
    let options = native_options(&scene);
    let app_name = scene.title().to_string();

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            tokio::spawn(repaint_task(ctx.clone(), widget.subscribe()));
            tokio::spawn(close_on_signal(ctx));
            Ok(Box::new(TimerApp::new(widget, scene)))
        }),
    )
}
