use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::FormInput;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{apply_event, DrawScreenState};
use crate::ui::widgets;

pub struct DrawApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    form: FormInput,
    screen: DrawScreenState,
}

impl DrawApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: FormInput::new("6", "1", "60", true),
            screen: DrawScreenState::default(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_event(&mut self.screen, event);
        }
    }

    fn queue(&mut self, cmd: BackendCommand) {
        if dispatch_backend_command(&self.cmd_tx, cmd, &mut self.screen.status) {
            self.screen.mark_queued();
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let mut submitted = false;

        egui::Grid::new("draw_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for (label, text, hint) in [
                    ("Count", &mut self.form.count, "1-200"),
                    ("Min", &mut self.form.min, "lowest"),
                    ("Max", &mut self.form.max, "highest"),
                ] {
                    ui.label(label);
                    let response = widgets::integer_field(ui, text, hint);
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submitted = true;
                    }
                    ui.end_row();
                }
            });

        ui.checkbox(&mut self.form.no_repeat, "Don't repeat numbers");
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui.button("Draw").clicked() {
                submitted = true;
            }
            if ui.button("Clear").clicked() {
                self.queue(BackendCommand::Clear);
            }
            if self.screen.is_busy() {
                ui.spinner();
            }
        });

        if submitted {
            self.queue(BackendCommand::Submit(self.form.clone()));
        }
    }

    fn show_results(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                for tile in &self.screen.tiles {
                    widgets::tile(ui, tile);
                }
            });
        });
    }
}

impl eframe::App for DrawApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.weak(&self.screen.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Number draw");
            ui.add_space(8.0);
            self.show_form(ui);

            if let Some(message) = &self.screen.error {
                ui.add_space(8.0);
                widgets::error_banner(ui, message);
            }

            ui.separator();
            self.show_results(ui);
        });

        if self.screen.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
