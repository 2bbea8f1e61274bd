use crate::FuseboxApp;
use crate::constants::*;

use egui::{RichText, Sense, vec2};
use fusebox_core::BoardIntent;
use fusebox_core::circuit::labels;

const BREAKERS_PER_ROW: usize = 4;

/// The consumer unit: breaker switches, the add-fuse form and the affected-circuit summary
pub fn show_fuse_box_panel(ui: &mut egui::Ui, app: &mut FuseboxApp) {
    let mut intents: Vec<BoardIntent> = Vec::new();

    egui::ScrollArea::vertical()
        .id_salt("fuse_box_scroll")
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("METAL CLAD").small().weak());
                ui.heading("Consumer Unit");
            });
            ui.separator();

            show_breakers(ui, app, &mut intents);
            ui.separator();

            // Add Fuse Section
            ui.group(|ui| {
                ui.label(RichText::new("ADD FUSE").small().strong());
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut app.new_fuse_rating)
                            .hint_text("e.g. B20")
                            .desired_width(120.0),
                    );
                    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Add").clicked() || submitted {
                        intents.push(BoardIntent::AddFuse(app.new_fuse_rating.clone()));
                    }
                });
            });
            ui.separator();

            show_affected_summary(ui, app);
        });

    for intent in intents {
        app.apply_intent(intent);
    }
}

fn show_breakers(ui: &mut egui::Ui, app: &FuseboxApp, intents: &mut Vec<BoardIntent>) {
    let board = app.session.board();
    let circuits_by_fuse = board.circuits_by_fuse();

    egui::Grid::new("breaker_grid")
        .num_columns(BREAKERS_PER_ROW)
        .spacing([6.0, 6.0])
        .show(ui, |ui| {
            for (index, fuse) in board.fuses().iter().enumerate() {
                let is_on = board.breaker(&fuse.id) == Some(true);

                ui.group(|ui| {
                    ui.set_width(110.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(&fuse.rating).small().strong());

                        let (fill, text) = if is_on {
                            (COLOR_BREAKER_ON, "ON")
                        } else {
                            (COLOR_BREAKER_OFF, "OFF")
                        };
                        let toggle = egui::Button::new(RichText::new(text).small())
                            .fill(fill)
                            .min_size(vec2(36.0, 28.0));
                        if ui
                            .add(toggle)
                            .on_hover_text(format!("Toggle fuse {}", fuse.number))
                            .clicked()
                        {
                            intents.push(BoardIntent::ToggleBreaker(fuse.id.clone()));
                        }

                        ui.label(RichText::new(labels::fuse_position(fuse)).small().weak());
                        if ui.small_button("Remove").clicked() {
                            intents.push(BoardIntent::RemoveFuse(fuse.id.clone()));
                        }
                        ui.label(
                            RichText::new(labels::linked_circuits(circuits_by_fuse.get(&fuse.id)))
                                .small()
                                .weak(),
                        );
                    });
                });

                if (index + 1) % BREAKERS_PER_ROW == 0 {
                    ui.end_row();
                }
            }
        });
}

fn show_affected_summary(ui: &mut egui::Ui, app: &FuseboxApp) {
    let board = app.session.board();
    let affected_circuits = board.affected_circuits();
    let affected_rooms = board.affected_rooms();

    ui.horizontal(|ui| {
        ui.label(RichText::new("AFFECTED CIRCUITS").small().weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let color = if affected_circuits.is_empty() { COLOR_LIVE } else { COLOR_FAULT };
            let (rect, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
            ui.painter().circle_filled(rect.center(), 5.0, color);
        });
    });
    ui.label(labels::list_or_none(&affected_circuits));
    ui.label(
        RichText::new(format!("Rooms impacted: {}", labels::list_or_none(&affected_rooms)))
            .small()
            .weak(),
    );
}
