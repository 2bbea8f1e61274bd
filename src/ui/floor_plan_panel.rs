use crate::FuseboxApp;
use crate::constants::*;

use egui::{RichText, Stroke};
use fusebox_core::CircuitKind;
use fusebox_core::circuit::labels;

/// Room cards coloured by power state, with the board-wide health headline
pub fn show_floor_plan_panel(ui: &mut egui::Ui, app: &mut FuseboxApp) {
    let board = app.session.board();
    let degraded = board.any_room_degraded();

    ui.horizontal(|ui| {
        ui.heading("Floor Plan");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let color = if degraded { COLOR_FAULT } else { COLOR_LIVE };
            ui.label(RichText::new(labels::board_health(degraded).to_uppercase()).color(color).small().strong());
        });
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("floor_plan_scroll")
        .show(ui, |ui| {
            for room in board.rooms() {
                let healthy = board.room_power_status(room).healthy();
                let (fill, border) = if healthy {
                    (ROOM_HEALTHY_FILL, ROOM_HEALTHY_BORDER)
                } else {
                    (ROOM_DEGRADED_FILL, ROOM_DEGRADED_BORDER)
                };

                egui::Frame::group(ui.style())
                    .fill(fill)
                    .stroke(Stroke::new(1.0, border))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(&room.name).color(ROOM_TEXT).strong());
                        for kind in CircuitKind::all() {
                            let status = labels::circuit_status(board, room, kind);
                            ui.label(RichText::new(format!("{}: {}", kind, status)).color(ROOM_TEXT).small());
                        }
                    });
                ui.add_space(4.0);
            }
        });
}
