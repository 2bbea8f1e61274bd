use crate::FuseboxApp;

use egui::RichText;
use fusebox_core::circuit::labels;
use fusebox_core::{BoardIntent, CircuitBoard, CircuitKind, Room};

/// Per-room drop-downs choosing which fuse feeds the lights and the sockets
pub fn show_circuit_mapping_panel(ui: &mut egui::Ui, app: &mut FuseboxApp) {
    let mut intents: Vec<BoardIntent> = Vec::new();

    ui.heading("Room Circuit Mapping");
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("circuit_mapping_scroll")
        .show(ui, |ui| {
            let board = app.session.board();
            for room in board.rooms() {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(&room.name).strong());

                    egui::Grid::new(format!("{}_mapping", room.id))
                        .num_columns(2)
                        .show(ui, |ui| {
                            for kind in CircuitKind::all() {
                                ui.label(RichText::new(kind.to_string()).small());
                                fuse_selector(ui, board, room, kind, &mut intents);
                                ui.end_row();
                            }
                        });
                });
            }
        });

    for intent in intents {
        app.apply_intent(intent);
    }
}

fn fuse_selector(
    ui: &mut egui::Ui,
    board: &CircuitBoard,
    room: &Room,
    kind: CircuitKind,
    intents: &mut Vec<BoardIntent>,
) {
    let current = room.fuse_for(kind);
    let selected_text = current
        .and_then(|id| board.fuse(id))
        .map(labels::fuse_option)
        .unwrap_or_else(|| labels::UNASSIGNED.to_string());

    let mut reassign = |fuse_id: Option<String>| {
        intents.push(BoardIntent::ReassignRoomCircuit {
            room_id: room.id.clone(),
            kind,
            fuse_id,
        });
    };

    egui::ComboBox::from_id_salt(format!("{}-{}", room.id, kind))
        .selected_text(selected_text)
        .width(140.0)
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_none(), labels::UNASSIGNED).clicked() {
                reassign(None);
            }
            for fuse in board.fuses() {
                let selected = current == Some(fuse.id.as_str());
                if ui.selectable_label(selected, labels::fuse_option(fuse)).clicked() {
                    reassign(Some(fuse.id.clone()));
                }
            }
        });
}
