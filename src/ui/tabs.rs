use crate::FuseboxApp;
use crate::ui;

use egui_lens::ReactiveEventLogger;
use serde::{Serialize, Deserialize};

/// Define the tabs for the DockArea
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    FloorPlan,
    DistributionBoard,
    CircuitMapping,
    EventLog,
    Settings,
}

pub struct TabParams<'a> {
    pub app: &'a mut FuseboxApp,
}

/// Tab container struct for DockArea
#[derive(Clone, Serialize, Deserialize)]
pub struct Tab {
    pub kind: TabKind,
}

impl Tab {
    pub fn new(kind: TabKind) -> Self {
        Self { kind }
    }

    pub fn title(&self) -> String {
        match self.kind {
            TabKind::FloorPlan => "Floor Plan".to_string(),
            TabKind::DistributionBoard => "Distribution Board".to_string(),
            TabKind::CircuitMapping => "Circuit Mapping".to_string(),
            TabKind::EventLog => "Event Log".to_string(),
            TabKind::Settings => "Settings".to_string(),
        }
    }

    pub fn content(&self, ui: &mut egui::Ui, params: &mut TabParams<'_>) {
        match self.kind {
            TabKind::FloorPlan => {
                ui::show_floor_plan_panel(ui, params.app);
            }
            TabKind::DistributionBoard => {
                ui::show_fuse_box_panel(ui, params.app);
            }
            TabKind::CircuitMapping => {
                ui::show_circuit_mapping_panel(ui, params.app);
            }
            TabKind::EventLog => {
                let logger = ReactiveEventLogger::with_colors(&params.app.logger_state, &params.app.log_colors);
                logger.show(ui);
            }
            TabKind::Settings => {
                let logger_state_clone = params.app.logger_state.clone();
                let log_colors_clone = params.app.log_colors.clone();
                ui::show_settings_panel(ui, params.app, &logger_state_clone, &log_colors_clone);
            }
        }
    }
}

pub struct TabViewer<'a> {
    pub app: &'a mut FuseboxApp,
}

impl<'a> egui_dock::TabViewer for TabViewer<'a> {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.title().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        let mut params = TabParams {
            app: self.app,
        };
        tab.content(ui, &mut params);
    }
}
