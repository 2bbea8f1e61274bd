use std::{fs, path::PathBuf, time::Duration};

use egui_dock::{DockArea, DockState, NodeIndex, Style};

/// egui_lens imports
use egui_lens::{ReactiveEventLogger, ReactiveEventLoggerState, LogColors};
use egui_mobius_reactive::Dynamic;

use fusebox_core::circuit::labels;
use fusebox_core::constants::{CONFIG_DIR_NAME, DOCK_STATE_FILE_NAME};
use fusebox_core::{AppConfig, BoardIntent, BoardSession, JsonFileStore};

use crate::constants::LOG_TYPE_BOARD;
use crate::platform::parameters::gui::{APPLICATION_NAME, VERSION};
use crate::ui::{Tab, TabKind, TabViewer, initialize_and_show_banner};

/// The main application struct
pub struct FuseboxApp {
    // Board state and the file it is saved to
    pub session: BoardSession<JsonFileStore>,

    // Logger state and colors
    pub logger_state : Dynamic<ReactiveEventLoggerState>,
    pub log_colors   : Dynamic<LogColors>,

    // User preferences
    pub config: AppConfig,

    // Contents of the "Add Fuse" input
    pub new_fuse_rating: String,

    // Dock state
    dock_state: DockState<Tab>,
    config_path: PathBuf,
}

impl Drop for FuseboxApp {
    fn drop(&mut self) {
        self.save_dock_state();
        if let Err(e) = self.config.save_to_file(&self.config_path) {
            log::warn!("Failed to save config: {}", e);
        }
    }
}

impl FuseboxApp {
    /// **Create a new instance of the FuseboxApp**
    ///
    /// Loads the user config and the saved board (or the default house layout),
    /// restores the dock layout and writes the startup banner to the event log.
    pub fn new() -> Self {
        let config_path = dirs::config_dir()
            .map(|d| d.join(CONFIG_DIR_NAME))
            .unwrap_or_default();

        let config = match AppConfig::load_from_file(&config_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config: {}", e);
                AppConfig::default()
            }
        };

        let store = match &config.state_file {
            Some(path) => JsonFileStore::new(path.clone()),
            None => JsonFileStore::in_config_dir(),
        };
        log::info!("Board state file: {}", store.path().display());
        let session = BoardSession::open(store);

        let dock_state = Self::load_dock_state().unwrap_or_else(Self::default_dock_state);

        let app = Self {
            session,
            logger_state: Dynamic::new(ReactiveEventLoggerState::new()),
            log_colors: Dynamic::new(LogColors::default()),
            new_fuse_rating: config.default_fuse_rating.clone(),
            config,
            dock_state,
            config_path,
        };

        {
            let logger = ReactiveEventLogger::with_colors(&app.logger_state, &app.log_colors);
            initialize_and_show_banner(&logger);
            let board = app.session.board();
            logger.log_info(&format!(
                "Loaded {} fuses and {} rooms",
                board.fuses().len(),
                board.rooms().len()
            ));
        }

        app
    }

    /// Apply a user action to the board and record it in the event log.
    pub fn apply_intent(&mut self, intent: BoardIntent) {
        if !self.session.apply(&intent) {
            log::debug!("No change from {:?}", intent);
            return;
        }

        let logger = ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors);
        logger.log_custom(LOG_TYPE_BOARD, &intent.describe());

        if matches!(intent, BoardIntent::AddFuse(_)) {
            self.new_fuse_rating = self.config.default_fuse_rating.clone();
        }

        let affected = self.session.board().affected_rooms();
        if !affected.is_empty() {
            logger.log_warning(&format!("Rooms impacted: {}", labels::list_or_none(&affected)));
        }
    }

    fn default_dock_state() -> DockState<Tab> {
        let mut dock_state = DockState::new(vec![Tab::new(TabKind::FloorPlan)]);
        let surface = dock_state.main_surface_mut();

        // Distribution board and mapping on the right
        let [_left, right] = surface.split_right(
            NodeIndex::root(),
            0.5,
            vec![Tab::new(TabKind::DistributionBoard), Tab::new(TabKind::CircuitMapping)],
        );

        surface.split_below(
            right,
            0.7,
            vec![Tab::new(TabKind::EventLog), Tab::new(TabKind::Settings)],
        );

        dock_state
    }

    fn save_dock_state(&self) {
        if let Err(e) = fs::create_dir_all(&self.config_path) {
            log::warn!("Failed to create config directory: {}", e);
            return;
        }
        let path = self.config_path.join(DOCK_STATE_FILE_NAME);
        match serde_json::to_string_pretty(&self.dock_state) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    log::warn!("Failed to write dock state: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to serialize dock state: {}", e),
        }
    }

    fn load_dock_state() -> Option<DockState<Tab>> {
        let path = dirs::config_dir()?.join(CONFIG_DIR_NAME).join(DOCK_STATE_FILE_NAME);
        let json = fs::read_to_string(&path).ok()?;
        match serde_json::from_str::<DockState<Tab>>(&json) {
            Ok(dock_state) => Some(dock_state),
            Err(e) => {
                log::warn!("Failed to deserialize dock state: {}", e);
                fs::remove_file(path).ok();
                None
            }
        }
    }

    /// Show clock display in the upper right corner
    fn show_clock_display(&self, ui: &mut egui::Ui) {
        use chrono::{Local, Utc};
        use chrono_tz::Tz;

        ui.label(egui::RichText::new(format!("Fusebox v{}", VERSION))
            .color(egui::Color32::from_rgb(100, 150, 200)));

        ui.separator();

        let format = if self.config.use_24_hour_clock { "%H:%M:%S" } else { "%I:%M:%S %p" };
        let clock_text = match self.config.user_timezone.as_deref().map(str::parse::<Tz>) {
            Some(Ok(tz)) => {
                let now = Utc::now().with_timezone(&tz);
                format!("🕐 {} {}", now.format(format), tz.name())
            }
            _ => format!("🕐 {}", Local::now().format(format)),
        };

        ui.label(egui::RichText::new(clock_text).color(egui::Color32::from_rgb(150, 150, 150)));
    }
}

impl Default for FuseboxApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Implement the eframe::App trait for FuseboxApp
///
/// Draws the status ribbon and the dock area every frame. All views read the
/// session's board directly, so a change made in one tab shows up in every
/// other tab on the same frame.
impl eframe::App for FuseboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status_ribbon").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 10.0;

                ui.label(egui::RichText::new(APPLICATION_NAME).strong());
                ui.separator();

                let degraded = self.session.board().any_room_degraded();
                let color = if degraded {
                    crate::constants::COLOR_FAULT
                } else {
                    crate::constants::COLOR_LIVE
                };
                ui.label(egui::RichText::new(labels::board_health(degraded)).color(color).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.show_clock_display(ui);
                });
            });
        });

        let mut dock_state = self.dock_state.clone();
        let mut tab_viewer = TabViewer { app: self };
        let mut style = Style::from_egui(ctx.style().as_ref());
        style.dock_area_padding = None;
        style.tab_bar.fill_tab_bar = true;

        DockArea::new(&mut dock_state)
            .style(style)
            .show_add_buttons(false)
            .show_close_buttons(false)
            .show(ctx, &mut tab_viewer);

        self.dock_state = dock_state;

        // Keep the clock ticking
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
