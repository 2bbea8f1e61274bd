use crate::FuseboxApp;
use crate::constants::LOG_TYPE_SETTINGS;
use egui_lens::{ReactiveEventLogger, ReactiveEventLoggerState, LogColors};
use egui_mobius_reactive::Dynamic;
use chrono_tz::Tz;
use chrono::Local;

pub fn show_settings_panel<'a>(
    ui: &mut egui::Ui,
    app: &'a mut FuseboxApp,
    logger_state: &'a Dynamic<ReactiveEventLoggerState>,
    log_colors: &'a Dynamic<LogColors>,
) {
    let logger = ReactiveEventLogger::with_colors(logger_state, log_colors);

    ui.heading("Application Settings");
    ui.separator();

    // New fuse defaults
    ui.group(|ui| {
        ui.label("Distribution Board");
        ui.horizontal(|ui| {
            ui.label("Default rating for new fuses:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut app.config.default_fuse_rating).desired_width(80.0),
            );
            if response.lost_focus() {
                let rating = app.config.default_fuse_rating.trim().to_uppercase();
                if rating.is_empty() {
                    app.config.default_fuse_rating = fusebox_core::constants::DEFAULT_FUSE_RATING.to_string();
                } else {
                    app.config.default_fuse_rating = rating;
                }
                logger.log_custom(
                    LOG_TYPE_SETTINGS,
                    &format!("Default fuse rating set to {}", app.config.default_fuse_rating),
                );
            }
        });
        ui.label(format!("State file: {}", app.session.store().path().display()));
    });

    ui.add_space(20.0);

    // Timezone Section
    ui.group(|ui| {
        ui.label("Time & Localization");
        ui.horizontal(|ui| {
            ui.label("Timezone:");

            let current_tz_name = app.config.user_timezone.as_deref().unwrap_or("Local");

            egui::ComboBox::from_id_salt("timezone_selector")
                .selected_text(current_tz_name.to_string())
                .width(300.0)
                .show_ui(ui, |ui| {
                    if ui.selectable_value(&mut app.config.user_timezone, None, "Local").clicked() {
                        logger.log_custom(LOG_TYPE_SETTINGS, "Changed timezone to local time");
                    }

                    // Common timezones first
                    ui.label("Common Timezones:");
                    for tz_name in &[
                        "UTC",
                        "Europe/London",
                        "Europe/Dublin",
                        "Europe/Paris",
                        "Europe/Berlin",
                        "US/Eastern",
                        "US/Pacific",
                        "Australia/Sydney",
                    ] {
                        if ui.selectable_value(&mut app.config.user_timezone, Some(tz_name.to_string()), *tz_name).clicked() {
                            logger.log_custom(LOG_TYPE_SETTINGS, &format!("Changed timezone to {}", tz_name));
                        }
                    }

                    ui.separator();
                    ui.label("All Timezones:");

                    for tz in chrono_tz::TZ_VARIANTS {
                        let tz_name = tz.name();
                        if ui.selectable_value(&mut app.config.user_timezone, Some(tz_name.to_string()), tz_name).clicked() {
                            logger.log_custom(LOG_TYPE_SETTINGS, &format!("Changed timezone to {}", tz_name));
                        }
                    }
                });
        });

        if ui.checkbox(&mut app.config.use_24_hour_clock, "24-hour clock").changed() {
            let clock = if app.config.use_24_hour_clock { "24-hour" } else { "12-hour" };
            logger.log_custom(LOG_TYPE_SETTINGS, &format!("Switched to {} clock", clock));
        }

        // Show current time in selected timezone
        if let Some(tz_name) = &app.config.user_timezone {
            if let Ok(tz) = tz_name.parse::<Tz>() {
                let now = Local::now().with_timezone(&tz);
                ui.label(format!("Current time: {}", now.format("%Y-%m-%d %H:%M:%S %Z")));
            }
        }
    });
}
