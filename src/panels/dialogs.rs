use crate::MandalaApp;

/// "Save" dialog asking for the destination path
pub fn save_dialog(app: &mut MandalaApp, ctx: &egui::Context) {
    let mut confirmed = false;
    let mut cancelled = false;

    let Some(dialog) = app.save_dialog_mut() else {
        return;
    };

    egui::Window::new("Save Drawing")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Save the canvas as a PNG image:");
            let response = ui.text_edit_singleline(&mut dialog.path);
            let has_path = !dialog.path.trim().is_empty();
            if has_path && response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                confirmed = true;
            }

            ui.horizontal(|ui| {
                if ui.add_enabled(has_path, egui::Button::new("Save")).clicked() {
                    confirmed = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        app.confirm_save_dialog();
    } else if cancelled {
        app.close_save_dialog();
    }
}

/// Dismissable error message after a failed export
pub fn error_dialog(app: &mut MandalaApp, ctx: &egui::Context) {
    let Some(message) = app.error_message().map(str::to_owned) else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("Save Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.colored_label(egui::Color32::RED, format!("Error saving image: {message}"));
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        app.dismiss_error();
    }
}
