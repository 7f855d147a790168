use crate::MandalaApp;
use crate::config::{DrawMode, StrokeWidth, SYMMETRY_RANGE};

/// Toolbar across the top of the window: color, stroke, symmetry, mode, clear, save
pub fn tools_panel(app: &mut MandalaApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mut color = app.config().color();
            ui.label("Color:");
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::OnlyBlend,
            )
            .changed()
            {
                app.set_color(color);
            }

            ui.separator();

            let mut width = app.stroke_width();
            egui::ComboBox::from_id_salt("stroke_width")
                .selected_text(width.label())
                .show_ui(ui, |ui| {
                    for preset in StrokeWidth::ALL {
                        ui.selectable_value(&mut width, preset, preset.label());
                    }
                });
            if width != app.stroke_width() {
                log::info!("Stroke width selected from UI: {}", width.label());
                app.set_stroke_width(width);
            }

            ui.separator();

            let mut symmetry = app.symmetry_input();
            ui.label("Symmetry:");
            if ui
                .add(egui::DragValue::new(&mut symmetry).range(SYMMETRY_RANGE))
                .changed()
            {
                app.set_symmetry(symmetry);
            }

            ui.separator();

            let mut mode = app.config().mode();
            egui::ComboBox::from_id_salt("draw_mode")
                .selected_text(mode.label())
                .show_ui(ui, |ui| {
                    for option in DrawMode::ALL {
                        ui.selectable_value(&mut mode, option, option.label());
                    }
                });
            if mode != app.config().mode() {
                app.set_mode(mode);
            }

            ui.separator();

            if ui.button("Clear").clicked() {
                app.clear();
            }
            if ui.button("Save").clicked() {
                app.open_save_dialog();
            }
        });
    });
}
