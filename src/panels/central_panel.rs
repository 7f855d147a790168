use crate::MandalaApp;

pub fn central_panel(app: &mut MandalaApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            // The canvas keeps its pixel size; the window is not resizable.
            let (response, painter) = ui.allocate_painter(app.canvas_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            // Dialogs own the pointer while open
            if app.save_dialog().is_none() && app.error_message().is_none() {
                app.handle_input(ctx, canvas_rect, painter.layer_id());
            }

            app.render_canvas(ctx, &painter, canvas_rect);
        });
}
