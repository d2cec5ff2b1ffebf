use crate::app::DarkroomApp;

pub fn show(ctx: &egui::Context, app: &mut DarkroomApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Progress bar — indeterminate, the gateway reports no fractions.
        if let Some(message) = app.session.loading_message() {
            ui.add(egui::ProgressBar::new(0.0).text(message).animate(true));
        } else {
            // Invisible placeholder — same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            let revisions = app.session.history().len();
            ui.label(format!(
                "{revisions} revision{}",
                if revisions == 1 { "" } else { "s" }
            ));
            ui.separator();
            if let Some(size) = app.after_pane.image_size {
                ui.label(format!("{}x{}", size.x as u32, size.y as u32));
                ui.separator();
            }
            let scale = app.after_pane.viewport.transform().scale;
            ui.label(format!("Zoom: {:.0}%", scale * 100.0));
        });

        ui.add_space(2.0);
    });
}
