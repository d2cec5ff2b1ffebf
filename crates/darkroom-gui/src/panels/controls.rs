use crate::app::DarkroomApp;

const PANEL_WIDTH: f32 = 300.0;

pub fn show(ctx: &egui::Context, app: &mut DarkroomApp) {
    egui::SidePanel::right("controls")
        .default_width(PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(PANEL_WIDTH - 20.0);

                start_section(ui, app);
                ui.separator();
                revise_section(ui, app);
            });
        });
}

fn start_section(ui: &mut egui::Ui, app: &mut DarkroomApp) {
    super::section_header(ui, "Start Here", None);
    ui.add_space(4.0);

    let loading = app.session.is_loading();
    let full_width = ui.available_width();

    let upload = ui.add_enabled(
        !loading,
        egui::Button::new("Upload Image").min_size(egui::vec2(full_width, 28.0)),
    );
    if upload.clicked() {
        super::open_image_dialog(app);
    }

    ui.vertical_centered(|ui| {
        ui.small("OR");
    });

    ui.add_enabled(
        !loading,
        egui::TextEdit::multiline(&mut app.ui_state.generate_prompt)
            .desired_rows(2)
            .desired_width(full_width)
            .hint_text("Generate an image, e.g., 'a cat astronaut'"),
    );

    let can_generate = !loading && !app.ui_state.generate_prompt.is_empty();
    let generate = ui.add_enabled(
        can_generate,
        egui::Button::new("✨ Generate").min_size(egui::vec2(full_width, 28.0)),
    );
    if generate.clicked() {
        let prompt = app.ui_state.generate_prompt.clone();
        if let Some(task) = app.session.begin_generate(&prompt) {
            app.run_task(task);
        }
    }
}

fn revise_section(ui: &mut egui::Ui, app: &mut DarkroomApp) {
    super::section_header(ui, "Revise Your Image", None);
    ui.add_space(4.0);

    let loading = app.session.is_loading();
    let has_image = app.session.current().is_some();
    let full_width = ui.available_width();

    let hint = if has_image {
        "Describe your changes..."
    } else {
        "Upload an image first"
    };
    ui.add_enabled(
        has_image && !loading,
        egui::TextEdit::multiline(&mut app.ui_state.revise_prompt)
            .desired_rows(4)
            .desired_width(full_width)
            .hint_text(hint),
    );

    ui.horizontal(|ui| {
        if app.voice.is_supported() {
            mic_button(ui, app, has_image && !loading);
        }

        let can_revise = has_image && !loading && !app.ui_state.revise_prompt.is_empty();
        let revise = ui.add_enabled(
            can_revise,
            egui::Button::new("🪄 Revise").min_size(egui::vec2(ui.available_width(), 28.0)),
        );
        if revise.clicked() {
            let prompt = app.ui_state.revise_prompt.clone();
            if let Some(task) = app.session.begin_revise(&prompt) {
                app.ui_state.revise_prompt.clear();
                app.last_transcript.clear();
                app.run_task(task);
            }
        }
    });
}

fn mic_button(ui: &mut egui::Ui, app: &mut DarkroomApp, enabled: bool) {
    let listening = app.voice.is_listening();

    let mut button = egui::Button::new("🎤").min_size(egui::vec2(32.0, 28.0));
    if listening {
        button = button.fill(egui::Color32::from_rgb(200, 40, 40));
    }

    let response = ui.add_enabled(enabled, button).on_hover_text(if listening {
        "Stop recording"
    } else {
        "Start recording"
    });
    if response.clicked() {
        app.voice.toggle();
    }
}
