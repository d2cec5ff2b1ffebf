use darkroom_core::presets::PRESETS;
use darkroom_core::revision::RevisionId;
use tracing::warn;

use crate::app::DarkroomApp;
use crate::convert::payload_to_thumbnail;

const PANEL_WIDTH: f32 = 260.0;
const THUMB_DISPLAY: f32 = 48.0;
/// Decode at 2x the display size so thumbnails stay crisp on hidpi.
const THUMB_EDGE: u32 = 96;
const HISTORY_MAX_HEIGHT: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut DarkroomApp) {
    egui::SidePanel::left("sidebar")
        .default_width(PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(PANEL_WIDTH - 20.0);

                quick_edits_section(ui, app);

                if !app.session.history().is_empty() {
                    ui.separator();
                    history_section(ui, app);
                }
            });
        });
}

fn quick_edits_section(ui: &mut egui::Ui, app: &mut DarkroomApp) {
    super::section_header(ui, "Quick Edits", None);
    ui.add_space(4.0);

    let can_edit = app.session.current().is_some() && !app.session.is_loading();
    let button_width = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;

    let mut chosen = None;
    egui::Grid::new("quick_edits").num_columns(2).show(ui, |ui| {
        for row in PRESETS.chunks(2) {
            for preset in row {
                let text = format!("{}\n{}", icon_glyph(preset.icon), preset.label);
                let button = egui::Button::new(text).min_size(egui::vec2(button_width, 44.0));
                if ui.add_enabled(can_edit, button).on_hover_text(preset.prompt).clicked() {
                    chosen = Some(preset.key);
                }
            }
            ui.end_row();
        }
    });

    if let Some(key) = chosen {
        if let Some(task) = app.session.apply_preset(key) {
            app.ui_state.add_log(format!("Preset: {}", key.preset().label));
            app.run_task(task);
        }
    }
}

fn history_section(ui: &mut egui::Ui, app: &mut DarkroomApp) {
    let count = app.session.history().len();
    let status = format!("{count} revisions");
    super::section_header(ui, "History", Some(&status));
    ui.add_space(4.0);

    let current = app.session.current_id();
    let rows: Vec<(RevisionId, String)> = app
        .session
        .history()
        .iter()
        .map(|r| (r.id(), truncate_label(r.label())))
        .collect();

    let mut revert_target = None;
    egui::ScrollArea::vertical()
        .id_salt("history_list")
        .max_height(HISTORY_MAX_HEIGHT)
        .show(ui, |ui| {
            for (id, label) in &rows {
                let selected = current == Some(*id);
                ui.horizontal(|ui| {
                    show_thumbnail(ui, app, *id);
                    if ui.selectable_label(selected, label).clicked() {
                        revert_target = Some(*id);
                    }
                });
            }
        });

    if let Some(id) = revert_target {
        if let Some(rev) = app.session.history().get(id) {
            let msg = format!("Reverted to {} ({})", rev.id(), truncate_label(rev.label()));
            app.ui_state.add_log(msg);
        }
        app.session.revert_to(id);
    }
}

fn show_thumbnail(ui: &mut egui::Ui, app: &mut DarkroomApp, id: RevisionId) {
    let history = app.session.history();
    let entry = app.history_thumbs.entry(id).or_insert_with(|| {
        let revision = history.get(id)?;
        match payload_to_thumbnail(revision.image(), THUMB_EDGE) {
            Ok(image) => Some(ui.ctx().load_texture(
                format!("thumb-{id}"),
                image,
                egui::TextureOptions::LINEAR,
            )),
            Err(e) => {
                warn!(%id, error = %e, "thumbnail decode failed");
                None
            }
        }
    });

    if let Some(texture) = entry {
        ui.add(
            egui::Image::new(&*texture)
                .fit_to_exact_size(egui::vec2(THUMB_DISPLAY, THUMB_DISPLAY))
                .corner_radius(4.0),
        );
    }
}

fn truncate_label(label: &str) -> String {
    const MAX: usize = 42;
    if label.chars().count() > MAX {
        let head: String = label.chars().take(MAX - 1).collect();
        format!("{head}…")
    } else {
        label.to_string()
    }
}

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "Sparkles" => "✨",
        "Film" => "🎬",
        "Sun" => "☀",
        "Snow" => "❄",
        "Beach" => "🏖",
        "Tree" => "🌲",
        "Cube" => "📦",
        "Camera" => "📷",
        _ => "•",
    }
}
