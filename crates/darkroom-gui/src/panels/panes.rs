use darkroom_core::viewport::{self, Size};

use crate::app::DarkroomApp;
use crate::state::PaneState;

pub fn show(ctx: &egui::Context, app: &mut DarkroomApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(message) = app.session.error() {
            let text = format!("Error: {message}");
            ui.label(egui::RichText::new(text).color(ui.visuals().error_fg_color));
            ui.separator();
        }

        let loading = app.session.loading_message().map(str::to_string);
        ui.columns(2, |columns| {
            image_pane(&mut columns[0], &mut app.before_pane, "Before", None);
            image_pane(&mut columns[1], &mut app.after_pane, "After", loading.as_deref());
        });
    });
}

fn image_pane(ui: &mut egui::Ui, pane: &mut PaneState, title: &str, loading: Option<&str>) {
    let rect = ui.available_rect_before_wrap();
    paint_background(ui, rect);

    let texture_info = pane.texture.as_ref().map(|t| t.id());
    if let (Some(texture_id), Some(image_size)) = (texture_info, pane.image_size) {
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        let container = viewport::size(rect.width(), rect.height());
        let rendered = viewport::fit_size(viewport::size(image_size.x, image_size.y), container);

        handle_zoom(ui, &response, pane, rect, rendered, container);
        handle_drag(&response, pane, rect, rendered, container);
        if response.double_clicked() {
            pane.viewport.reset();
        }

        let transform = pane.viewport.transform();
        let scaled = egui::vec2(rendered.width, rendered.height) * transform.scale;
        let center = rect.center() + egui::vec2(transform.x, transform.y);
        draw_image(ui, texture_id, rect, egui::Rect::from_center_size(center, scaled));
    } else {
        show_placeholder(ui);
    }

    draw_pane_label(ui, rect, title);
    if let Some(message) = loading {
        draw_loading_overlay(ui, rect, message);
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// One wheel notch zooms by the fixed step, anchored at the cursor.
fn handle_zoom(
    ui: &egui::Ui,
    response: &egui::Response,
    pane: &mut PaneState,
    rect: egui::Rect,
    rendered: Size,
    container: Size,
) {
    let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }

    if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
        let cursor = mouse_pos - rect.center();
        pane.viewport.wheel(
            viewport::vec2(cursor.x, cursor.y),
            scroll_delta > 0.0,
            rendered,
            container,
        );
    }
}

fn handle_drag(
    response: &egui::Response,
    pane: &mut PaneState,
    rect: egui::Rect,
    rendered: Size,
    container: Size,
) {
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            let pointer = pos - rect.center();
            pane.viewport.drag_start(viewport::vec2(pointer.x, pointer.y));
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            let pointer = pos - rect.center();
            pane.viewport
                .drag_move(viewport::vec2(pointer.x, pointer.y), rendered, container);
        }
    }
    if response.drag_stopped() {
        pane.viewport.drag_end();
    }
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, clip: egui::Rect, img_rect: egui::Rect) {
    // Zoomed content must not spill into the neighboring pane.
    ui.painter().with_clip_rect(clip).image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_pane_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Your image will appear here")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn draw_loading_overlay(ui: &mut egui::Ui, rect: egui::Rect, message: &str) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(180));

    let spinner_rect =
        egui::Rect::from_center_size(rect.center() - egui::vec2(0.0, 18.0), egui::vec2(28.0, 28.0));
    ui.put(spinner_rect, egui::Spinner::new().size(28.0));

    ui.painter().text(
        rect.center() + egui::vec2(0.0, 14.0),
        egui::Align2::CENTER_CENTER,
        message,
        egui::FontId::proportional(14.0),
        egui::Color32::WHITE,
    );
}
