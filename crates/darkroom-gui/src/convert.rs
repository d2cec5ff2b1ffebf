use darkroom_core::error::{DarkroomError, Result};
use darkroom_core::payload::ImagePayload;

/// Decode an image payload to an egui ColorImage for display.
pub fn payload_to_color_image(payload: &ImagePayload) -> Result<egui::ColorImage> {
    let decoded = image::load_from_memory(payload.bytes())
        .map_err(|e| DarkroomError::InvalidPayload(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Downscaled decode for the history list.
pub fn payload_to_thumbnail(payload: &ImagePayload, max_edge: u32) -> Result<egui::ColorImage> {
    let decoded = image::load_from_memory(payload.bytes())
        .map_err(|e| DarkroomError::InvalidPayload(e.to_string()))?;
    let thumb = decoded.thumbnail(max_edge, max_edge).to_rgba8();
    let size = [thumb.width() as usize, thumb.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, thumb.as_raw()))
}
