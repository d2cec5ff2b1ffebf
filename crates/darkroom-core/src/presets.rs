//! The quick-edit catalog: named, pre-authored revise prompts.
//!
//! Pure configuration — applying a preset goes through exactly the same
//! path as a typed revision.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PresetKey {
    Enhance,
    Cinematic,
    WarmLight,
    CoolLight,
    BeachBg,
    ForestBg,
    Pixar,
    Vintage,
}

#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub key: PresetKey,
    /// Short button label.
    pub label: &'static str,
    /// The canned prompt sent to the gateway.
    pub prompt: &'static str,
    /// Icon identifier; rendering is up to the presentation layer.
    pub icon: &'static str,
}

impl PresetKey {
    pub const fn preset(self) -> Preset {
        match self {
            PresetKey::Enhance => Preset {
                key: self,
                label: "Enhance Details",
                prompt: "Enhance photo quality, increase sharpness and details, improve lighting.",
                icon: "Sparkles",
            },
            PresetKey::Cinematic => Preset {
                key: self,
                label: "Cinematic Look",
                prompt: "Apply a cinematic color grade, add a slight film grain, and increase contrast for a dramatic look.",
                icon: "Film",
            },
            PresetKey::WarmLight => Preset {
                key: self,
                label: "Warm Lighting",
                prompt: "Make the lighting in the image much warmer, as if it was taken during golden hour.",
                icon: "Sun",
            },
            PresetKey::CoolLight => Preset {
                key: self,
                label: "Cool Lighting",
                prompt: "Make the lighting in the image cooler, with more blue and cyan tones.",
                icon: "Snow",
            },
            PresetKey::BeachBg => Preset {
                key: self,
                label: "Beach Background",
                prompt: "Realistically change the background to a beautiful, sunny sea beach.",
                icon: "Beach",
            },
            PresetKey::ForestBg => Preset {
                key: self,
                label: "Forest Background",
                prompt: "Realistically change the background to a lush, green forest.",
                icon: "Tree",
            },
            PresetKey::Pixar => Preset {
                key: self,
                label: "Pixar Style",
                prompt: "Transform this image to look like a 3D animated movie, in the style of Pixar.",
                icon: "Cube",
            },
            PresetKey::Vintage => Preset {
                key: self,
                label: "Vintage Look",
                prompt: "Give this image a vintage, faded photograph look from the 1970s.",
                icon: "Camera",
            },
        }
    }
}

/// Catalog in display order.
pub const PRESETS: [Preset; 8] = [
    PresetKey::Enhance.preset(),
    PresetKey::Cinematic.preset(),
    PresetKey::WarmLight.preset(),
    PresetKey::CoolLight.preset(),
    PresetKey::BeachBg.preset(),
    PresetKey::ForestBg.preset(),
    PresetKey::Pixar.preset(),
    PresetKey::Vintage.preset(),
];
