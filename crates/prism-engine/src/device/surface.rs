use wgpu::{CompositeAlphaMode, TextureFormat};

/// Picks the surface format: an sRGB 8-bit format if preferred and offered,
/// otherwise the first one the surface reports.
pub(super) fn choose_surface_format(
    formats: &[TextureFormat],
    prefer_srgb: bool,
) -> Option<TextureFormat> {
    if prefer_srgb {
        let preferred = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Rgba8UnormSrgb];
        if let Some(f) = preferred.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }

    formats.first().copied()
}

pub(super) fn choose_alpha_mode(
    supported: &[CompositeAlphaMode],
    requested: Option<CompositeAlphaMode>,
) -> CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(CompositeAlphaMode::Auto)
}
