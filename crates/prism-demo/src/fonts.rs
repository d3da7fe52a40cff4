use std::path::Path;

use prism_engine::text::{FontId, FontSystem};

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loads the readout font: `preferred` first, then common system locations.
///
/// Returns `None` (after a warning) when nothing usable is found; the demo
/// then runs without text.
pub fn load_readout_font(fonts: &mut FontSystem, preferred: Option<&Path>) -> Option<FontId> {
    let candidates = preferred
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(Path::new));

    for path in candidates {
        let Ok(bytes) = std::fs::read(path) else { continue };
        match fonts.load_font(&bytes) {
            Ok(id) => {
                log::info!("loaded font {}", path.display());
                return Some(id);
            }
            Err(err) => log::warn!("{}: {err}", path.display()),
        }
    }

    log::warn!("no usable font found; readouts disabled (set PRISM_FONT to a .ttf file)");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_preferred_path_falls_through() {
        let mut fonts = FontSystem::new();
        // Result depends on the host's fonts; only the missing path must not panic.
        let _ = load_readout_font(&mut fonts, Some(Path::new("/nonexistent/prism.ttf")));
    }
}
