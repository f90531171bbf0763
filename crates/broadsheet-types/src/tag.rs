use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Background/foreground color pair for a tag chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagColor {
    pub bg: &'static str,
    pub fg: &'static str,
}

impl TagColor {
    pub const fn new(bg: &'static str, fg: &'static str) -> Self {
        Self { bg, fg }
    }
}

const DEFAULT_COLOR: TagColor = TagColor::new("rgba(107,114,128,0.1)", "#6b7280");

/// Fixed tag-name to color mapping.
///
/// Process-wide static configuration: tags absent from the table fall
/// back to a neutral pair rather than failing.
pub struct TagPalette {
    colors: HashMap<&'static str, TagColor>,
}

impl TagPalette {
    pub fn new() -> Self {
        let mut colors = HashMap::new();

        colors.insert("algorithms", TagColor::new("rgba(37,99,235,0.1)", "#2563eb"));
        colors.insert("fundamentals", TagColor::new("rgba(124,58,237,0.1)", "#7c3aed"));
        colors.insert("networking", TagColor::new("rgba(5,150,105,0.1)", "#059669"));
        colors.insert("systems", TagColor::new("rgba(217,119,6,0.1)", "#d97706"));
        colors.insert("complexity", TagColor::new("rgba(219,39,119,0.1)", "#db2777"));

        Self { colors }
    }

    /// Shared process-wide palette instance.
    pub fn shared() -> &'static TagPalette {
        static PALETTE: Lazy<TagPalette> = Lazy::new(TagPalette::new);
        &PALETTE
    }

    /// Look up the color pair for a tag, falling back to the neutral
    /// default for unknown names.
    pub fn color(&self, tag: &str) -> TagColor {
        self.colors.get(tag).copied().unwrap_or(DEFAULT_COLOR)
    }
}

impl Default for TagPalette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve_to_fixed_colors() {
        let palette = TagPalette::new();
        assert_eq!(palette.color("algorithms").fg, "#2563eb");
        assert_eq!(palette.color("networking").bg, "rgba(5,150,105,0.1)");
    }

    #[test]
    fn unknown_tags_fall_back_to_neutral() {
        let palette = TagPalette::new();
        assert_eq!(palette.color("unheard-of"), DEFAULT_COLOR);
        assert_eq!(palette.color(""), DEFAULT_COLOR);
    }

    #[test]
    fn shared_palette_matches_fresh_palette() {
        assert_eq!(
            TagPalette::shared().color("systems"),
            TagPalette::new().color("systems")
        );
    }
}
