use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Category colours
// ---------------------------------------------------------------------------

/// Maps the categories of one chart to distinct colours, in the order given.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: HashMap<String, Color32>,
    default_color: Color32,
}

impl CategoryColors {
    pub fn new<'a>(categories: impl IntoIterator<Item = &'a str>) -> Self {
        let categories: Vec<&str> = categories.into_iter().collect();
        let mapping = categories
            .iter()
            .zip(generate_palette(categories.len()))
            .map(|(c, color)| (c.to_string(), color))
            .collect();
        Self {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn categories_get_distinct_colours() {
        let colors = CategoryColors::new(["group A", "group B", "group C"]);
        let a = colors.color_for("group A");
        let b = colors.color_for("group B");
        assert_ne!(a, b);
        assert_eq!(colors.color_for("unknown"), Color32::GRAY);
    }
}
