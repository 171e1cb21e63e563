use gpui::{Hsla, Pixels, px, rgb};

use crate::style::Spacing;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorToken {
    Text,
    Muted,
    Primary,
    Danger,
    Border,
    Surface,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldPalette {
    pub text: Hsla,
    pub muted: Hsla,
    pub primary: Hsla,
    pub danger: Hsla,
    pub border: Hsla,
    pub surface: Hsla,
}

impl Default for FieldPalette {
    fn default() -> Self {
        Self {
            text: rgb(0x212529).into(),
            muted: rgb(0x495057).into(),
            primary: rgb(0x228be6).into(),
            danger: rgb(0xfa5252).into(),
            border: rgb(0xced4da).into(),
            surface: rgb(0xffffff).into(),
        }
    }
}

pub const SPACE_SCALE_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldTheme {
    pub palette: FieldPalette,
    /// Pixel value of each spacing unit, indexed by [`Spacing`].
    pub space: [f32; SPACE_SCALE_LEN],
    pub default_margin_bottom: Spacing,
    pub header_margin_bottom: Spacing,
    pub row_gap: Spacing,
    pub icon_size: f32,
    pub toggle_caption_width: f32,
}

impl Default for FieldTheme {
    fn default() -> Self {
        Self {
            palette: FieldPalette::default(),
            space: [0.0, 4.0, 8.0, 12.0, 16.0, 24.0, 32.0, 48.0],
            default_margin_bottom: Spacing(5),
            header_margin_bottom: Spacing(2),
            row_gap: Spacing(2),
            icon_size: 16.0,
            toggle_caption_width: 45.0,
        }
    }
}

impl FieldTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palette(mut self, configure: impl FnOnce(FieldPalette) -> FieldPalette) -> Self {
        self.palette = configure(self.palette);
        self
    }

    pub fn space(mut self, value: [f32; SPACE_SCALE_LEN]) -> Self {
        self.space = value;
        self
    }

    pub fn default_margin_bottom(mut self, value: impl Into<Spacing>) -> Self {
        self.default_margin_bottom = value.into();
        self
    }

    pub fn header_margin_bottom(mut self, value: impl Into<Spacing>) -> Self {
        self.header_margin_bottom = value.into();
        self
    }

    pub fn row_gap(mut self, value: impl Into<Spacing>) -> Self {
        self.row_gap = value.into();
        self
    }

    pub fn icon_size(mut self, value: f32) -> Self {
        self.icon_size = value.max(8.0);
        self
    }

    /// Out-of-range units clamp to the largest step of the scale.
    pub fn spacing_px(&self, value: Spacing) -> Pixels {
        let index = usize::from(value.units()).min(SPACE_SCALE_LEN - 1);
        px(self.space[index])
    }

    pub fn color(&self, token: ColorToken) -> Hsla {
        let palette = &self.palette;
        match token {
            ColorToken::Text => palette.text,
            ColorToken::Muted => palette.muted,
            ColorToken::Primary => palette.primary,
            ColorToken::Danger => palette.danger,
            ColorToken::Border => palette.border,
            ColorToken::Surface => palette.surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_resolves_through_scale() {
        let theme = FieldTheme::default();
        assert_eq!(theme.spacing_px(Spacing::ZERO), px(0.0));
        assert_eq!(theme.spacing_px(Spacing(4)), px(16.0));
    }

    #[test]
    fn spacing_clamps_past_end_of_scale() {
        let theme = FieldTheme::default().space([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(theme.spacing_px(Spacing(200)), px(7.0));
    }

    #[test]
    fn palette_override_changes_resolved_token() {
        let red: Hsla = rgb(0xff0000).into();
        let theme = FieldTheme::default().palette(|mut palette| {
            palette.primary = red;
            palette
        });
        assert_eq!(theme.color(ColorToken::Primary), red);
        assert_ne!(theme.color(ColorToken::Danger), red);
    }
}
