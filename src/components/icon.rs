use gpui::{IntoElement, ParentElement, RenderOnce, Styled, div, px, svg};

use crate::icon::{IconName, IconRegistry};

#[derive(IntoElement)]
pub struct Icon {
    name: IconName,
    size: f32,
    color: Option<gpui::Hsla>,
    style: gpui::StyleRefinement,
}

impl Icon {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: IconName::new(name),
            size: 16.0,
            color: None,
            style: gpui::StyleRefinement::default(),
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(8.0);
        self
    }

    pub fn color(mut self, value: gpui::Hsla) -> Self {
        self.color = Some(value);
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        if let Some(path) = IconRegistry::new().resolve_named(&self.name) {
            let mut icon = svg()
                .external_path(path.to_string_lossy().to_string())
                .w(px(self.size))
                .h(px(self.size));
            if let Some(color) = self.color {
                icon = icon.text_color(color);
            }
            gpui::Refineable::refine(gpui::Styled::style(&mut icon), &self.style);
            return icon.into_any_element();
        }

        tracing::debug!(icon = self.name.as_str(), "icon not found, rendering fallback");
        let mut fallback = div()
            .w(px(self.size))
            .h(px(self.size))
            .child("?");
        if let Some(color) = self.color {
            fallback = fallback.text_color(color);
        }
        gpui::Refineable::refine(gpui::Styled::style(&mut fallback), &self.style);
        fallback.into_any_element()
    }
}

impl Styled for Icon {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
