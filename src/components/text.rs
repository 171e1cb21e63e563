use gpui::{
    FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    div,
};

use crate::provider::FieldProvider;
use crate::style::Size;
use crate::theme::ColorToken;

#[derive(IntoElement)]
pub struct FieldText {
    id: Option<SharedString>,
    content: SharedString,
    tone: ColorToken,
    size: Size,
    weight: Option<FontWeight>,
    style: gpui::StyleRefinement,
}

impl FieldText {
    pub fn new(content: impl Into<SharedString>) -> Self {
        Self {
            id: None,
            content: content.into(),
            tone: ColorToken::Text,
            size: Size::Md,
            weight: None,
            style: gpui::StyleRefinement::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn tone(mut self, value: ColorToken) -> Self {
        self.tone = value;
        self
    }

    pub fn with_size(mut self, value: Size) -> Self {
        self.size = value;
        self
    }

    pub fn weight(mut self, value: FontWeight) -> Self {
        self.weight = Some(value);
        self
    }
}

impl RenderOnce for FieldText {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = FieldProvider::theme(cx);
        let mut node = div().text_color(theme.color(self.tone));

        node = match self.size {
            Size::Xs => node.text_xs(),
            Size::Sm => node.text_sm(),
            Size::Md => node.text_base(),
        };
        if let Some(weight) = self.weight {
            node = node.font_weight(weight);
        }

        gpui::Refineable::refine(gpui::Styled::style(&mut node), &self.style);
        let node = node.child(self.content);
        match self.id {
            Some(id) => node.id(id).into_any_element(),
            None => node.into_any_element(),
        }
    }
}

impl Styled for FieldText {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
