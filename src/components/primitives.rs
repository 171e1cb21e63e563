use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use gpui::{
    AnyElement, App, Div, InteractiveElement, IntoElement, ParentElement, SharedString, Stateful,
    Styled, Window, div, px,
};
use thiserror::Error;

use crate::provider::FieldProvider;
use crate::theme::ColorToken;

/// Declared variant of a field's input.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum InputKind {
    Text,
    Password,
    Textarea,
    /// Any other variant understood by the single-line primitive, such as
    /// `email` or `number`.
    Other(SharedString),
}

impl InputKind {
    pub fn parse(value: &str) -> Self {
        match value {
            "text" => Self::Text,
            "password" => Self::Password,
            "textarea" => Self::Textarea,
            other => Self::Other(other.to_string().into()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Textarea => "textarea",
            Self::Other(value) => value.as_ref(),
        }
    }

    pub fn is_password(&self) -> bool {
        matches!(self, Self::Password)
    }
}

impl From<&str> for InputKind {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Display for InputKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const MAX_EXTRA_ATTRIBUTES: usize = 16;

/// Keys the field sets itself; a passthrough value can never replace them.
const RESERVED_ATTRIBUTES: &[&str] = &["type", "name", "id"];

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AttributeRejected {
    #[error("attribute `{0}` is owned by the field")]
    Reserved(SharedString),
    #[error("at most {MAX_EXTRA_ATTRIBUTES} extra attributes are allowed")]
    Full,
}

/// Bounded set of attributes forwarded verbatim to the input primitive.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExtraAttributes {
    entries: BTreeMap<SharedString, SharedString>,
}

impl ExtraAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        key: impl Into<SharedString>,
        value: impl Into<SharedString>,
    ) -> Result<(), AttributeRejected> {
        let key = key.into();
        if RESERVED_ATTRIBUTES
            .iter()
            .any(|reserved| key.eq_ignore_ascii_case(reserved))
        {
            return Err(AttributeRejected::Reserved(key));
        }
        if !self.entries.contains_key(&key) && self.entries.len() >= MAX_EXTRA_ATTRIBUTES {
            return Err(AttributeRejected::Full);
        }
        self.entries.insert(key, value.into());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&SharedString> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SharedString, &SharedString)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Recognized passthrough options plus the bounded extra map.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InputAttributes {
    pub placeholder: Option<SharedString>,
    pub value: Option<SharedString>,
    pub disabled: bool,
    pub read_only: bool,
    pub max_length: Option<usize>,
    pub auto_focus: bool,
    pub extra: ExtraAttributes,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputProps {
    pub id: SharedString,
    pub name: SharedString,
    pub auto_complete: SharedString,
    pub attributes: InputAttributes,
    /// Always the field's current variant, never a passthrough value.
    pub input_type: Option<InputKind>,
}

impl InputProps {
    pub fn is_masked(&self) -> bool {
        self.input_type.as_ref().is_some_and(InputKind::is_password)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextareaProps {
    pub id: SharedString,
    pub name: SharedString,
    pub attributes: InputAttributes,
}

/// Leaf input controls supplied by the host application.
pub trait InputPrimitives {
    fn single_line(&self, props: InputProps, window: &mut Window, cx: &mut App) -> AnyElement;
    fn multi_line(&self, props: TextareaProps, window: &mut Window, cx: &mut App) -> AnyElement;
}

/// Read-only outlined boxes showing the value or the placeholder.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutlinePrimitives;

impl OutlinePrimitives {
    fn display_text(attributes: &InputAttributes, masked: bool) -> (SharedString, ColorToken) {
        match (&attributes.value, &attributes.placeholder) {
            (Some(value), _) if masked => (
                "\u{2022}".repeat(value.chars().count()).into(),
                ColorToken::Text,
            ),
            (Some(value), _) => (value.clone(), ColorToken::Text),
            (None, Some(placeholder)) => (placeholder.clone(), ColorToken::Muted),
            (None, None) => (SharedString::default(), ColorToken::Muted),
        }
    }

    /// Control box carrying `id` as its element id, the same id the field
    /// label points at.
    fn frame(
        id: SharedString,
        attributes: &InputAttributes,
        masked: bool,
        cx: &App,
    ) -> Stateful<Div> {
        let theme = FieldProvider::theme(cx);
        let (text, tone) = Self::display_text(attributes, masked);
        let mut node = div()
            .flex_1()
            .border_1()
            .border_color(theme.color(ColorToken::Border))
            .rounded(px(4.0))
            .px(px(10.0))
            .py(px(6.0))
            .bg(theme.color(ColorToken::Surface))
            .text_sm()
            .text_color(theme.color(tone))
            .child(text);
        if attributes.disabled {
            node = node.opacity(0.6);
        }
        tracing::trace!(%id, masked, "outline primitive rendered");
        node.id(id)
    }
}

impl InputPrimitives for OutlinePrimitives {
    fn single_line(&self, props: InputProps, _window: &mut Window, cx: &mut App) -> AnyElement {
        let masked = props.is_masked();
        Self::frame(props.id, &props.attributes, masked, cx).into_any_element()
    }

    fn multi_line(&self, props: TextareaProps, _window: &mut Window, cx: &mut App) -> AnyElement {
        Self::frame(props.id, &props.attributes, false, cx)
            .min_h(px(72.0))
            .into_any_element()
    }
}
