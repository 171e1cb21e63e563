use gpui::SharedString;

use crate::icon::ERROR;
use crate::style::Spacing;

use super::field_state::PasswordVisibility;
use super::primitives::{InputAttributes, InputKind, InputProps, TextareaProps};

const MULTI_MARGIN_BOTTOM: Spacing = Spacing(4);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RenderStrategy {
    Delegated,
    Multiline,
    SingleLine(Option<InputKind>),
}

/// Picks the one rendering path for this pass. A delegated renderer wins
/// over every variant.
pub fn select_strategy(has_delegate: bool, current: Option<&InputKind>) -> RenderStrategy {
    if has_delegate {
        return RenderStrategy::Delegated;
    }
    match current {
        Some(InputKind::Textarea) => RenderStrategy::Multiline,
        other => RenderStrategy::SingleLine(other.cloned()),
    }
}

pub fn resolve_margin_bottom(
    inline: bool,
    multi: bool,
    margin_bottom: Option<Spacing>,
    default: Spacing,
) -> Spacing {
    if inline {
        Spacing::ZERO
    } else if multi {
        MULTI_MARGIN_BOTTOM
    } else {
        margin_bottom.unwrap_or(default)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldLabel {
    pub text: SharedString,
    /// Id of the control this label names.
    pub for_id: SharedString,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PasswordToggle {
    pub visibility: PasswordVisibility,
}

impl PasswordToggle {
    pub fn icon(self) -> &'static str {
        self.visibility.icon()
    }

    pub fn caption(self) -> &'static str {
        self.visibility.caption()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldHeader {
    pub label: Option<FieldLabel>,
    pub toggle: Option<PasswordToggle>,
    pub description: Option<SharedString>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ControlPlan {
    Delegated {
        id: SharedString,
        name: SharedString,
        attributes: InputAttributes,
    },
    Multiline(TextareaProps),
    SingleLine(InputProps),
}

impl ControlPlan {
    pub fn strategy(&self) -> RenderStrategy {
        match self {
            Self::Delegated { .. } => RenderStrategy::Delegated,
            Self::Multiline(_) => RenderStrategy::Multiline,
            Self::SingleLine(props) => RenderStrategy::SingleLine(props.input_type.clone()),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorRow {
    pub icon: &'static str,
    pub message: SharedString,
}

impl ErrorRow {
    pub fn new(message: SharedString) -> Self {
        Self {
            icon: ERROR,
            message,
        }
    }
}

/// Resolved layout of one field for a single render pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldPlan {
    pub margin_bottom: Spacing,
    pub header: Option<FieldHeader>,
    pub control: ControlPlan,
    pub hint: Option<SharedString>,
    pub errors: Vec<ErrorRow>,
}

impl FieldPlan {
    pub fn toggle(&self) -> Option<PasswordToggle> {
        self.header.as_ref().and_then(|header| header.toggle)
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|row| row.message.as_ref()).collect()
    }
}
