use crate::icon::{EYE_OFF, EYE_OPEN};

use super::primitives::InputKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PasswordVisibility {
    Hidden,
    Visible,
}

impl PasswordVisibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Hidden => EYE_OPEN,
            Self::Visible => EYE_OFF,
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Self::Hidden => "SHOW",
            Self::Visible => "HIDE",
        }
    }

    fn variant(self) -> InputKind {
        match self {
            Self::Hidden => InputKind::Password,
            Self::Visible => InputKind::Text,
        }
    }
}

/// Variant a field renders right now.
///
/// Only password fields ever move away from their declared kind, and only
/// through [`VisibilityState::toggle`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VisibilityState {
    declared: Option<InputKind>,
    current: Option<InputKind>,
}

impl VisibilityState {
    pub fn new(declared: Option<InputKind>) -> Self {
        Self {
            current: declared.clone(),
            declared,
        }
    }

    pub fn declared(&self) -> Option<&InputKind> {
        self.declared.as_ref()
    }

    pub fn current_variant(&self) -> Option<&InputKind> {
        self.current.as_ref()
    }

    pub fn is_password_field(&self) -> bool {
        self.declared.as_ref().is_some_and(InputKind::is_password)
    }

    pub fn password_visibility(&self) -> Option<PasswordVisibility> {
        if !self.is_password_field() {
            return None;
        }
        Some(match self.current {
            Some(InputKind::Password) => PasswordVisibility::Hidden,
            _ => PasswordVisibility::Visible,
        })
    }

    /// Flips a password field between hidden and visible. Returns `false`
    /// and leaves the state alone for every other declared kind.
    pub fn toggle(&mut self) -> bool {
        let Some(visibility) = self.password_visibility() else {
            return false;
        };
        self.current = Some(visibility.toggled().variant());
        true
    }
}
