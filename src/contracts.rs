use gpui::SharedString;

use crate::form::FieldErrors;

/// Presentation surface shared by field-like builders, so a form layer can
/// decorate them without knowing the concrete control.
pub trait FieldLike: Sized {
    fn label(self, value: impl Into<SharedString>) -> Self;
    fn description(self, value: impl Into<SharedString>) -> Self;
    fn hint(self, value: impl Into<SharedString>) -> Self;
    fn errors(self, value: impl Into<FieldErrors>) -> Self;

    fn error(self, value: impl Into<SharedString>) -> Self {
        self.errors(crate::form::ValidationError::new(value))
    }
}

#[macro_export]
macro_rules! impl_field_like_via_methods {
    ($type:ty) => {
        impl $crate::contracts::FieldLike for $type {
            fn label(self, value: impl Into<gpui::SharedString>) -> Self {
                <$type>::label(self, value)
            }

            fn description(self, value: impl Into<gpui::SharedString>) -> Self {
                <$type>::description(self, value)
            }

            fn hint(self, value: impl Into<gpui::SharedString>) -> Self {
                <$type>::hint(self, value)
            }

            fn errors(self, value: impl Into<$crate::form::FieldErrors>) -> Self {
                <$type>::errors(self, value)
            }
        }
    };
}
