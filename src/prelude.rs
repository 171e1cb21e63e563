pub use crate::FieldProvider;
pub use crate::components::{
    Field, FieldText, Icon, InputAttributes, InputKind, InputPrimitives, InputProps,
    OutlinePrimitives, PasswordVisibility, TextareaProps,
};
pub use crate::contracts::FieldLike;
pub use crate::form::{
    BoundControl, DelegatedInput, FieldErrors, FormAdapter, FormRegistry, RegisterAdapter,
    ValidationError,
};
pub use crate::style::Spacing;
pub use crate::theme::{ColorToken, FieldTheme};
