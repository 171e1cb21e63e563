mod adapter;
mod registry;
mod validation;

pub use adapter::{
    BoundControl, DelegatedInput, FieldBinding, FormAdapter, RegisterAdapter, RegisterFn,
    RegistrationGate, SetValueFn, ValueExtractor, first_value,
};
pub use registry::{FormError, FormRegistry, FormResult};
pub use validation::{FieldErrors, ValidationError};
