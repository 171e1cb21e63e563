mod field;
mod field_plan;
mod field_state;
mod icon;
mod primitives;
mod text;
mod utils;

#[cfg(test)]
mod test_field_behavior;

pub use field::Field;
pub use field_plan::{
    ControlPlan, ErrorRow, FieldHeader, FieldLabel, FieldPlan, PasswordToggle, RenderStrategy,
    resolve_margin_bottom, select_strategy,
};
pub use field_state::{PasswordVisibility, VisibilityState};
pub use icon::Icon;
pub use primitives::{
    AttributeRejected, ExtraAttributes, InputAttributes, InputKind, InputPrimitives, InputProps,
    MAX_EXTRA_ATTRIBUTES, OutlinePrimitives, TextareaProps,
};
pub use text::FieldText;
pub use utils::capitalize;
