pub mod components;
pub mod contracts;
pub mod form;
pub mod icon;
pub mod id;
pub mod prelude;
pub mod provider;
pub mod style;
pub mod theme;

pub use provider::FieldProvider;

#[cfg(test)]
mod test_public_api;
