use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gpui::SharedString;
use thiserror::Error;

use super::adapter::{RegisterFn, SetValueFn};
use super::validation::{FieldErrors, ValidationError};
use crate::contracts::FieldLike;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FormError {
    #[error("form state lock poisoned while {0}")]
    StatePoisoned(&'static str),
    #[error("field `{0}` is not registered")]
    UnknownField(String),
}

pub type FormResult<T> = Result<T, FormError>;

#[derive(Default)]
struct RegistryState {
    registered: BTreeSet<SharedString>,
    values: BTreeMap<SharedString, SharedString>,
    errors: BTreeMap<SharedString, Vec<ValidationError>>,
}

impl RegistryState {
    fn ensure_registered(&self, name: &str) -> FormResult<()> {
        if self.registered.contains(name) {
            Ok(())
        } else {
            Err(FormError::UnknownField(name.to_string()))
        }
    }
}

/// In-memory form store: registered names, current values and the errors
/// to display per field.
#[derive(Clone, Default)]
pub struct FormRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the name was not registered before.
    pub fn register(&self, name: &str) -> FormResult<bool> {
        let mut state = write_lock(&self.state, "registering field")?;
        Ok(state.registered.insert(name.to_string().into()))
    }

    pub fn is_registered(&self, name: &str) -> FormResult<bool> {
        Ok(read_lock(&self.state, "checking field registration")?
            .registered
            .contains(name))
    }

    pub fn set_value(&self, name: &str, value: Option<SharedString>) -> FormResult<()> {
        let mut state = write_lock(&self.state, "setting field value")?;
        state.ensure_registered(name)?;
        match value {
            Some(value) => {
                state.values.insert(name.to_string().into(), value);
            }
            None => {
                state.values.remove(name);
            }
        }
        Ok(())
    }

    pub fn value(&self, name: &str) -> FormResult<Option<SharedString>> {
        Ok(read_lock(&self.state, "reading field value")?
            .values
            .get(name)
            .cloned())
    }

    pub fn set_errors(&self, name: &str, errors: impl Into<FieldErrors>) -> FormResult<()> {
        let normalized = errors.into().normalize();
        let mut state = write_lock(&self.state, "setting field errors")?;
        state.ensure_registered(name)?;
        if normalized.is_empty() {
            state.errors.remove(name);
        } else {
            state.errors.insert(name.to_string().into(), normalized);
        }
        Ok(())
    }

    pub fn errors(&self, name: &str) -> FormResult<Vec<ValidationError>> {
        Ok(read_lock(&self.state, "reading field errors")?
            .errors
            .get(name)
            .cloned()
            .unwrap_or_default())
    }

    /// Drops values and errors; registrations stay.
    pub fn clear(&self) -> FormResult<()> {
        let mut state = write_lock(&self.state, "clearing form")?;
        state.values.clear();
        state.errors.clear();
        Ok(())
    }

    pub fn register_fn(&self) -> RegisterFn {
        let registry = self.clone();
        Rc::new(move |name| {
            if let Err(error) = registry.register(name) {
                tracing::warn!(field = name, %error, "field registration failed");
            }
        })
    }

    pub fn set_value_fn(&self) -> SetValueFn {
        let registry = self.clone();
        Rc::new(move |name, value| {
            if let Err(error) = registry.set_value(name, value) {
                tracing::warn!(field = name, %error, "field value update failed");
            }
        })
    }

    /// Pushes the stored errors of `name` into a field builder.
    pub fn apply_presentation<C>(&self, name: &str, component: C) -> FormResult<C>
    where
        C: FieldLike,
    {
        let errors = self.errors(name)?;
        if errors.is_empty() {
            return Ok(component);
        }
        Ok(component.errors(errors))
    }
}

fn read_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| FormError::StatePoisoned(context))
}

fn write_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| FormError::StatePoisoned(context))
}
