use std::rc::Rc;

use gpui::{AnyElement, App, SharedString, Window};

use crate::components::InputAttributes;

/// Registers a field name with the form layer.
pub type RegisterFn = Rc<dyn Fn(&str)>;
/// Writes a field value into the form layer; `None` clears it.
pub type SetValueFn = Rc<dyn Fn(&str, Option<SharedString>)>;
/// Turns the raw change payload of a delegated input into a field value.
pub type ValueExtractor = fn(&[SharedString]) -> Option<SharedString>;

type DelegatedRenderFn = dyn Fn(&BoundControl, &mut Window, &mut App) -> AnyElement;

/// The payload is treated as an ordered sequence; the value is its first
/// element.
pub fn first_value(payload: &[SharedString]) -> Option<SharedString> {
    payload.first().cloned()
}

/// Custom input implementation that replaces the built-in primitives.
#[derive(Clone)]
pub struct DelegatedInput {
    render: Rc<DelegatedRenderFn>,
}

impl DelegatedInput {
    pub fn new(
        render: impl Fn(&BoundControl, &mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        Self {
            render: Rc::new(render),
        }
    }
}

#[derive(Clone)]
pub struct FieldBinding {
    pub id: SharedString,
    pub name: SharedString,
    pub register: Option<RegisterFn>,
    pub set_value: Option<SetValueFn>,
    pub extract_value: ValueExtractor,
    pub attributes: InputAttributes,
}

/// A delegated input wired to its form capabilities.
#[derive(Clone)]
pub struct BoundControl {
    renderer: DelegatedInput,
    binding: FieldBinding,
}

impl BoundControl {
    pub fn new(renderer: DelegatedInput, binding: FieldBinding) -> Self {
        Self { renderer, binding }
    }

    pub fn id(&self) -> &SharedString {
        &self.binding.id
    }

    pub fn name(&self) -> &SharedString {
        &self.binding.name
    }

    pub fn attributes(&self) -> &InputAttributes {
        &self.binding.attributes
    }

    /// Feeds a raw change payload through the extractor into set-value.
    pub fn emit_change(&self, payload: &[SharedString]) {
        let value = (self.binding.extract_value)(payload);
        match &self.binding.set_value {
            Some(set_value) => set_value(&self.binding.name, value),
            None => tracing::trace!(
                field = %self.binding.name,
                "change dropped, no set-value capability bound"
            ),
        }
    }

    pub fn render(&self, window: &mut Window, cx: &mut App) -> AnyElement {
        (self.renderer.render)(self, window, cx)
    }
}

/// Binds delegated renderers to a form-state implementation.
pub trait FormAdapter {
    /// Called on every render pass of a delegated field. `binding.register`
    /// is only present on the first pass after the field mounts.
    fn bind(&self, renderer: DelegatedInput, binding: FieldBinding) -> BoundControl;
}

/// Lets the register capability through once per field mount.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RegistrationGate {
    registered: bool,
}

impl RegistrationGate {
    pub fn admit(&mut self, register: Option<RegisterFn>) -> Option<RegisterFn> {
        if self.registered {
            return None;
        }
        self.registered = register.is_some();
        register
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }
}

/// Registers the field name when the binding carries a register capability
/// and forwards changes to the set-value capability.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegisterAdapter;

impl FormAdapter for RegisterAdapter {
    fn bind(&self, renderer: DelegatedInput, binding: FieldBinding) -> BoundControl {
        if let Some(register) = &binding.register {
            register(&binding.name);
        }
        BoundControl::new(renderer, binding)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use gpui::IntoElement;

    use super::*;
    use crate::form::FormRegistry;

    fn noop_renderer() -> DelegatedInput {
        DelegatedInput::new(|_, _, _| gpui::Empty.into_any_element())
    }

    fn binding(
        name: &str,
        register: Option<RegisterFn>,
        set_value: Option<SetValueFn>,
    ) -> FieldBinding {
        FieldBinding {
            id: name.to_string().into(),
            name: name.to_string().into(),
            register,
            set_value,
            extract_value: first_value,
            attributes: InputAttributes::default(),
        }
    }

    #[test]
    fn first_value_takes_index_zero() {
        let payload: Vec<SharedString> = vec!["a".into(), "b".into()];
        assert_eq!(first_value(&payload), Some("a".into()));
        assert_eq!(first_value(&[]), None);
    }

    #[test]
    fn bind_registers_field_name() {
        let registry = FormRegistry::new();
        let _bound = RegisterAdapter.bind(
            noop_renderer(),
            binding("country", Some(registry.register_fn()), None),
        );
        assert_eq!(registry.is_registered("country"), Ok(true));
    }

    #[test]
    fn gate_registers_once_per_mount() {
        let calls = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = calls.clone();
        let register: RegisterFn =
            Rc::new(move |name: &str| sink.borrow_mut().push(name.to_string()));

        let mut gate = RegistrationGate::default();
        for _ in 0..3 {
            let _bound = RegisterAdapter.bind(
                noop_renderer(),
                binding("country", gate.admit(Some(register.clone())), None),
            );
        }
        assert!(gate.is_registered());
        assert_eq!(calls.borrow().as_slice(), &["country".to_string()]);

        let mut remounted = RegistrationGate::default();
        let _bound = RegisterAdapter.bind(
            noop_renderer(),
            binding("country", remounted.admit(Some(register)), None),
        );
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn gate_waits_for_a_register_capability() {
        let mut gate = RegistrationGate::default();
        assert!(gate.admit(None).is_none());
        assert!(!gate.is_registered());

        let register: RegisterFn = Rc::new(|_: &str| {});
        assert!(gate.admit(Some(register.clone())).is_some());
        assert!(gate.admit(Some(register)).is_none());
    }

    #[test]
    fn emit_change_writes_extracted_value() {
        let registry = FormRegistry::new();
        let bound = RegisterAdapter.bind(
            noop_renderer(),
            binding(
                "country",
                Some(registry.register_fn()),
                Some(registry.set_value_fn()),
            ),
        );

        bound.emit_change(&["nl".into(), "ignored".into()]);
        assert_eq!(registry.value("country"), Ok(Some("nl".into())));

        bound.emit_change(&[]);
        assert_eq!(registry.value("country"), Ok(None));
    }

    #[test]
    fn emit_change_passes_field_name_to_set_value() {
        let seen = Rc::new(RefCell::new(Vec::<(String, Option<SharedString>)>::new()));
        let sink = seen.clone();
        let set_value: SetValueFn = Rc::new(move |name, value| {
            sink.borrow_mut().push((name.to_string(), value));
        });
        let bound = RegisterAdapter.bind(noop_renderer(), binding("tags", None, Some(set_value)));

        bound.emit_change(&["rust".into()]);
        assert_eq!(
            seen.borrow().as_slice(),
            &[("tags".to_string(), Some(SharedString::from("rust")))]
        );
    }

    #[test]
    fn emit_change_without_set_value_is_silent() {
        let bound = RegisterAdapter.bind(noop_renderer(), binding("notes", None, None));
        bound.emit_change(&["text".into()]);
        assert_eq!(bound.name().as_ref(), "notes");
    }
}
