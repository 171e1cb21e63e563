use std::rc::Rc;

use gpui::{
    AnyElement, App, Entity, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::form::{
    DelegatedInput, FieldBinding, FieldErrors, FormAdapter, RegisterFn, RegistrationGate,
    SetValueFn, first_value,
};
use crate::id::{field_slot_id, stable_auto_id};
use crate::provider::FieldProvider;
use crate::style::{Size, Spacing};
use crate::theme::{ColorToken, FieldTheme};

use super::Icon;
use super::field_plan::{
    ControlPlan, ErrorRow, FieldHeader, FieldLabel, FieldPlan, PasswordToggle, RenderStrategy,
    resolve_margin_bottom, select_strategy,
};
use super::field_state::VisibilityState;
use super::primitives::{InputAttributes, InputKind, InputPrimitives, InputProps, TextareaProps};
use super::text::FieldText;
use super::utils::{capitalize, non_empty};

/// Composite form field: label/description header, the input control, a hint
/// line and one row per validation error.
///
/// Password fields get a show/hide toggle in the header. The visible variant
/// lives in keyed element state, so it survives re-renders and starts hidden
/// again once the field leaves the tree.
#[derive(IntoElement)]
pub struct Field {
    key: SharedString,
    name: SharedString,
    label: Option<SharedString>,
    description: Option<SharedString>,
    hint: Option<SharedString>,
    render_as: Option<DelegatedInput>,
    register: Option<RegisterFn>,
    set_value: Option<SetValueFn>,
    auto_complete: SharedString,
    multi: bool,
    inline: bool,
    errors: FieldErrors,
    margin_bottom: Option<Spacing>,
    input_kind: Option<InputKind>,
    attributes: InputAttributes,
    primitives: Option<Rc<dyn InputPrimitives>>,
    adapter: Option<Rc<dyn FormAdapter>>,
}

impl Field {
    #[track_caller]
    pub fn new(name: impl Into<SharedString>) -> Self {
        let name = name.into();
        let key = if name.is_empty() {
            stable_auto_id("field")
        } else {
            name.clone()
        };
        Self {
            key,
            name,
            label: None,
            description: None,
            hint: None,
            render_as: None,
            register: None,
            set_value: None,
            auto_complete: "off".into(),
            multi: false,
            inline: false,
            errors: FieldErrors::Absent,
            margin_bottom: None,
            input_kind: None,
            attributes: InputAttributes::default(),
            primitives: None,
            adapter: None,
        }
    }

    pub fn label(mut self, value: impl Into<SharedString>) -> Self {
        self.label = Some(value.into());
        self
    }

    pub fn description(mut self, value: impl Into<SharedString>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn hint(mut self, value: impl Into<SharedString>) -> Self {
        self.hint = Some(value.into());
        self
    }

    /// Renders through `renderer` instead of the built-in primitives.
    pub fn render_as(mut self, renderer: DelegatedInput) -> Self {
        self.render_as = Some(renderer);
        self
    }

    pub fn register(mut self, register: RegisterFn) -> Self {
        self.register = Some(register);
        self
    }

    pub fn set_value(mut self, set_value: SetValueFn) -> Self {
        self.set_value = Some(set_value);
        self
    }

    pub fn auto_complete(mut self, value: impl Into<SharedString>) -> Self {
        self.auto_complete = value.into();
        self
    }

    pub fn multi(mut self, value: bool) -> Self {
        self.multi = value;
        self
    }

    pub fn inline(mut self, value: bool) -> Self {
        self.inline = value;
        self
    }

    pub fn errors(mut self, value: impl Into<FieldErrors>) -> Self {
        self.errors = value.into();
        self
    }

    pub fn margin_bottom(mut self, value: impl Into<Spacing>) -> Self {
        self.margin_bottom = Some(value.into());
        self
    }

    pub fn input_kind(mut self, value: impl Into<InputKind>) -> Self {
        self.input_kind = Some(value.into());
        self
    }

    pub fn attributes(mut self, value: InputAttributes) -> Self {
        self.attributes = value;
        self
    }

    pub fn placeholder(mut self, value: impl Into<SharedString>) -> Self {
        self.attributes.placeholder = Some(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.attributes.value = Some(value.into());
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.attributes.disabled = value;
        self
    }

    pub fn read_only(mut self, value: bool) -> Self {
        self.attributes.read_only = value;
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.attributes.max_length = Some(value);
        self
    }

    pub fn auto_focus(mut self, value: bool) -> Self {
        self.attributes.auto_focus = value;
        self
    }

    /// Forwards an extra attribute to the input primitive. Keys the field
    /// owns (`type`, `name`, `id`) and entries past the bound are dropped.
    pub fn attribute(
        mut self,
        key: impl Into<SharedString>,
        value: impl Into<SharedString>,
    ) -> Self {
        let key = key.into();
        if let Err(rejected) = self.attributes.extra.insert(key.clone(), value) {
            tracing::warn!(field = %self.name, attribute = %key, %rejected, "attribute dropped");
        }
        self
    }

    pub fn primitives(mut self, primitives: impl InputPrimitives + 'static) -> Self {
        self.primitives = Some(Rc::new(primitives));
        self
    }

    pub fn adapter(mut self, adapter: impl FormAdapter + 'static) -> Self {
        self.adapter = Some(Rc::new(adapter));
        self
    }

    pub fn name(&self) -> &SharedString {
        &self.name
    }

    /// Fresh visibility state for this field's declared kind.
    pub fn initial_state(&self) -> VisibilityState {
        VisibilityState::new(self.input_kind.clone())
    }

    /// Resolves the layout for one render pass given the current visibility
    /// state and the container's default bottom margin.
    pub fn plan(&self, state: &VisibilityState, default_margin_bottom: Spacing) -> FieldPlan {
        let errors = self.errors.clone().normalize();

        let toggle = self
            .input_kind
            .as_ref()
            .filter(|kind| kind.is_password())
            .and_then(|_| state.password_visibility())
            .map(|visibility| PasswordToggle { visibility });
        let label = non_empty(self.label.as_ref()).map(|text| FieldLabel {
            text,
            for_id: self.name.clone(),
        });
        let description = non_empty(self.description.as_ref());
        let header = (label.is_some() || description.is_some()).then(|| FieldHeader {
            label,
            toggle,
            description,
        });

        let strategy = select_strategy(self.render_as.is_some(), state.current_variant());
        tracing::trace!(field = %self.name, ?strategy, "field strategy selected");
        let control = match strategy {
            RenderStrategy::Delegated => ControlPlan::Delegated {
                id: self.name.clone(),
                name: self.name.clone(),
                attributes: self.attributes.clone(),
            },
            RenderStrategy::Multiline => ControlPlan::Multiline(TextareaProps {
                id: self.name.clone(),
                name: self.name.clone(),
                attributes: self.attributes.clone(),
            }),
            RenderStrategy::SingleLine(input_type) => ControlPlan::SingleLine(InputProps {
                id: self.name.clone(),
                name: self.name.clone(),
                auto_complete: self.auto_complete.clone(),
                attributes: self.attributes.clone(),
                input_type,
            }),
        };

        FieldPlan {
            margin_bottom: resolve_margin_bottom(
                self.inline,
                self.multi,
                self.margin_bottom,
                default_margin_bottom,
            ),
            header,
            control,
            hint: non_empty(self.hint.as_ref()),
            errors: errors
                .iter()
                .map(|error| ErrorRow::new(capitalize(error.message())))
                .collect(),
        }
    }

    fn state_key(&self) -> SharedString {
        let kind = self.input_kind.as_ref().map_or("unset", InputKind::as_str);
        field_slot_id(&self.key, &format!("visibility-{kind}"))
    }

    fn render_header(
        key: &SharedString,
        header: FieldHeader,
        state: Entity<VisibilityState>,
        theme: &FieldTheme,
    ) -> impl IntoElement {
        let toggle = header
            .toggle
            .map(|toggle| Self::render_toggle(key, toggle, state, theme));
        let label = header.label.map(|label| {
            FieldText::new(label.text)
                .with_id(field_slot_id(&label.for_id, "label"))
                .weight(FontWeight::MEDIUM)
        });

        let row = div()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .children(label)
            .children(toggle);

        let description = header.description.map(|text| {
            FieldText::new(text)
                .with_size(Size::Sm)
                .tone(ColorToken::Muted)
                .mt(theme.spacing_px(theme.row_gap))
        });

        div()
            .flex()
            .flex_col()
            .mb(theme.spacing_px(theme.header_margin_bottom))
            .child(row)
            .children(description)
    }

    fn render_toggle(
        key: &SharedString,
        toggle: PasswordToggle,
        state: Entity<VisibilityState>,
        theme: &FieldTheme,
    ) -> impl IntoElement {
        let field = key.clone();
        div()
            .id(field_slot_id(key, "password-toggle"))
            .flex()
            .flex_row()
            .items_center()
            .cursor_pointer()
            .hover(|style| style.opacity(0.8))
            .on_click(move |_, _window, cx| {
                state.update(cx, |state, cx| {
                    if state.toggle() {
                        tracing::debug!(
                            field = %field,
                            visibility = ?state.password_visibility(),
                            "password visibility toggled"
                        );
                        cx.notify();
                    }
                });
            })
            .child(
                Icon::named(toggle.icon())
                    .size(theme.icon_size)
                    .color(theme.color(ColorToken::Primary)),
            )
            .child(
                FieldText::new(toggle.caption())
                    .with_size(Size::Sm)
                    .weight(FontWeight::SEMIBOLD)
                    .tone(ColorToken::Primary)
                    .ml(theme.spacing_px(Spacing(1)))
                    .w(px(theme.toggle_caption_width))
                    .text_right(),
            )
    }

    fn render_error(row: ErrorRow, theme: &FieldTheme) -> impl IntoElement {
        div()
            .flex()
            .flex_row()
            .items_start()
            .mt(theme.spacing_px(theme.row_gap))
            .child(
                Icon::named(row.icon)
                    .size(theme.icon_size)
                    .color(theme.color(ColorToken::Danger))
                    .flex_shrink_0()
                    .mt(theme.spacing_px(Spacing(1))),
            )
            .child(
                FieldText::new(row.message)
                    .tone(ColorToken::Danger)
                    .ml(theme.spacing_px(theme.row_gap)),
            )
    }
}

impl RenderOnce for Field {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        if self.name.is_empty() {
            tracing::debug!(key = %self.key, "field has no name, label association is lost");
        }

        let theme = FieldProvider::theme(cx);
        let initial = self.initial_state();
        let state = window.use_keyed_state(self.state_key(), cx, move |_, _| initial);
        let plan = self.plan(state.read(cx), theme.default_margin_bottom);

        let control: AnyElement = match (plan.control, self.render_as) {
            (ControlPlan::Delegated { id, name, attributes }, Some(renderer)) => {
                let adapter = self.adapter.unwrap_or_else(|| FieldProvider::adapter(cx));
                let gate = window.use_keyed_state(
                    field_slot_id(&self.key, "registration"),
                    cx,
                    |_, _| RegistrationGate::default(),
                );
                let register = gate.update(cx, |gate, _| gate.admit(self.register));
                let binding = FieldBinding {
                    id,
                    name,
                    register,
                    set_value: self.set_value,
                    extract_value: first_value,
                    attributes,
                };
                adapter.bind(renderer, binding).render(window, cx)
            }
            (ControlPlan::Multiline(props), _) => self
                .primitives
                .unwrap_or_else(|| FieldProvider::primitives(cx))
                .multi_line(props, window, cx),
            (ControlPlan::SingleLine(props), _) => self
                .primitives
                .unwrap_or_else(|| FieldProvider::primitives(cx))
                .single_line(props, window, cx),
            (ControlPlan::Delegated { .. }, None) => gpui::Empty.into_any_element(),
        };

        let header = plan
            .header
            .map(|header| Self::render_header(&self.key, header, state, &theme));
        let hint = plan.hint.map(|hint| {
            FieldText::new(hint)
                .with_size(Size::Xs)
                .tone(ColorToken::Muted)
                .mt(theme.spacing_px(theme.row_gap))
        });
        let errors = plan
            .errors
            .into_iter()
            .map(|row| Self::render_error(row, &theme));

        div()
            .flex()
            .flex_col()
            .flex_1()
            .mb(theme.spacing_px(plan.margin_bottom))
            .children(header)
            .child(div().flex().flex_row().child(control))
            .children(hint)
            .children(errors)
    }
}

crate::impl_field_like_via_methods!(Field);
