use gpui::{IntoElement, ParentElement, SharedString};

use super::{ControlPlan, Field, FieldPlan, InputKind, PasswordVisibility, RenderStrategy};
use crate::contracts::FieldLike;
use crate::form::{DelegatedInput, FieldErrors, FormRegistry, ValidationError};
use crate::style::Spacing;
use crate::theme::FieldTheme;

fn default_margin() -> Spacing {
    FieldTheme::default().default_margin_bottom
}

fn delegated() -> DelegatedInput {
    DelegatedInput::new(|control, _, _| {
        gpui::div()
            .child(control.name().clone())
            .into_any_element()
    })
}

fn render_pass(field: &Field, toggles: usize) -> FieldPlan {
    let mut state = field.initial_state();
    for _ in 0..toggles {
        state.toggle();
    }
    field.plan(&state, default_margin())
}

#[test]
fn error_row_count_matches_normalized_length() {
    let cases: Vec<(FieldErrors, usize)> = vec![
        (FieldErrors::Absent, 0),
        (ValidationError::new("one").into(), 1),
        (FieldErrors::Many(Vec::new()), 0),
        (
            vec![
                ValidationError::new("a"),
                ValidationError::new("a"),
                ValidationError::new("b"),
            ]
            .into(),
            3,
        ),
    ];
    for (errors, expected) in cases {
        let plan = render_pass(&Field::new("f").errors(errors.clone()), 0);
        assert_eq!(plan.errors.len(), expected, "{errors:?}");
        assert_eq!(plan.errors.len(), errors.normalize().len());
    }
}

#[test]
fn password_example_before_and_after_toggle() {
    let field = Field::new("pwd")
        .label("Password")
        .input_kind("password")
        .errors(vec![ValidationError::new("too short")]);

    let hidden = render_pass(&field, 0);
    let ControlPlan::SingleLine(props) = &hidden.control else {
        panic!("expected single-line control");
    };
    assert!(props.is_masked());
    let toggle = hidden.toggle().expect("password toggle");
    assert_eq!(toggle.visibility, PasswordVisibility::Hidden);
    assert_eq!((toggle.icon(), toggle.caption()), ("eye-open", "SHOW"));
    assert_eq!(hidden.error_messages(), vec!["Too short"]);

    let visible = render_pass(&field, 1);
    let ControlPlan::SingleLine(props) = &visible.control else {
        panic!("expected single-line control");
    };
    assert_eq!(props.input_type, Some(InputKind::Text));
    assert!(!props.is_masked());
    let toggle = visible.toggle().expect("password toggle");
    assert_eq!((toggle.icon(), toggle.caption()), ("eye-off", "HIDE"));
    assert_eq!(visible.errors, hidden.errors);
}

#[test]
fn double_toggle_restores_initial_plan() {
    let field = Field::new("pwd").label("Password").input_kind("password");
    assert_eq!(render_pass(&field, 2), render_pass(&field, 0));
    assert_eq!(render_pass(&field, 3), render_pass(&field, 1));
    assert_ne!(render_pass(&field, 1), render_pass(&field, 0));
}

#[test]
fn toggle_sits_in_header_next_to_label() {
    let plan = render_pass(&Field::new("pwd").label("Password").input_kind("password"), 0);
    let header = plan.header.expect("header");
    assert_eq!(header.label.map(|label| label.text), Some("Password".into()));
    assert!(header.toggle.is_some());
}

#[test]
fn password_field_without_header_text_has_no_toggle() {
    let field = Field::new("pwd").input_kind("password");
    for toggles in 0..2 {
        let plan = render_pass(&field, toggles);
        assert_eq!(plan.header, None);
        assert_eq!(plan.toggle(), None);
    }
    let ControlPlan::SingleLine(props) = render_pass(&field, 0).control else {
        panic!("expected single-line control");
    };
    assert!(props.is_masked());

    let described = render_pass(&field.description("At least 8 characters"), 0);
    let header = described.header.expect("header");
    assert!(header.label.is_none());
    assert!(header.toggle.is_some());
}

#[test]
fn only_password_fields_get_a_toggle() {
    for kind in ["text", "email", "textarea", "number"] {
        let plan = render_pass(&Field::new("f").label("Label").input_kind(kind), 1);
        assert!(plan.toggle().is_none(), "{kind} must not have a toggle");
    }
    assert!(render_pass(&Field::new("f").label("Label"), 0).toggle().is_none());
}

#[test]
fn delegated_renderer_replaces_primitives_for_every_kind() {
    for kind in ["password", "textarea", "text", "email"] {
        let field = Field::new("country").input_kind(kind).render_as(delegated());
        for toggles in 0..2 {
            let plan = render_pass(&field, toggles);
            assert_eq!(plan.control.strategy(), RenderStrategy::Delegated);
            let ControlPlan::Delegated { id, name, .. } = plan.control else {
                panic!("expected delegated control");
            };
            assert_eq!((id.as_ref(), name.as_ref()), ("country", "country"));
        }
    }
}

#[test]
fn margin_rules_apply_to_whole_field() {
    let inline_multi = render_pass(
        &Field::new("f")
            .inline(true)
            .multi(true)
            .margin_bottom(Spacing(7)),
        0,
    );
    assert_eq!(inline_multi.margin_bottom, Spacing::ZERO);

    let multi = render_pass(&Field::new("f").multi(true).margin_bottom(Spacing(7)), 0);
    assert_eq!(multi.margin_bottom, Spacing(4));

    let custom = render_pass(&Field::new("f").margin_bottom(Spacing(1)), 0);
    assert_eq!(custom.margin_bottom, Spacing(1));

    let default = render_pass(&Field::new("f"), 0);
    assert_eq!(default.margin_bottom, default_margin());
}

#[test]
fn non_password_variant_is_fixed_for_the_lifetime() {
    let field = Field::new("mail").input_kind("email");
    let mut state = field.initial_state();
    for _ in 0..4 {
        assert!(!state.toggle());
        let ControlPlan::SingleLine(props) = field.plan(&state, default_margin()).control else {
            panic!("expected single-line control");
        };
        assert_eq!(props.input_type, Some(InputKind::Other("email".into())));
    }
}

#[test]
fn registry_errors_flow_into_field_rows() {
    let registry = FormRegistry::new();
    registry.register("email").expect("register");
    registry
        .set_errors(
            "email",
            vec![
                ValidationError::new("is required"),
                ValidationError::new("must contain @"),
            ],
        )
        .expect("set errors");

    let field = registry
        .apply_presentation("email", Field::new("email").label("Email"))
        .expect("presentation");
    let plan = render_pass(&field, 0);
    assert_eq!(plan.error_messages(), vec!["Is required", "Must contain @"]);
}

#[test]
fn field_like_error_sets_single_row() {
    let field = Field::new("name").error("cannot be blank");
    let plan = render_pass(&field, 0);
    assert_eq!(plan.error_messages(), vec!["Cannot be blank"]);
}

#[test]
fn registry_without_errors_leaves_field_untouched() {
    let registry = FormRegistry::new();
    registry.register("email").expect("register");
    let field = registry
        .apply_presentation("email", Field::new("email").error("stale"))
        .expect("presentation");
    let messages: Vec<SharedString> = render_pass(&field, 0)
        .errors
        .into_iter()
        .map(|row| row.message)
        .collect();
    assert_eq!(messages, vec![SharedString::from("Stale")]);
}
