use gpui::{IntoElement, div};

use crate::prelude::*;

fn into_any(element: impl IntoElement) -> gpui::AnyElement {
    element.into_any_element()
}

fn assert_render_once<T: gpui::RenderOnce>() {}

#[test]
fn components_are_render_once() {
    assert_render_once::<Field>();
    assert_render_once::<FieldText>();
    assert_render_once::<Icon>();
}

#[test]
fn prelude_smoke_builds_fields() {
    let registry = FormRegistry::new();

    let _ = into_any(
        Field::new("email")
            .label("Email")
            .hint("We never share it")
            .input_kind("email")
            .placeholder("you@example.com"),
    );
    let _ = into_any(
        Field::new("password")
            .label("Password")
            .description("At least 12 characters")
            .input_kind("password")
            .error("too short"),
    );
    let _ = into_any(Field::new("bio").input_kind(InputKind::Textarea).inline(true));
    let _ = into_any(
        Field::new("country")
            .render_as(DelegatedInput::new(|_, _, _| div().into_any_element()))
            .register(registry.register_fn())
            .set_value(registry.set_value_fn())
            .adapter(RegisterAdapter)
            .multi(true),
    );
    let _ = into_any(Icon::named("eye-open").size(16.0));
    let _ = into_any(FieldText::new("caption").tone(ColorToken::Muted));
}

#[test]
fn provider_builder_accepts_configuration() {
    let _provider = FieldProvider::new()
        .set_theme(|theme| theme.default_margin_bottom(Spacing(3)).icon_size(18.0))
        .set_primitives(OutlinePrimitives)
        .set_adapter(RegisterAdapter);
    let _ = FieldTheme::default();
    let _ = FieldErrors::from(ValidationError::new("x"));
    let _ = PasswordVisibility::Hidden;
}
