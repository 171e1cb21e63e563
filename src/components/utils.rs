use gpui::SharedString;

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(text: &str) -> SharedString {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().into(),
        None => SharedString::default(),
    }
}

pub(crate) fn non_empty(value: Option<&SharedString>) -> Option<SharedString> {
    value.filter(|text| !text.is_empty()).cloned()
}
