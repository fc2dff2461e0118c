// Labelled form input with an optional validation message
#![allow(non_snake_case)]
use dioxus::prelude::*;

/// A labelled `<input>` with an optional validation message.
///
/// The input id is derived from `name` so the label stays attached to it.
/// `on_input` receives the full value on every keystroke.
#[component]
pub fn FormInput(
    label: String,
    name: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    placeholder: Option<String>,
    #[props(default)] required: bool,
    error: Option<String>,
    on_input: Option<EventHandler<String>>,
) -> Element {
    let input_id = format!("field-{}", name);
    let placeholder = placeholder.unwrap_or_default();
    let invalid = error.is_some();
    let error_text = error.unwrap_or_default();
    let class = if invalid { "form-field form-field-invalid" } else { "form-field" };

    rsx! {
        div {
            class: "{class}",
            label {
                r#for: "{input_id}",
                "{label}"
                if required {
                    span { class: "form-required", " *" }
                }
            }
            input {
                id: "{input_id}",
                name: "{name}",
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                required: required,
                "aria-invalid": "{invalid}",
                oninput: move |evt: FormEvent| {
                    forward_input(evt.value(), on_input.as_ref().map(|handler| move |v: String| handler.call(v)));
                },
            }
            if invalid {
                p { class: "form-error", "{error_text}" }
            }
        }
    }
}

/// Passes the new field value to the handler, if one is attached.
fn forward_input(value: String, handler: Option<impl FnOnce(String)>) -> bool {
    match handler {
        Some(handler) => {
            handler(value);
            true
        }
        None => false,
    }
}
