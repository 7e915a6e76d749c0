use dioxus::prelude::*;
use types::FieldError;

/// A labelled input with its inline validation message underneath.
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    value: String,
    #[props(!optional)] error: Option<FieldError>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: id, "{label}" }
            input {
                id,
                name: id,
                class: if error.is_some() { "form-input form-input-invalid" } else { "form-input" },
                r#type: input_type,
                autocomplete,
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
            if let Some(err) = error {
                p { class: "form-error", "{err}" }
            }
        }
    }
}
