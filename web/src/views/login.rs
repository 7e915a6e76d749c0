use dioxus::prelude::*;
use types::{AdminGate, LoginErrors, LoginForm, login};
use ui::FormField;

#[component]
pub fn Login(mut gate: Signal<AdminGate>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(LoginErrors::default);
    // Fields re-validate as they change only once a submit has been tried.
    let mut attempted = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        attempted.set(true);

        let form = LoginForm::new(email.read().clone(), password.read().clone());
        let result = gate.write().submit(&form);
        errors.set(result.err().unwrap_or_default());
    };

    rsx! {
        h1 { class: "page-title", "Admin Panel" }
        div { class: "card login-card",
            h2 { class: "login-title", "Admin Login" }
            form {
                novalidate: true,
                onsubmit: on_submit,
                FormField {
                    id: "email",
                    label: "Email",
                    input_type: "email",
                    autocomplete: "username",
                    value: email(),
                    error: errors.read().email,
                    oninput: move |value: String| {
                        if attempted() {
                            errors.write().email = login::validate_email(&value).err();
                        }
                        email.set(value);
                    },
                }
                FormField {
                    id: "password",
                    label: "Password",
                    input_type: "password",
                    autocomplete: "current-password",
                    value: password(),
                    error: errors.read().password,
                    oninput: move |value: String| {
                        if attempted() {
                            errors.write().password = login::validate_password(&value).err();
                        }
                        password.set(value);
                    },
                }
                button {
                    r#type: "submit",
                    class: "btn btn-block btn-purple",
                    "Login"
                }
            }
        }
    }
}
