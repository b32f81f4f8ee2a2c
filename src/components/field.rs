//! Labelled text input with an inline validation message.
//!
//! DESIGN
//! ======
//! The input is controlled: its value comes from the caller's state and
//! every keystroke is handed back through `on_input`. Error markup follows
//! ARIA conventions so screen readers announce the message.

use leptos::prelude::*;

use crate::state::login::Field;

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// Form fields rendered as text inputs. The remember-me checkbox is not one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextInput {
    Email,
    Password,
}

impl TextInput {
    pub fn field(self) -> Field {
        match self {
            Self::Email => Field::Email,
            Self::Password => Field::Password,
        }
    }

    /// `type` and `autocomplete` attribute values.
    fn attrs(self) -> (&'static str, &'static str) {
        match self {
            Self::Email => ("email", "email"),
            Self::Password => ("password", "current-password"),
        }
    }
}

#[component]
pub fn TextField(
    input: TextInput,
    label: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    error: Signal<Option<&'static str>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let id = input.field().name();
    let (input_type, autocomplete) = input.attrs();
    let error_id = format!("{id}-error");
    let described_by = {
        let error_id = error_id.clone();
        move || error.get().map(|_| error_id.clone())
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                id=id
                name=id
                type=input_type
                autocomplete=autocomplete
                class=move || if error.get().is_some() { "input input--error" } else { "input" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                aria-describedby=described_by
                required
            />
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <span id=error_id.clone() class="form__error" role="alert">
                                {message}
                            </span>
                        }
                    })
            }}
        </div>
    }
}
