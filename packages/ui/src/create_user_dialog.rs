use api::{submit_create, CreateError};
use dioxus::prelude::*;
use store::{Field, FieldErrors, RuleSet, UserDraft};

use crate::components::{Button, ButtonVariant, FieldError, Input, Label};
use crate::views::ModalOverlay;
use crate::UserList;

/// Modal form for a new user.
///
/// The draft lives in the caller, so a cancelled dialog keeps its input until
/// the caller resets it. Validation runs against `rules` on submit; a draft
/// that fails it never reaches the network. The dialog stays open while a
/// request is in flight.
#[component]
pub fn CreateUserDialog(
    list: UserList,
    draft: Signal<UserDraft>,
    rules: RuleSet,
    #[props(default = "Create New User".to_string())] title: String,
    #[props(default = "Create".to_string())] submit_label: String,
    #[props(default = "Creating...".to_string())] busy_label: String,
    #[props(default)] submit_variant: ButtonVariant,
    /// Show the derived, read-only username.
    #[props(default)]
    show_username: bool,
    on_close: EventHandler<()>,
) -> Element {
    let mut draft = draft;
    let mut errors = use_signal(FieldErrors::new);
    let mut api_error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let form_rules = rules.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);
        api_error.set(None);
        let rules = form_rules.clone();
        let current = draft();
        list.spawn(async move {
            match submit_create(&list.client(), &current, &rules).await {
                Ok(user) => {
                    errors.set(FieldErrors::new());
                    draft.set(UserDraft::default());
                    busy.set(false);
                    list.created(user);
                    on_close.call(());
                }
                Err(CreateError::Invalid(field_errors)) => {
                    errors.set(field_errors);
                    busy.set(false);
                }
                Err(CreateError::Api(e)) => {
                    let message = e.to_string();
                    api_error.set(Some(message.clone()));
                    busy.set(false);
                    list.create_failed(&message);
                }
            }
        });
    };

    let fields = rules.fields();

    rsx! {
        ModalOverlay {
            title: title,
            on_close: move |_| {
                if !busy() {
                    on_close.call(());
                }
            },
            if let Some(message) = api_error() {
                p { class: "dialog-error", "{message}" }
            }
            form {
                class: "dialog-form",
                novalidate: true,
                onsubmit: handle_submit,
                for field in fields {
                    DraftField {
                        key: "{field:?}",
                        field: field,
                        value: draft.read().get(field).to_string(),
                        required: rules.is_required(field),
                        error: errors.read().get(&field).cloned(),
                        on_input: move |value: String| draft.write().set(field, value),
                    }
                    if show_username && field == Field::Email {
                        div {
                            class: "form-field",
                            Label { html_for: "draft-username", "Username" }
                            Input {
                                id: "draft-username",
                                value: draft.read().username.clone(),
                                readonly: true,
                            }
                        }
                    }
                }
                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: submit_variant,
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "{busy_label}" } else { "{submit_label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn DraftField(
    field: Field,
    value: String,
    required: bool,
    error: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    let id = format!("draft-{field:?}").to_lowercase();
    let kind = match field {
        Field::Email => "email",
        _ => "text",
    };

    rsx! {
        div {
            class: "form-field",
            Label { html_for: id.clone(), "{field.label()}" }
            Input {
                id: id,
                r#type: "{kind}",
                value: value,
                required: required,
                invalid: error.is_some(),
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            FieldError { message: error }
        }
    }
}
