use crate::product::{Field, ProductType};
use leptos::ev::FocusEvent;
use leptos::html;
use leptos::prelude::*;

/// Inline validation message under a field, rendered only while the field is invalid.
#[component]
fn FieldError(field: Field, error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="field-error" id=format!("{}-error", field.id())>
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// A labeled text input.
///
/// ### Parameters
/// `field`: decides the label, id and name of the input
///
/// `error`: current validation message of the field
///
/// `node_ref`: lets the form read the live value on submit
///
/// `on_blur`: called with the field and the value it had when it lost focus
#[component]
pub fn TextField(
    field: Field,
    error: Signal<Option<String>>,
    node_ref: NodeRef<html::Input>,
    on_blur: Callback<(Field, String)>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=field.id()>{field.id()}</label>
            <input
                type="text"
                id=field.id()
                name=field.id()
                node_ref=node_ref
                on:blur=move |ev: FocusEvent| on_blur.run((field, event_target_value(&ev)))
            />
            <FieldError field error />
        </div>
    }
}

/// A labeled select with an empty option followed by every product type.
#[component]
pub fn SelectField(
    field: Field,
    error: Signal<Option<String>>,
    node_ref: NodeRef<html::Select>,
    on_blur: Callback<(Field, String)>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=field.id()>{field.id()}</label>
            <select
                id=field.id()
                name=field.id()
                node_ref=node_ref
                on:blur=move |ev: FocusEvent| on_blur.run((field, event_target_value(&ev)))
            >
                <option value="">""</option>
                {ProductType::ALL
                    .into_iter()
                    .map(|kind| view! { <option value=kind.as_str()>{kind.as_str()}</option> })
                    .collect_view()}
            </select>
            <FieldError field error />
        </div>
    }
}

/// Outcome of the latest submission: either the success text or the error text.
#[component]
pub fn Feedback(success: Signal<Option<&'static str>>, error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="feedback" role="status">
            {move || success.get().map(|message| view! { <p class="feedback-success">{message}</p> })}
            {move || error.get().map(|message| view! { <p class="feedback-error">{message}</p> })}
        </div>
    }
}
