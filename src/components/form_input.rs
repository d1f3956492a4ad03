//! Labelled, controlled text input with Bootstrap validation styling.

#[cfg(test)]
#[path = "form_input_test.rs"]
mod form_input_test;

use leptos::prelude::*;

use crate::state::job_fields::{BsStyle, FieldState, JobField};

/// Form-group class for the field's current status.
pub fn form_group_class(style: Option<BsStyle>) -> String {
    match style {
        Some(style) => format!("form-group has-{}", style.as_str()),
        None => "form-group".to_owned(),
    }
}

/// One horizontal form row. Renders a `<textarea>` when `rows` is set.
///
/// The input is fully controlled: its value comes from `state` and every
/// keystroke is reported through `on_input` without local buffering.
#[component]
pub fn FormInput(
    field: JobField,
    label: &'static str,
    #[prop(into)] state: Signal<FieldState>,
    on_input: Callback<(JobField, String)>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let id = field.name();
    let required = field.is_required();
    let value = move || state.with(|s| s.text().to_owned());
    let group_class = move || form_group_class(state.with(|s| s.bs_style));

    let control = match rows {
        Some(rows) => view! {
            <textarea
                id=id
                name=id
                class="form-control"
                rows=rows.to_string()
                placeholder=placeholder
                required=required
                prop:value=value
                on:input=move |ev| on_input.run((field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        None => view! {
            <input
                id=id
                name=id
                class="form-control"
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=value
                on:input=move |ev| on_input.run((field, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <div class=group_class>
            <label class="control-label col-sm-offset-1 col-sm-2" for=id>
                {label}
            </label>
            <div class="col-sm-6">{control}</div>
        </div>
    }
}
