use gloo_console::log;
use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlInputElement, ScrollLogicalPosition};
use yew::prelude::*;

use crate::dom;
use crate::form::{FieldStatus, SignupForm, SubmitOutcome};
use crate::validation::Field;

/// Delay before a successful submission wipes the field values.
const CLEAR_DELAY_MS: u32 = 1_000;
/// Further delay before the form returns in place of the success note.
const RESTORE_DELAY_MS: u32 = 5_000;

/// Pending display-recovery timeouts. Dropping a handle cancels it, so
/// a torn-down component never sees these fire.
#[derive(Default)]
struct RecoveryTimers {
    clear: Option<Timeout>,
    restore: Option<Timeout>,
}

fn field_index(field: Field) -> usize {
    match field {
        Field::Name => 0,
        Field::Email => 1,
        Field::Phone => 2,
        Field::Password => 3,
    }
}

fn input_kind(field: Field) -> &'static str {
    match field {
        Field::Name => "text",
        Field::Email => "email",
        Field::Phone => "tel",
        Field::Password => "password",
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Jane Doe",
        Field::Email => "you@example.com",
        Field::Phone => "+1 (555) 123 4567",
        Field::Password => "At least 6 characters",
    }
}

fn marker_class(status: FieldStatus) -> Option<&'static str> {
    match status {
        FieldStatus::Neutral => None,
        FieldStatus::Error => Some("error"),
        FieldStatus::Success => Some("success"),
    }
}

#[function_component(Signup)]
pub fn signup() -> Html {
    let form = use_state(SignupForm::default);
    let timers = use_mut_ref(RecoveryTimers::default);
    let success_ref = use_node_ref();
    let group_refs = [
        use_node_ref(),
        use_node_ref(),
        use_node_ref(),
        use_node_ref(),
    ];

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.input(field, input.value());
            form.set(next);
        })
    };

    let on_blur = |field: Field| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.blur(field);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let group_refs = group_refs.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                SubmitOutcome::Accepted => {
                    log!("signup accepted");
                }
                SubmitOutcome::Rejected { first_error } => {
                    log!("signup rejected at", first_error.name());
                    // The group nodes are always mounted, so the scroll
                    // can happen right away.
                    if let Some(group) = group_refs[field_index(first_error)].cast::<Element>() {
                        dom::scroll_into_view(&group, ScrollLogicalPosition::Center);
                    }
                }
            }
            form.set(next);
        })
    };

    // Display recovery after an accepted submission: scroll the success
    // note into view once it is shown, wipe the fields after a beat,
    // then bring the form back.
    {
        let form = form.clone();
        let timers = timers.clone();
        let success_ref = success_ref.clone();
        let submitted = form.submitted;
        use_effect_with_deps(
            move |submitted| {
                if *submitted {
                    if let Some(success) = success_ref.cast::<Element>() {
                        dom::scroll_into_view(&success, ScrollLogicalPosition::Center);
                    }

                    let mut cleared = (*form).clone();
                    cleared.clear();
                    let mut restored = cleared.clone();
                    restored.restore();

                    let setter = form.setter();
                    let restore_slot = timers.clone();
                    timers.borrow_mut().clear = Some(Timeout::new(CLEAR_DELAY_MS, move || {
                        setter.set(cleared);
                        let setter = setter.clone();
                        restore_slot.borrow_mut().restore =
                            Some(Timeout::new(RESTORE_DELAY_MS, move || {
                                setter.set(restored);
                            }));
                    }));
                }
                let timers = timers.clone();
                move || {
                    *timers.borrow_mut() = RecoveryTimers::default();
                }
            },
            submitted,
        );
    }

    let form_display = if form.submitted {
        "display: none;"
    } else {
        "display: block;"
    };
    let success_display = if form.submitted {
        "display: block;"
    } else {
        "display: none;"
    };

    html! {
        <div class="signup-box">
            <form class="signup-form" style={form_display} novalidate={true} onsubmit={on_submit}>
                {
                    for Field::ALL.iter().map(|&field| {
                        let entry = form.entry(field);
                        html! {
                            <div
                                ref={group_refs[field_index(field)].clone()}
                                class={classes!("form-group", marker_class(entry.status))}
                            >
                                <label for={field.name()}>{ field.title() }</label>
                                <input
                                    id={field.name()}
                                    name={field.name()}
                                    type={input_kind(field)}
                                    placeholder={placeholder(field)}
                                    value={entry.value.clone()}
                                    oninput={on_input(field)}
                                    onblur={on_blur(field)}
                                />
                                {
                                    if entry.status == FieldStatus::Error {
                                        html! { <span class="error-text">{ &entry.message }</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    })
                }
                <button type="submit" class="signup-submit">{"Start Training Free"}</button>
            </form>
            <div ref={success_ref} class="success-message" style={success_display}>
                <span class="success-icon">{"✔"}</span>
                <h3>{"You're on the list!"}</h3>
                <p>{"Thanks for signing up. Check your inbox to get started."}</p>
            </div>
        </div>
    }
}
