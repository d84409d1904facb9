use gloo_console::log;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long the display keeps the pulse marker, matching the CSS
/// animation length.
const PULSE_MS: u32 = 200;

/// Rep count with a hard floor at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally(u32);

impl Tally {
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Tally {
        Tally(self.0.saturating_add(1))
    }

    /// Decrementing at zero is a no-op, not an error.
    pub fn decrement(self) -> Tally {
        Tally(self.0.saturating_sub(1))
    }

    pub fn reset(self) -> Tally {
        Tally(0)
    }
}

#[function_component(RepCounter)]
pub fn rep_counter() -> Html {
    let tally = use_state(Tally::default);
    let pulsing = use_state(|| false);
    let pulse_timer = use_mut_ref(|| None::<Timeout>);

    let pulse = {
        let pulsing = pulsing.clone();
        let pulse_timer = pulse_timer.clone();
        move || {
            pulsing.set(true);
            let done = pulsing.clone();
            // Replacing the handle drops the previous timeout, so rapid
            // clicks restart the pulse instead of stacking callbacks.
            *pulse_timer.borrow_mut() = Some(Timeout::new(PULSE_MS, move || {
                done.set(false);
            }));
        }
    };

    let on_increment = {
        let tally = tally.clone();
        let pulse = pulse.clone();
        Callback::from(move |_: MouseEvent| {
            tally.set(tally.increment());
            pulse();
        })
    };

    let on_decrement = {
        let tally = tally.clone();
        let pulse = pulse.clone();
        Callback::from(move |_: MouseEvent| {
            if tally.value() == 0 {
                log!("rep count already at zero");
            } else {
                tally.set(tally.decrement());
                pulse();
            }
        })
    };

    let on_reset = {
        let tally = tally.clone();
        Callback::from(move |_: MouseEvent| {
            tally.set(tally.reset());
            pulse();
        })
    };

    html! {
        <div class="counter">
            <div class={classes!("counter-display", (*pulsing).then(|| "pulse"))}>
                <span class="counter-value">{ tally.value() }</span>
                <span class="counter-label">{"reps"}</span>
            </div>
            <div class="counter-controls">
                <button class="counter-button" onclick={on_decrement} aria-label="Remove one rep">
                    {"−"}
                </button>
                <button class="counter-button counter-reset" onclick={on_reset}>
                    {"Reset"}
                </button>
                <button class="counter-button" onclick={on_increment} aria-label="Add one rep">
                    {"+"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_counts_up() {
        let tally = Tally::default().increment().increment();
        assert_eq!(tally.value(), 2);
    }

    #[test]
    fn decrement_is_floor_clamped_at_zero() {
        let tally = Tally::default();
        assert_eq!(tally.decrement().value(), 0);
        assert_eq!(tally.increment().decrement().value(), 0);
    }

    #[test]
    fn reset_is_idempotent() {
        let tally = Tally::default().increment().increment().increment();
        assert_eq!(tally.reset().value(), 0);
        assert_eq!(tally.reset().reset().value(), 0);
    }
}
