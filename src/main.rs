//! Main module for the wedding site using Yew.
//! Wires page state, effects and the RSVP submission.

use chrono::Local;
use gloo_timers::callback::{Interval, Timeout};
use sitemariage::countdown::{countdown, wedding_start, Countdown};
use sitemariage::events::EventId;
use sitemariage::i18n::{t, Language};
use sitemariage::journey::default_journey;
use sitemariage::land::land;
use sitemariage::rsvp::FormStatus;
use yew::prelude::*;

mod cache;
mod components;
mod config;
mod globe;
mod hooks;
mod submit;
mod utils;

use components::{
    EventModal, Footer, HeaderControls, Hero, PracticalInfo, RsvpModal, TravelSection,
};
use config::*;
use globe::{Globe, StaticMap};
use hooks::{
    use_escape_key, use_prefers_reduced_motion, use_scroll_progress, FormAction, RsvpForm,
};
use utils::{apply_document_language, language_from_url};

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

fn current_countdown() -> Countdown {
    countdown(Local::now().naive_local(), wedding_start())
}

/// Run `callback` after `delay_ms`, cancelling any pending run.
fn schedule_once(
    timer_handle: &UseStateHandle<Option<Timeout>>,
    delay_ms: u32,
    callback: Callback<()>,
) {
    // Dropping the previous Timeout cancels it
    timer_handle.set(None);

    let timer_handle_clone = timer_handle.clone();
    let handle = Timeout::new(delay_ms, move || {
        callback.emit(());
        timer_handle_clone.set(None);
    });
    timer_handle.set(Some(handle));
}

// ──────────────────────────────────────────────────────────────────────────────
// Journey section

#[derive(Properties, PartialEq)]
struct JourneyProps {
    lang: Language,
    on_select: Callback<EventId>,
}

/// Pinned globe driven by scroll, or the flat map when motion is reduced.
#[function_component(JourneySection)]
fn journey_section(props: &JourneyProps) -> Html {
    let reduced_motion = use_prefers_reduced_motion();
    let node = use_node_ref();
    let metrics = use_scroll_progress(node.clone());
    let journey = use_memo((), |_| default_journey());
    let lang = props.lang;

    if reduced_motion {
        return html! {
            <section class="journey journey-static">
                <h2 class="section-title">{ t("globe.section_title", lang) }</h2>
                <StaticMap lang={lang} on_select={props.on_select.clone()} />
            </section>
        };
    }

    let camera = journey.sample(metrics.progress);
    html! {
        <section class="journey" ref={node}>
            <div class="journey-sticky">
                <h2 class="section-title">{ t("globe.section_title", lang) }</h2>
                <Globe camera={camera} lang={lang} on_select={props.on_select.clone()} />
                if metrics.progress < 0.05 {
                    <p class="scroll-hint">{ t("globe.scroll_hint", lang) }</p>
                }
            </div>
        </section>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Page

#[function_component(Main)]
fn main_component() -> Html {
    let lang = use_state_eq(|| language_from_url().unwrap_or_default());
    // Text read by screen readers after a language switch
    let announcement = use_state(|| None::<String>);
    let announce_timer = use_state(|| None::<Timeout>);
    let active_event = use_state_eq(|| None::<EventId>);
    let rsvp_open = use_state_eq(|| false);
    let form = use_reducer(RsvpForm::default);
    let remaining = use_state_eq(current_countdown);

    // Mirror the language onto <html lang dir>
    use_effect_with(*lang, |lang| {
        apply_document_language(*lang);
    });

    // Refresh the countdown periodically
    {
        let remaining = remaining.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(COUNTDOWN_REFRESH_MS, move || {
                remaining.set(current_countdown());
            });
            move || drop(interval)
        });
    }

    let on_lang = {
        let lang = lang.clone();
        let announcement = announcement.clone();
        let announce_timer = announce_timer.clone();
        Callback::from(move |next: Language| {
            if *lang == next {
                return;
            }
            log::info!("language switched to {}", next);
            lang.set(next);
            announcement.set(Some(t("a11y.lang_changed", next).to_string()));
            let announcement = announcement.clone();
            schedule_once(
                &announce_timer,
                LANG_ANNOUNCE_CLEAR_MS,
                Callback::from(move |_| announcement.set(None)),
            );
        })
    };

    let on_select = {
        let active_event = active_event.clone();
        Callback::from(move |id: EventId| {
            log::debug!("opening event {}", id);
            active_event.set(Some(id));
        })
    };

    let close_event = {
        let active_event = active_event.clone();
        Callback::from(move |_| active_event.set(None))
    };

    let open_rsvp = {
        let rsvp_open = rsvp_open.clone();
        Callback::from(move |_| rsvp_open.set(true))
    };

    let close_rsvp = {
        let rsvp_open = rsvp_open.clone();
        let form = form.clone();
        Callback::from(move |_| {
            rsvp_open.set(false);
            // A recorded answer starts a fresh form next time
            if form.status == FormStatus::Success {
                form.dispatch(FormAction::Reset);
            }
        })
    };

    let close_dialogs = {
        let close_event = close_event.clone();
        let close_rsvp = close_rsvp.clone();
        let active_event = active_event.clone();
        Callback::from(move |_| {
            if active_event.is_some() {
                close_event.emit(());
            } else {
                close_rsvp.emit(());
            }
        })
    };
    use_escape_key(active_event.is_some() || *rsvp_open, close_dialogs);

    let on_submit = {
        let form = form.clone();
        Callback::from(move |_| {
            if form.status.is_submitting() {
                return;
            }
            match form.draft.validate() {
                Err(errors) => form.dispatch(FormAction::Invalid(errors)),
                Ok(submission) => {
                    form.dispatch(FormAction::Submitting);
                    let form = form.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = submit::post_rsvp(submission).await;
                        form.dispatch(FormAction::Finished(result));
                    });
                }
            }
        })
    };

    html! {
        <>
            <a class="skip-link" href="#main-content">{ t("a11y.skip_to_content", *lang) }</a>
            <div class="sr-only" aria-live="polite" role="status">
                { (*announcement).clone().unwrap_or_default() }
            </div>
            <HeaderControls lang={*lang} on_lang={on_lang} on_rsvp={open_rsvp.clone()} />
            <main>
                <Hero lang={*lang} countdown={*remaining} />
                <JourneySection lang={*lang} on_select={on_select.clone()} />
                <TravelSection lang={*lang} on_select={on_select} />
                <PracticalInfo lang={*lang} />
                <section class="rsvp-cta">
                    <button type="button" class="rsvp-button" onclick={open_rsvp.reform(|_: MouseEvent| ())}>
                        { t("nav.rsvp", *lang) }
                    </button>
                </section>
            </main>
            <Footer lang={*lang} />
            if let Some(id) = *active_event {
                <EventModal lang={*lang} event={id} on_close={close_event} />
            }
            if *rsvp_open {
                <RsvpModal lang={*lang} form={form} on_submit={on_submit} on_close={close_rsvp} />
            }
        </>
    }
}

#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

/// Entry point: installs the panic hook and logger, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    if let Err(err) = land() {
        log::warn!("land outlines unavailable: {}", err);
    }
    yew::Renderer::<App>::new().render();
}
