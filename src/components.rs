//! Yew view components for the wedding site.
//!
//! Most components here are stateless and render from props. The travel
//! section owns its scroll tracking, and the RSVP modal drives the shared
//! form reducer it is handed.

use crate::config::LUT_STEPS;
use crate::hooks::{
    draft_input, use_dialog_focus, use_scroll_progress, DraftField, FormAction, RsvpForm,
};
use crate::utils::two_digits;
use sitemariage::countdown::{day_label_key, month_label_key, Countdown};
use sitemariage::events::{event_by_id, events, EventId};
use sitemariage::i18n::{event_text, t, Language, EVENT_DETAIL_ROWS, PRACTICAL_SECTIONS};
use sitemariage::rsvp::{FormStatus, MAX_GUESTS};
use sitemariage::travel::{
    icon_for_progress, stop_positions, traveler_position, PathLut, SnakePath,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub lang: Language,
    pub on_lang: Callback<Language>,
    pub on_rsvp: Callback<()>,
}

/// Language switcher and RSVP button.
#[function_component(HeaderControls)]
pub fn header_controls(props: &HeaderProps) -> Html {
    let lang = props.lang;
    html! {
        <header class="site-header">
            <nav class="lang-switcher" aria-label={t("nav.lang_choice", lang).to_string()}>
                { for Language::ALL.iter().map(|&option| {
                    let (label, switch_label) = match option {
                        Language::Fr => ("nav.lang_fr", "nav.lang_switch_fr"),
                        Language::He => ("nav.lang_he", "nav.lang_switch_he"),
                    };
                    let current = option == lang;
                    html! {
                        <button type="button"
                            class={classes!("lang-button", current.then_some("active"))}
                            lang={option.code()}
                            aria-current={current.then_some("true")}
                            aria-label={t(switch_label, lang).to_string()}
                            onclick={props.on_lang.reform(move |_: MouseEvent| option)}>
                            { t(label, lang) }
                        </button>
                    }
                }) }
            </nav>
            <button type="button" class="rsvp-button" onclick={props.on_rsvp.reform(|_: MouseEvent| ())}>
                { t("nav.rsvp", lang) }
            </button>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub lang: Language,
    pub countdown: Countdown,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let lang = props.lang;
    html! {
        <section class="hero" id="main-content">
            <h1 class="hero-title">{ t("hero.title", lang) }</h1>
            <p class="hero-subtitle">{ t("hero.subtitle", lang) }</p>
            <p class="hero-date">{ t("hero.date", lang) }</p>
            <p class="hero-location">{ t("hero.location", lang) }</p>
            { render_countdown(props.countdown, lang) }
        </section>
    }
}

/// Countdown tiles, or the celebration banner once the day has come.
pub fn render_countdown(countdown: Countdown, lang: Language) -> Html {
    match countdown {
        Countdown::Passed => html! {
            <div class="countdown countdown-passed" role="status">
                { t("countdown.celebration", lang) }
            </div>
        },
        Countdown::Remaining { months, days } => html! {
            <div class="countdown" aria-label={t("countdown.title", lang).to_string()}>
                <span class="countdown-title">{ t("countdown.title", lang) }</span>
                <div class="countdown-tile">
                    <span class="countdown-value">{ two_digits(months) }</span>
                    <span class="countdown-unit">{ t(month_label_key(months), lang) }</span>
                </div>
                <div class="countdown-tile">
                    <span class="countdown-value">{ two_digits(days) }</span>
                    <span class="countdown-unit">{ t(day_label_key(days), lang) }</span>
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct TravelProps {
    pub lang: Language,
    pub on_select: Callback<EventId>,
}

/// Snake path down the page with a traveler that follows the scroll.
#[function_component(TravelSection)]
pub fn travel_section(props: &TravelProps) -> Html {
    let node = use_node_ref();
    let metrics = use_scroll_progress(node.clone());
    let path = use_memo((), |_| SnakePath::wedding_route());
    let lut = use_memo((), |_| PathLut::build(&SnakePath::wedding_route(), LUT_STEPS));

    let traveler = traveler_position(
        metrics.progress,
        metrics.section_height,
        metrics.viewport_height,
        &lut,
    );
    let stops = stop_positions(metrics.section_height, metrics.viewport_height, &lut);
    let icon = icon_for_progress(metrics.progress);
    let lang = props.lang;

    html! {
        <section class="travel" ref={node} aria-label={t("travel.aria_label", lang).to_string()}>
            <h2 class="section-title">{ t("travel.title", lang) }</h2>
            <svg class="travel-path" viewBox="0 0 100 100" preserveAspectRatio="none" aria-hidden="true">
                <path d={path.svg_d()} fill="none" vector-effect="non-scaling-stroke" />
            </svg>
            <div class="traveler" aria-hidden="true"
                style={format!("left: {:.2}%; top: {:.2}%;", traveler.x, traveler.y)}>
                { icon.emoji() }
            </div>
            { for stops.iter().filter_map(|(stop, at)| {
                let id = stop.event?;
                let event = event_by_id(id);
                let (x, y) = (at.x, at.y);
                let reached = metrics.progress >= stop.progress;
                Some(html! {
                    <button type="button"
                        class={classes!("travel-stop", reached.then_some("reached"))}
                        style={format!("left: {:.2}%; top: {:.2}%;", x, y)}
                        onclick={props.on_select.reform(move |_: MouseEvent| id)}>
                        <span class="travel-stop-emoji" aria-hidden="true">{ event.emoji }</span>
                        <span class="travel-stop-name">{ event_text(event, "name", lang) }</span>
                        <span class="travel-stop-date">{ event_text(event, "date", lang) }</span>
                    </button>
                })
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub lang: Language,
    pub labelled_by: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Dialog shell: backdrop and close button. Holds focus while open.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let dialog = use_node_ref();
    use_dialog_focus(dialog.clone());
    let close = props.on_close.reform(|_: MouseEvent| ());
    html! {
        <div class="modal-root">
            <div class="modal-backdrop" onclick={close.clone()} />
            <div class="modal" ref={dialog} tabindex="-1" role="dialog" aria-modal="true"
                aria-labelledby={props.labelled_by.clone()}>
                <button type="button" class="modal-close" onclick={close}
                    aria-label={t("a11y.close", props.lang).to_string()}>
                    { "×" }
                </button>
                { props.children.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EventModalProps {
    pub lang: Language,
    pub event: EventId,
    pub on_close: Callback<()>,
}

#[function_component(EventModal)]
pub fn event_modal(props: &EventModalProps) -> Html {
    let event = event_by_id(props.event);
    let lang = props.lang;
    html! {
        <Modal lang={lang} labelled_by="event-modal-title" on_close={props.on_close.clone()}>
            <div class="event-modal">
                <span class="event-emoji" aria-hidden="true">{ event.emoji }</span>
                <h2 id="event-modal-title">{ event_text(event, "name", lang) }</h2>
                <p class="event-description">{ event_text(event, "description", lang) }</p>
                <dl class="event-details">
                    { for EVENT_DETAIL_ROWS.iter().map(|&(label, field)| html! {
                        <div class="detail-row">
                            <dt>{ t(label, lang) }</dt>
                            <dd>{ event_text(event, field, lang) }</dd>
                        </div>
                    }) }
                </dl>
            </div>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub struct RsvpModalProps {
    pub lang: Language,
    pub form: UseReducerHandle<RsvpForm>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

fn field_error(show: bool, key: &str, id: &'static str, lang: Language) -> Html {
    if show {
        html! { <p class="field-error" id={id} role="alert">{ t(key, lang) }</p> }
    } else {
        html! {}
    }
}

#[function_component(RsvpModal)]
pub fn rsvp_modal(props: &RsvpModalProps) -> Html {
    let lang = props.lang;
    let form = &props.form;

    let body = match &form.status {
        FormStatus::Success => html! {
            <div class="rsvp-success" role="status">
                <h3>{ t("rsvp.success_title", lang) }</h3>
                <p>{ t("rsvp.success_message", lang) }</p>
            </div>
        },
        FormStatus::Error(err) => {
            let form = form.clone();
            html! {
                <div class="rsvp-error" role="alert">
                    <h3>{ t("rsvp.error_title", lang) }</h3>
                    <p>{ t(err.message_key(), lang) }</p>
                    <button type="button" class="retry-button"
                        onclick={Callback::from(move |_: MouseEvent| form.dispatch(FormAction::Retry))}>
                        { t("rsvp.error_retry", lang) }
                    </button>
                </div>
            }
        }
        FormStatus::Idle | FormStatus::Submitting => render_rsvp_form(props),
    };

    html! {
        <Modal lang={lang} labelled_by="rsvp-modal-title" on_close={props.on_close.clone()}>
            <div class="rsvp-modal">
                <h2 id="rsvp-modal-title">{ t("rsvp.title", lang) }</h2>
                <p class="rsvp-subtitle">{ t("rsvp.subtitle", lang) }</p>
                { body }
            </div>
        </Modal>
    }
}

fn render_rsvp_form(props: &RsvpModalProps) -> Html {
    let lang = props.lang;
    let form = &props.form;
    let draft = &form.draft;
    let errors = form.errors;
    let submitting = form.status.is_submitting();

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="rsvp-form" {onsubmit} novalidate={true}>
            <label for="rsvp-name">{ t("rsvp.name_label", lang) }</label>
            <input id="rsvp-name" type="text" autocomplete="name"
                value={draft.name.clone()}
                placeholder={t("rsvp.name_placeholder", lang).to_string()}
                aria-invalid={errors.name.then_some("true")}
                oninput={draft_input(form, DraftField::Name)} />
            { field_error(errors.name, "rsvp.error_name_required", "rsvp-name-error", lang) }

            <label for="rsvp-email">{ t("rsvp.email_label", lang) }</label>
            <input id="rsvp-email" type="email" autocomplete="email" dir="ltr"
                value={draft.email.clone()}
                placeholder={t("rsvp.email_placeholder", lang).to_string()}
                aria-invalid={errors.email.then_some("true")}
                oninput={draft_input(form, DraftField::Email)} />
            { field_error(errors.email, "rsvp.error_email_invalid", "rsvp-email-error", lang) }

            <fieldset class="rsvp-events">
                <legend>{ t("rsvp.events_label", lang) }</legend>
                { for events().iter().map(|event| {
                    let id = event.id;
                    let checked = draft.events.contains(&id);
                    let onchange = {
                        let form = form.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            form.dispatch(FormAction::ToggleEvent(id, input.checked()));
                        })
                    };
                    html! {
                        <label class="event-checkbox">
                            <input type="checkbox" value={id.as_str()} {checked} {onchange} />
                            <span aria-hidden="true">{ event.emoji }</span>
                            { event_text(event, "name", lang) }
                        </label>
                    }
                }) }
            </fieldset>
            { field_error(errors.events, "rsvp.error_events_required", "rsvp-events-error", lang) }

            <label for="rsvp-guests">{ t("rsvp.guests_label", lang) }</label>
            <p class="field-hint">{ t("rsvp.guests_description", lang) }</p>
            <input id="rsvp-guests" type="number" min="0" max={MAX_GUESTS.to_string()} inputmode="numeric"
                value={draft.guest_count.clone()}
                aria-invalid={errors.guest_count.then_some("true")}
                oninput={draft_input(form, DraftField::GuestCount)} />
            { field_error(errors.guest_count, "rsvp.error_guests_invalid", "rsvp-guests-error", lang) }

            <label for="rsvp-dietary">{ t("rsvp.dietary_label", lang) }</label>
            <input id="rsvp-dietary" type="text"
                value={draft.dietary.clone()}
                placeholder={t("rsvp.dietary_placeholder", lang).to_string()}
                oninput={draft_input(form, DraftField::Dietary)} />

            <label for="rsvp-message">{ t("rsvp.message_label", lang) }</label>
            <textarea id="rsvp-message" rows="3"
                value={draft.message.clone()}
                placeholder={t("rsvp.message_placeholder", lang).to_string()}
                oninput={draft_input(form, DraftField::Message)} />

            <button type="submit" class="submit-button" disabled={submitting} aria-busy={submitting.then_some("true")}>
                { if submitting { t("rsvp.submitting", lang) } else { t("rsvp.submit", lang) } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct LangProps {
    pub lang: Language,
}

#[function_component(PracticalInfo)]
pub fn practical_info(props: &LangProps) -> Html {
    let lang = props.lang;
    html! {
        <section class="practical">
            <h2 class="section-title">{ t("practical.title", lang) }</h2>
            <div class="practical-grid">
                { for PRACTICAL_SECTIONS.iter().map(|section| html! {
                    <article class="practical-card">
                        <h3>{ t(&format!("practical.{}.title", section), lang).to_string() }</h3>
                        <p>{ t(&format!("practical.{}.content", section), lang).to_string() }</p>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer(props: &LangProps) -> Html {
    let lang = props.lang;
    html! {
        <footer class="site-footer">
            <p>{ t("footer.from_with_love", lang) }</p>
            <p>{ t("footer.made_with_love", lang) }</p>
            <p class="copyright">{ t("footer.copyright", lang) }</p>
        </footer>
    }
}
