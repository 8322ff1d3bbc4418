use crate::config::REDUCED_MOTION_QUERY;
use crate::utils::{element_top_and_height, viewport_height};
use sitemariage::events::EventId;
use sitemariage::rsvp::{FormStatus, RsvpDraft, RsvpError, RsvpErrors};
use sitemariage::scroll_progress;
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MediaQueryListEvent,
};
use yew::prelude::*;

/// Scroll position of a tall section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// 0 when the section top meets the viewport top, 1 when its bottom
    /// meets the viewport bottom.
    pub progress: f64,
    pub section_height: f64,
    pub viewport_height: f64,
}

/// Track [`ScrollMetrics`] for `node` across window scrolls and resizes.
#[hook]
pub fn use_scroll_progress(node: NodeRef) -> ScrollMetrics {
    let metrics = use_state_eq(ScrollMetrics::default);

    {
        let metrics = metrics.clone();
        use_effect_with(node, move |node| {
            let node = node.clone();
            let measure = move || {
                if let Some((top, height)) = element_top_and_height(&node) {
                    let viewport = viewport_height();
                    metrics.set(ScrollMetrics {
                        progress: scroll_progress(top, height, viewport),
                        section_height: height,
                        viewport_height: viewport,
                    });
                }
            };
            // Initial measurement
            measure();

            let callback = Closure::<dyn Fn()>::new(measure);
            let window = gloo_utils::window();
            for event in ["scroll", "resize"] {
                if let Err(err) = window
                    .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                {
                    log::warn!("could not listen for {}: {:?}", event, err);
                }
            }
            move || {
                for event in ["scroll", "resize"] {
                    let _ = window.remove_event_listener_with_callback(
                        event,
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *metrics
}

/// Whether the user asked for reduced motion. Follows live changes.
#[hook]
pub fn use_prefers_reduced_motion() -> bool {
    let reduced = use_state_eq(|| {
        gloo_utils::window()
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map(|mql| mql.matches())
            .unwrap_or(false)
    });

    {
        let reduced = reduced.clone();
        use_effect_with((), move |_| {
            let mql = gloo_utils::window()
                .match_media(REDUCED_MOTION_QUERY)
                .ok()
                .flatten();
            let callback =
                Closure::<dyn Fn(MediaQueryListEvent)>::new(move |e: MediaQueryListEvent| {
                    reduced.set(e.matches());
                });
            if let Some(mql) = &mql {
                if let Err(err) = mql
                    .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                {
                    log::warn!("could not listen for reduced-motion changes: {:?}", err);
                }
            }
            move || {
                if let Some(mql) = &mql {
                    let _ = mql.remove_event_listener_with_callback(
                        "change",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *reduced
}

/// Emit `on_escape` when Escape is pressed while `active`.
#[hook]
pub fn use_escape_key(active: bool, on_escape: Callback<()>) {
    use_effect_with((active, on_escape), move |(active, on_escape)| {
        let listener = active.then(|| {
            let on_escape = on_escape.clone();
            let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    on_escape.emit(());
                }
            });
            let document = gloo_utils::document();
            if let Err(err) = document
                .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            {
                log::warn!("could not listen for keydown: {:?}", err);
            }
            (document, callback)
        });
        move || {
            if let Some((document, callback)) = listener {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    });
}

/// Something that can take keyboard focus.
pub trait Focusable {
    fn take_focus(&self) -> Result<(), String>;
}

impl Focusable for HtmlElement {
    fn take_focus(&self) -> Result<(), String> {
        self.focus().map_err(|err| format!("{:?}", err))
    }
}

/// Focus moved into a dialog, remembering where it came from.
pub struct FocusReturn<T: Focusable> {
    opener: Option<T>,
}

impl<T: Focusable> FocusReturn<T> {
    /// Focus `dialog` and keep `opener` for [`FocusReturn::restore`].
    pub fn enter(opener: Option<T>, dialog: Option<&T>) -> Self {
        if let Some(Err(err)) = dialog.map(Focusable::take_focus) {
            log::warn!("could not focus dialog: {}", err);
        }
        Self { opener }
    }

    /// Give focus back to the element that opened the dialog.
    pub fn restore(self) {
        if let Some(Err(err)) = self.opener.as_ref().map(Focusable::take_focus) {
            log::warn!("could not restore focus: {}", err);
        }
    }
}

/// Focus the `dialog` node on mount and return focus to the previously
/// focused element on unmount.
#[hook]
pub fn use_dialog_focus(dialog: NodeRef) {
    use_effect_with(dialog, |dialog| {
        // Globe markers are SVG elements; they implement focus() as well.
        let opener = gloo_utils::document()
            .active_element()
            .map(|el| el.unchecked_into::<HtmlElement>());
        let focus = FocusReturn::enter(opener, dialog.cast::<HtmlElement>().as_ref());
        move || focus.restore()
    });
}

/// Text fields of the RSVP form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    GuestCount,
    Dietary,
    Message,
}

pub enum FormAction {
    Edit(DraftField, String),
    ToggleEvent(EventId, bool),
    Invalid(RsvpErrors),
    Submitting,
    Finished(Result<(), RsvpError>),
    /// Back to the form after an error, keeping the input.
    Retry,
    Reset,
}

/// The RSVP form: input, inline errors and submission status.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RsvpForm {
    pub draft: RsvpDraft,
    pub errors: RsvpErrors,
    pub status: FormStatus,
}

impl Reducible for RsvpForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                match field {
                    DraftField::Name => {
                        next.draft.name = value;
                        next.errors.name = false;
                    }
                    DraftField::Email => {
                        next.draft.email = value;
                        next.errors.email = false;
                    }
                    DraftField::GuestCount => {
                        next.draft.guest_count = value;
                        next.errors.guest_count = false;
                    }
                    DraftField::Dietary => next.draft.dietary = value,
                    DraftField::Message => next.draft.message = value,
                }
            }
            FormAction::ToggleEvent(id, attending) => {
                next.draft.toggle_event(id, attending);
                next.errors.events = false;
            }
            FormAction::Invalid(errors) => next.errors = errors,
            FormAction::Submitting => {
                next.errors = RsvpErrors::default();
                next.status = FormStatus::Submitting;
            }
            FormAction::Finished(Ok(())) => next.status = FormStatus::Success,
            FormAction::Finished(Err(err)) => next.status = FormStatus::Error(err),
            FormAction::Retry => next.status = FormStatus::Idle,
            FormAction::Reset => return Rc::new(Self::default()),
        }
        Rc::new(next)
    }
}

/// `oninput` handler writing the target's value into `field`.
pub fn draft_input(form: &UseReducerHandle<RsvpForm>, field: DraftField) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let value = if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
            area.value()
        } else {
            let input: HtmlInputElement = e.target_unchecked_into();
            input.value()
        };
        form.dispatch(FormAction::Edit(field, value));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn reduce(form: RsvpForm, action: FormAction) -> RsvpForm {
        (*Rc::new(form).reduce(action)).clone()
    }

    struct Target {
        name: &'static str,
        focused: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Focusable for Target {
        fn take_focus(&self) -> Result<(), String> {
            self.focused.borrow_mut().push(self.name);
            Ok(())
        }
    }

    #[test]
    fn dialog_takes_focus_and_hands_it_back() {
        let focused = Rc::new(RefCell::new(Vec::new()));
        let opener = Target { name: "marker", focused: focused.clone() };
        let dialog = Target { name: "dialog", focused: focused.clone() };

        let scope = FocusReturn::enter(Some(opener), Some(&dialog));
        assert_eq!(*focused.borrow(), ["dialog"]);
        scope.restore();
        assert_eq!(*focused.borrow(), ["dialog", "marker"]);
    }

    #[test]
    fn nothing_to_restore_without_an_opener() {
        let focused = Rc::new(RefCell::new(Vec::new()));
        let dialog = Target { name: "dialog", focused: focused.clone() };
        FocusReturn::enter(None, Some(&dialog)).restore();
        assert_eq!(*focused.borrow(), ["dialog"]);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let form = RsvpForm {
            errors: RsvpErrors { name: true, email: true, events: true, guest_count: false },
            ..Default::default()
        };
        let form = reduce(form, FormAction::Edit(DraftField::Name, "Eric".into()));
        assert_eq!(form.draft.name, "Eric");
        assert!(!form.errors.name);
        assert!(form.errors.email);

        let form = reduce(form, FormAction::ToggleEvent(EventId::BeachParty, true));
        assert!(!form.errors.events);
        assert!(form.draft.events.contains(&EventId::BeachParty));
    }

    #[test]
    fn retry_keeps_input_and_reset_clears_it() {
        let form = reduce(
            RsvpForm::default(),
            FormAction::Edit(DraftField::Email, "a@b.fr".into()),
        );
        let form = reduce(form, FormAction::Submitting);
        assert!(form.status.is_submitting());

        let failed = reduce(form, FormAction::Finished(Err(RsvpError::Http(502))));
        assert_eq!(failed.status, FormStatus::Error(RsvpError::Http(502)));

        let retried = reduce(failed, FormAction::Retry);
        assert_eq!(retried.status, FormStatus::Idle);
        assert_eq!(retried.draft.email, "a@b.fr");

        let done = reduce(retried, FormAction::Finished(Ok(())));
        assert_eq!(done.status, FormStatus::Success);
        assert_eq!(reduce(done, FormAction::Reset), RsvpForm::default());
    }
}
