//! Posting an RSVP to the spreadsheet endpoint.

use crate::config::{rsvp_endpoint, RSVP_TIMEOUT_MS};
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use sitemariage::rsvp::{check_status, RsvpError, RsvpSubmission};
use web_sys::{AbortController, UrlSearchParams};

fn js_error(err: wasm_bindgen::JsValue) -> RsvpError {
    RsvpError::Encode(format!("{:?}", err))
}

/// `application/x-www-form-urlencoded` body; the script endpoint cannot
/// read multipart forms.
fn encode_form(submission: &RsvpSubmission) -> Result<String, RsvpError> {
    let params = UrlSearchParams::new().map_err(js_error)?;
    for (key, value) in submission.form_pairs() {
        params.append(key, &value);
    }
    Ok(params.to_string().into())
}

/// Send one POST, following redirects, and give up after the configured
/// timeout. Never retries on its own.
pub async fn post_rsvp(submission: RsvpSubmission) -> Result<(), RsvpError> {
    let Some(url) = rsvp_endpoint() else {
        log::warn!("RSVP endpoint is not configured; set RSVP_ENDPOINT_URL at build time");
        return Err(RsvpError::NotConfigured);
    };

    let body = encode_form(&submission)?;
    let controller = AbortController::new().map_err(js_error)?;
    let request = Request::post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .abort_signal(Some(&controller.signal()))
        .body(body)
        .map_err(|e| RsvpError::Encode(e.to_string()))?;

    log::info!("submitting RSVP for {} event(s)", submission.events.len());
    let send = request.send();
    let timeout = TimeoutFuture::new(RSVP_TIMEOUT_MS);
    futures::pin_mut!(send, timeout);

    let result = match select(send, timeout).await {
        Either::Left((Ok(response), _)) => check_status(response.status()),
        Either::Left((Err(err), _)) => Err(RsvpError::Network(err.to_string())),
        Either::Right(((), _)) => {
            controller.abort();
            Err(RsvpError::Timeout(RSVP_TIMEOUT_MS))
        }
    };

    match &result {
        Ok(()) => log::info!("RSVP recorded"),
        Err(err) => log::warn!("RSVP submission failed: {}", err),
    }
    result
}
