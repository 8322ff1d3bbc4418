use sitemariage::i18n::Language;
use web_sys::Element;
use yew::NodeRef;

/// Mirror the active language onto `<html lang dir>`.
pub fn apply_document_language(lang: Language) {
    let root = gloo_utils::document_element();
    if let Err(err) = root
        .set_attribute("lang", lang.code())
        .and_then(|_| root.set_attribute("dir", lang.dir()))
    {
        log::warn!("could not update document language: {:?}", err);
    }
}

/// Language requested with `?lang=`, if any.
pub fn language_from_url() -> Option<Language> {
    let search = gloo_utils::window().location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("lang")?.parse().ok()
}

pub fn viewport_height() -> f64 {
    gloo_utils::window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// (top relative to the viewport, height) of the referenced element.
pub fn element_top_and_height(node: &NodeRef) -> Option<(f64, f64)> {
    let el = node.cast::<Element>()?;
    let rect = el.get_bounding_client_rect();
    Some((rect.top(), rect.height()))
}

/// Zero-padded two-digit number for the countdown tiles.
pub fn two_digits(n: u32) -> String {
    format!("{:02}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digits() {
        assert_eq!(two_digits(0), "00");
        assert_eq!(two_digits(7), "07");
        assert_eq!(two_digits(17), "17");
        assert_eq!(two_digits(123), "123");
    }
}
