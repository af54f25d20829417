//! Structural extraction from the parsed document
//!
//! Extracts the page title, the heading-level histogram, and the login-form
//! flag. The document comes from `scraper`'s lenient parser, so malformed
//! markup has already been recovered browser-style and nothing here can fail.

use crate::report::{HeadingHistogram, PageStructure};
use scraper::{Html, Selector};

/// Extracts title, heading histogram, and login-form presence
pub fn extract_structure(document: &Html) -> PageStructure {
    PageStructure {
        title: extract_title(document),
        headings: count_headings(document),
        has_login_form: detect_login_form(document),
    }
}

/// Text content of the first `<title>` element, empty string if absent
fn extract_title(document: &Html) -> String {
    let title_selector = match Selector::parse("title") {
        Ok(selector) => selector,
        Err(_) => return String::new(),
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Counts every heading element at levels 1-6 anywhere in the document
fn count_headings(document: &Html) -> HeadingHistogram {
    let mut histogram = HeadingHistogram::default();

    let heading_selector = match Selector::parse("h1, h2, h3, h4, h5, h6") {
        Ok(selector) => selector,
        Err(_) => return histogram,
    };

    for element in document.select(&heading_selector) {
        match element.value().name() {
            "h1" => histogram.h1 += 1,
            "h2" => histogram.h2 += 1,
            "h3" => histogram.h3 += 1,
            "h4" => histogram.h4 += 1,
            "h5" => histogram.h5 += 1,
            "h6" => histogram.h6 += 1,
            _ => {}
        }
    }

    histogram
}

/// Detects whether any form on the page looks like a login form
///
/// A form qualifies if it contains a password-type input, or an input whose
/// name attribute contains (case-sensitive) one of `user`, `email`, `login`,
/// or `pass`. The scan of a single form stops at its first hit; remaining
/// forms are still visited when a form has no match.
fn detect_login_form(document: &Html) -> bool {
    let form_selector = match Selector::parse("form") {
        Ok(selector) => selector,
        Err(_) => return false,
    };
    let login_input_selector = match Selector::parse(
        "input[type='password'], input[name*='user'], input[name*='email'], \
         input[name*='login'], input[name*='pass']",
    ) {
        Ok(selector) => selector,
        Err(_) => return false,
    };

    for form in document.select(&form_selector) {
        if form.select(&login_input_selector).next().is_some() {
            return true;
        }
    }

    false
}
