//! Scripted LinkedIn login: fill the credential form, submit, and wait for
//! the post-login navigation bar.

use std::time::Duration;

use crate::browser_client::BrowserClient;
use crate::error::ScrapeError;

pub const LOGIN_URL: &str = "https://www.linkedin.com/login";

const USERNAME_FIELD: &str = "#username";
const PASSWORD_FIELD: &str = "#password";
const SIGN_IN_BUTTON: &str = "//button[contains(text(),'Sign in')]";
const POST_LOGIN_MARKER: &str = "#global-nav-typeahead";

/// Log the session in with the given credentials.
///
/// Each step waits up to `element_wait` for its target element; a step
/// timing out aborts the whole run. There is no handling for rejected
/// credentials, CAPTCHA or MFA prompts; those surface as a timeout on the
/// post-login marker.
pub fn login(
    browser: &BrowserClient,
    email: &str,
    password: &str,
    element_wait: Duration,
) -> Result<(), ScrapeError> {
    browser.navigate(LOGIN_URL)?;

    browser.type_into(USERNAME_FIELD, email, element_wait)?;
    browser.type_into(PASSWORD_FIELD, password, element_wait)?;
    browser.click_xpath(SIGN_IN_BUTTON, element_wait)?;

    browser.wait_for_selector(POST_LOGIN_MARKER, element_wait)?;
    log::info!("Login completed");
    Ok(())
}
