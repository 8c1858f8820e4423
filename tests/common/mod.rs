//! Shared helpers for integration tests

use std::sync::Once;
use std::time::Duration;

use robokit::config::WaitConfig;
use robokit::document::mock::MockDriver;
use robokit::document::ElementInfo;
use robokit::locator::LocatorDispatcher;

static INIT: Once = Once::new();

/// Initialize tracing once for the whole test binary
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "robokit=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Dispatcher with short waits so timeout paths stay fast
pub fn fast_dispatcher() -> LocatorDispatcher {
    LocatorDispatcher::with_wait(WaitConfig {
        timeout: Duration::from_millis(200),
        interval: Duration::from_millis(20),
    })
}

/// A small login form document: username/password fields, a remember-me
/// checkbox sharing its id with a text field, a submit button and two links.
pub async fn login_page() -> MockDriver {
    let driver = MockDriver::new();

    driver
        .add_element_matching(
            ElementInfo::new("el-username", "input")
                .with_attribute("id", "username")
                .with_attribute("name", "username")
                .with_attribute("type", "text"),
            &["input[name='username']"],
        )
        .await;

    driver
        .add_element(
            ElementInfo::new("el-password", "input")
                .with_attribute("id", "password")
                .with_attribute("name", "password")
                .with_attribute("type", "password"),
        )
        .await;

    // Two elements sharing one id, differing only in input type.
    driver
        .add_element(
            ElementInfo::new("el-remember-text", "input")
                .with_attribute("id", "remember")
                .with_attribute("type", "text"),
        )
        .await;
    driver
        .add_element(
            ElementInfo::new("el-remember-box", "input")
                .with_attribute("id", "remember")
                .with_attribute("type", "checkbox"),
        )
        .await;

    driver
        .add_element_matching(
            ElementInfo::new("el-submit", "input")
                .with_attribute("id", "submit")
                .with_attribute("type", "submit")
                .with_attribute("class", "btn btn-primary"),
            &["//input[@type='submit']", "input:visible"],
        )
        .await;

    driver
        .add_element(
            ElementInfo::new("el-help-link", "a")
                .with_attribute("href", "/help")
                .with_text("Need help signing in?"),
        )
        .await;
    driver
        .add_element(
            ElementInfo::new("el-signup-link", "a")
                .with_attribute("href", "/signup")
                .with_text("Sign up"),
        )
        .await;

    driver
}
