//! End-to-end locator resolution tests
//!
//! Drives the dispatcher against a mock document the way element keywords
//! do: raw locator string in, filtered element list out.

mod common;

use common::{fast_dispatcher, init_tracing, login_page};
use robokit::locator::ElementTag;
use robokit::Error;

#[tokio::test]
async fn test_bare_locator_defaults_to_id() {
    init_tracing();
    let page = login_page().await;
    let dispatcher = fast_dispatcher();

    let bare = dispatcher
        .find(&page, "username", None, true, false)
        .await
        .unwrap();
    let prefixed = dispatcher
        .find(&page, "id=username", None, true, false)
        .await
        .unwrap();

    assert_eq!(bare.len(), 1);
    assert_eq!(bare[0].element_id, "el-username");
    assert_eq!(bare, prefixed);
}

#[tokio::test]
async fn test_missing_optional_locator_returns_empty() {
    init_tracing();
    let page = login_page().await;

    let elements = fast_dispatcher()
        .find(&page, "id=missing", None, false, false)
        .await
        .unwrap();
    assert!(elements.is_empty());
}

#[tokio::test]
async fn test_missing_required_locator_times_out() {
    init_tracing();
    let page = login_page().await;

    let result = fast_dispatcher()
        .find(&page, "id=missing", None, true, false)
        .await;
    assert!(matches!(result, Err(Error::LocatorTimeout(_))));
}

#[tokio::test]
async fn test_tag_filter_selects_checkbox_over_text() {
    init_tracing();
    let page = login_page().await;

    // Both remember-me elements share the id; only the checkbox survives
    // the standard-tag filter.
    let elements = fast_dispatcher()
        .find(
            &page,
            "remember",
            ElementTag::from_name("CHECKBOX"),
            true,
            false,
        )
        .await
        .unwrap();

    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].element_id, "el-remember-box");
}

#[tokio::test]
async fn test_first_only_truncates_after_filtering() {
    init_tracing();
    let page = login_page().await;

    // Unfiltered, the text input is the first match for the shared id;
    // first-only must not discard the checkbox before filtering runs.
    let elements = fast_dispatcher()
        .find(
            &page,
            "remember",
            ElementTag::from_name("CHECKBOX"),
            true,
            true,
        )
        .await
        .unwrap();

    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].element_id, "el-remember-box");
}

#[tokio::test]
async fn test_first_only_without_filter_keeps_document_order() {
    init_tracing();
    let page = login_page().await;

    let elements = fast_dispatcher()
        .find(&page, "tag=input", None, true, true)
        .await
        .unwrap();

    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].element_id, "el-username");
}

#[tokio::test]
async fn test_name_and_id_or_name_locators() {
    init_tracing();
    let page = login_page().await;
    let dispatcher = fast_dispatcher();

    let by_name = dispatcher
        .find(&page, "name=password", None, true, false)
        .await
        .unwrap();
    assert_eq!(by_name[0].element_id, "el-password");

    // Union of id and name matches, deduplicated.
    let by_either = dispatcher
        .find(&page, "idorname=username", None, true, false)
        .await
        .unwrap();
    assert_eq!(by_either.len(), 1);
    assert_eq!(by_either[0].element_id, "el-username");
}

#[tokio::test]
async fn test_xpath_shorthand_with_embedded_equals() {
    init_tracing();
    let page = login_page().await;

    let elements = fast_dispatcher()
        .find(&page, "//input[@type='submit']", None, true, false)
        .await
        .unwrap();

    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].element_id, "el-submit");
}

#[tokio::test]
async fn test_css_and_classname_locators() {
    init_tracing();
    let page = login_page().await;
    let dispatcher = fast_dispatcher();

    let by_css = dispatcher
        .find(&page, "css=.btn-primary", None, true, false)
        .await
        .unwrap();
    assert_eq!(by_css[0].element_id, "el-submit");

    let by_class = dispatcher
        .find(&page, "classname=btn", None, true, false)
        .await
        .unwrap();
    assert_eq!(by_class[0].element_id, "el-submit");
}

#[tokio::test]
async fn test_selector_engine_locator() {
    init_tracing();
    let page = login_page().await;

    let elements = fast_dispatcher()
        .find(&page, "sizzle=input:visible", None, true, false)
        .await
        .unwrap();
    assert_eq!(elements[0].element_id, "el-submit");
}

#[tokio::test]
async fn test_link_text_exact_beats_partial() {
    init_tracing();
    let page = login_page().await;
    let dispatcher = fast_dispatcher();

    // "Sign up" matches one link exactly; the exact match wins even though
    // a partial lookup would also hit it.
    let exact = dispatcher
        .find(&page, "linktext=Sign up", None, true, false)
        .await
        .unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].element_id, "el-signup-link");

    // "help" only matches partially, so the fallback kicks in.
    let partial = dispatcher
        .find(&page, "linktext=help", None, true, false)
        .await
        .unwrap();
    assert_eq!(partial.len(), 1);
    assert_eq!(partial[0].element_id, "el-help-link");
}

#[tokio::test]
async fn test_unknown_prefix_fails_without_polling() {
    init_tracing();
    let page = login_page().await;

    let started = std::time::Instant::now();
    let result = fast_dispatcher()
        .find(&page, "data-test=submit", None, true, false)
        .await;

    assert!(matches!(result, Err(Error::UnsupportedLocator(_))));
    // A malformed prefix is a configuration error, not a timeout.
    assert!(started.elapsed().as_millis() < 100);
}
