//! End-to-end tests for the catalog browser.

mod helpers;

#[tokio::test]
async fn test_initial_load_then_scroll() {
    let mut app = helpers::TestApp::new(2).await;
    let next = app.page_link(2, 2);
    let _first = app
        .mock_page(2, 0, Some(next), &[("bulbasaur", 1), ("charmander", 4)])
        .await;
    let _second = app.mock_page(2, 2, None, &[("squirtle", 7)]).await;

    assert!(app.browser.load_more().await);
    let state = app.browser.snapshot();
    let names: Vec<&str> = state.list.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["bulbasaur", "charmander"]);

    assert!(app.browser.load_more().await);
    let state = app.browser.snapshot();
    let positions: Vec<i64> = state.list.items.iter().map(|i| i.position).collect();
    assert_eq!(positions, [0, 1, 2]);
    assert!(!state.list.is_loading);
    assert!(state.list.error.is_none());

    assert_eq!(app.store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_failed_load_reports_error_and_retry_recovers() {
    let mut app = helpers::TestApp::new(10).await;
    let failing = app.mock_page_failure(500).await;

    app.browser.load_more().await;
    let state = app.browser.snapshot();
    assert!(state.list.items.is_empty());
    let error = state.list.error.expect("load error should be reported");
    assert!(error.starts_with("TRANSPORT"), "unexpected error: {error}");

    failing.remove_async().await;
    let _mock = app.mock_page(10, 0, None, &[("bulbasaur", 1)]).await;

    app.browser.load_more().await;
    let state = app.browser.snapshot();
    assert_eq!(state.list.items.len(), 1);
    assert!(state.list.error.is_none());
}

#[tokio::test]
async fn test_select_and_dismiss() {
    let mut app = helpers::TestApp::new(10).await;
    let _page = app.mock_page(10, 0, None, &[("bulbasaur", 1)]).await;
    let _detail = app.mock_detail(1, helpers::bulbasaur()).await;

    app.browser.load_more().await;
    let item = app.browser.snapshot().list.items[0].clone();

    assert!(app.browser.select_item(&item).await);
    let state = app.browser.snapshot();
    assert!(state.is_detail_visible);
    let detail = state.detail.detail.expect("detail should be loaded");
    assert_eq!(detail.name, "bulbasaur");
    assert_eq!(detail.stats.len(), 3);

    app.browser.dismiss_detail();
    let state = app.browser.snapshot();
    assert!(!state.is_detail_visible);
    assert!(state.detail.detail.is_some());
}

#[tokio::test]
async fn test_select_unknown_item_reports_not_found() {
    let mut app = helpers::TestApp::new(10).await;
    let _mock = app
        .server
        .mock("GET", "/pokemon/99999")
        .with_status(404)
        .create_async()
        .await;
    let item = pokedex_entity::PokemonSummary::new("missingno", app.detail_url(99999), 0);

    app.browser.select_item(&item).await;

    let state = app.browser.snapshot();
    assert!(state.is_detail_visible);
    assert!(!state.detail.is_loading);
    let error = state.detail.error.expect("detail error should be reported");
    assert!(error.starts_with("NOT_FOUND"), "unexpected error: {error}");
}
