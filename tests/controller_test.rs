//! Movie list and favorite toggle flows against a mock catalog
//!
//! Drives [`MovieListController`] end to end: every state change goes
//! through a real HTTP round trip.

use mockito::{Matcher, Mock, Server, ServerGuard};
use moviefinder::api::MovieClient;
use moviefinder::controller::{MovieListController, MovieListState};
use moviefinder::models::Tab;
use serde_json::json;

fn movie_json(id: &str, title: &str, favorite: Option<bool>) -> serde_json::Value {
    let mut movie = json!({
        "id": id,
        "title": title,
        "year": "2005",
        "imdbRating": "8.2",
    });
    if let Some(flag) = favorite {
        movie["isFavorite"] = json!(flag);
    }
    movie
}

fn page_body(movies: Vec<serde_json::Value>, total: u64) -> String {
    json!({
        "success": true,
        "message": "ok",
        "data": { "movies": movies, "totalResults": total }
    })
    .to_string()
}

async fn mock_movies(server: &mut ServerGuard, search: &str, page: u32, body: String) -> Mock {
    server
        .mock("GET", "/movies")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("searchTerm".into(), search.into()),
            Matcher::UrlEncoded("page".into(), page.to_string()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

async fn mock_favorites(server: &mut ServerGuard, page: u32, body: String) -> Mock {
    server
        .mock("GET", "/movies/favorites")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), page.to_string()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

fn controller(server: &ServerGuard) -> MovieListController {
    MovieListController::new(MovieClient::new(server.url()))
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_initial_load_fetches_all_tab() {
    let mut server = Server::new_async().await;
    let mock = mock_movies(
        &mut server,
        "",
        1,
        page_body(vec![movie_json("tt0372784", "Batman Begins", None)], 1),
    )
    .await;

    let mut ctl = controller(&server);
    assert!(ctl.sync().await);
    assert!(!ctl.sync().await, "nothing changed, nothing to fetch");

    mock.assert_async().await;
    assert_eq!(ctl.state.movies.len(), 1);
    assert!(!ctl.state.is_loading);
    assert!(ctl.state.error.is_none());
}

#[tokio::test]
async fn test_search_rebuilds_favorites_from_flags() {
    let mut server = Server::new_async().await;
    let _initial = mock_movies(&mut server, "", 1, page_body(vec![], 0)).await;
    let search = mock_movies(
        &mut server,
        "batman",
        1,
        page_body(
            vec![
                movie_json("tt0372784", "Batman Begins", Some(true)),
                movie_json("tt0096895", "Batman", Some(false)),
                movie_json("tt0103776", "Batman Returns", None),
            ],
            3,
        ),
    )
    .await;

    let mut ctl = controller(&server);
    ctl.sync().await;
    ctl.search("batman").await;

    search.assert_async().await;
    assert_eq!(ctl.state.query.current_page, 1);
    assert_eq!(ctl.state.total_movies, 3);
    assert_eq!(ctl.state.favorites.len(), 1);
    assert!(ctl.state.is_favorite("tt0372784"));
    assert!(!ctl.state.is_favorite("tt0096895"));
}

#[tokio::test]
async fn test_favorites_tab_treats_every_entry_as_favorite() {
    let mut server = Server::new_async().await;
    let _initial = mock_movies(&mut server, "", 1, page_body(vec![], 0)).await;
    let favorites = mock_favorites(
        &mut server,
        1,
        page_body(
            vec![
                movie_json("tt0372784", "Batman Begins", None),
                movie_json("tt0468569", "The Dark Knight", Some(false)),
            ],
            2,
        ),
    )
    .await;

    let mut ctl = controller(&server);
    ctl.sync().await;
    ctl.set_tab(Tab::Favorites).await;

    favorites.assert_async().await;
    assert!(ctl.state.is_favorite("tt0372784"));
    assert!(ctl.state.is_favorite("tt0468569"));
}

#[tokio::test]
async fn test_tab_change_from_later_page_fetches_once() {
    let mut server = Server::new_async().await;
    let _page1 = mock_movies(&mut server, "", 1, page_body(vec![], 25)).await;
    let _page2 = mock_movies(&mut server, "", 2, page_body(vec![], 25)).await;
    let favorites = mock_favorites(&mut server, 1, page_body(vec![], 0)).await;

    let mut ctl = controller(&server);
    ctl.sync().await;
    ctl.set_page(2).await;
    assert_eq!(ctl.state.query.current_page, 2);

    // Tab switch and page reset land in one state change
    ctl.set_tab(Tab::Favorites).await;
    assert!(!ctl.sync().await);

    favorites.assert_async().await;
    assert_eq!(ctl.state.query.current_page, 1);
    assert_eq!(ctl.state.total_movies, 0);
    assert_eq!(
        ctl.state.empty_message(),
        "You haven't added any favorites yet"
    );
}

#[tokio::test]
async fn test_fetch_failure_keeps_previous_page() {
    let mut server = Server::new_async().await;
    let _initial = mock_movies(
        &mut server,
        "",
        1,
        page_body(vec![movie_json("tt0372784", "Batman Begins", Some(true))], 1),
    )
    .await;
    let _broken = server
        .mock("GET", "/movies/favorites")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"success": false, "message": "boom"}"#)
        .create_async()
        .await;

    let mut ctl = controller(&server);
    ctl.sync().await;
    ctl.set_tab(Tab::Favorites).await;

    assert_eq!(
        ctl.state.error.as_deref(),
        Some("Failed to fetch favorites. Please try again.")
    );
    assert!(!ctl.state.is_loading);
    assert_eq!(ctl.state.movies.len(), 1);
    assert!(ctl.state.is_favorite("tt0372784"));
    let toast = ctl.state.toasts.current().unwrap();
    assert_eq!(toast.message, "Failed to fetch favorites!");
}

#[tokio::test]
async fn test_retry_after_failure_clears_error() {
    let mut server = Server::new_async().await;
    let broken = server
        .mock("GET", "/movies")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let mut ctl = controller(&server);
    ctl.sync().await;
    broken.assert_async().await;
    broken.remove_async().await;
    assert_eq!(
        ctl.state.error.as_deref(),
        Some("Failed to fetch movies. Please try again.")
    );

    let _healthy = mock_movies(&mut server, "", 1, page_body(vec![], 0)).await;
    ctl.state.request_refresh();
    ctl.sync().await;
    assert!(ctl.state.error.is_none());
}

#[tokio::test]
async fn test_refresh_refetches_unchanged_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/movies")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("searchTerm".into(), "".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(page_body(
            vec![movie_json("tt0372784", "Batman Begins", Some(true))],
            1,
        ))
        .expect(2)
        .create_async()
        .await;

    let mut ctl = controller(&server);
    assert!(ctl.sync().await);
    assert!(!ctl.state.refresh_due());

    // Nothing changed, but an explicit refresh still goes to the server
    ctl.refresh().await;

    mock.assert_async().await;
    assert!(!ctl.state.is_loading);
    assert!(ctl.state.error.is_none());
    assert_eq!(ctl.state.movies.len(), 1);
    assert!(ctl.state.is_favorite("tt0372784"));
    assert!(!ctl.sync().await);
}

// =============================================================================
// Favorite Toggling
// =============================================================================

#[tokio::test]
async fn test_remove_on_favorites_tab_drops_row() {
    let mut server = Server::new_async().await;
    let _initial = mock_movies(&mut server, "", 1, page_body(vec![], 0)).await;
    let _favorites = mock_favorites(
        &mut server,
        1,
        page_body(
            vec![
                movie_json("tt0372784", "Batman Begins", None),
                movie_json("tt0468569", "The Dark Knight", None),
            ],
            2,
        ),
    )
    .await;
    let delete = server
        .mock("DELETE", "/movies/favorites")
        .match_body(Matcher::Json(json!({ "movieId": "tt0372784" })))
        .with_status(200)
        .with_body(r#"{"success": true, "message": "Removed"}"#)
        .create_async()
        .await;

    let mut ctl = controller(&server);
    ctl.sync().await;
    ctl.set_tab(Tab::Favorites).await;
    ctl.toggle_favorite("tt0372784").await;

    delete.assert_async().await;
    assert!(!ctl.state.is_favorite("tt0372784"));
    assert_eq!(ctl.state.movies.len(), 1);
    assert_eq!(ctl.state.movies[0].id, "tt0468569");
    assert_eq!(ctl.state.total_movies, 1);
    assert_eq!(
        ctl.state.toasts.current().map(|t| t.message.as_str()),
        Some("Removed from favorites!")
    );
    // No refetch after a toggle
    assert!(!ctl.state.refresh_due());
}

#[tokio::test]
async fn test_remove_on_all_tab_keeps_row() {
    let mut server = Server::new_async().await;
    let _initial = mock_movies(
        &mut server,
        "",
        1,
        page_body(vec![movie_json("tt0372784", "Batman Begins", Some(true))], 1),
    )
    .await;
    let delete = server
        .mock("DELETE", "/movies/favorites")
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let mut ctl = controller(&server);
    ctl.sync().await;
    ctl.toggle_favorite("tt0372784").await;

    delete.assert_async().await;
    assert!(!ctl.state.is_favorite("tt0372784"));
    assert_eq!(ctl.state.movies.len(), 1);
    assert_eq!(ctl.state.total_movies, 1);
}

#[tokio::test]
async fn test_add_posts_loaded_record() {
    let mut server = Server::new_async().await;
    let _initial = mock_movies(
        &mut server,
        "",
        1,
        page_body(vec![movie_json("tt0096895", "Batman", Some(false))], 1),
    )
    .await;
    let post = server
        .mock("POST", "/movies/favorites")
        .match_body(Matcher::PartialJson(json!({
            "movie": { "id": "tt0096895", "title": "Batman" }
        })))
        .with_status(201)
        .with_body(r#"{"success": true, "message": "Added"}"#)
        .create_async()
        .await;

    let mut ctl = controller(&server);
    ctl.sync().await;
    ctl.toggle_favorite("tt0096895").await;

    post.assert_async().await;
    assert!(ctl.state.is_favorite("tt0096895"));
    assert_eq!(
        ctl.state.toasts.current().map(|t| t.message.as_str()),
        Some("Added to favorites!")
    );
}

#[tokio::test]
async fn test_failed_toggle_leaves_favorites_unchanged() {
    let mut server = Server::new_async().await;
    let _initial = mock_movies(
        &mut server,
        "",
        1,
        page_body(vec![movie_json("tt0372784", "Batman Begins", Some(true))], 1),
    )
    .await;
    let _delete = server
        .mock("DELETE", "/movies/favorites")
        .with_status(500)
        .create_async()
        .await;

    let mut ctl = controller(&server);
    ctl.sync().await;
    ctl.toggle_favorite("tt0372784").await;

    assert!(ctl.state.is_favorite("tt0372784"));
    assert_eq!(ctl.state.error.as_deref(), Some("Failed to update favorites."));
    assert_eq!(
        ctl.state.toasts.current().map(|t| t.message.as_str()),
        Some("Failed to update favorites!")
    );
}

#[tokio::test]
async fn test_toggle_unknown_movie_sends_nothing() {
    let mut server = Server::new_async().await;
    let _initial = mock_movies(&mut server, "", 1, page_body(vec![], 0)).await;
    let post = server
        .mock("POST", "/movies/favorites")
        .expect(0)
        .create_async()
        .await;

    let mut ctl = MovieListController::with_state(
        MovieClient::new(server.url()),
        MovieListState::new(),
    );
    ctl.sync().await;
    ctl.toggle_favorite("tt0000001").await;

    post.assert_async().await;
    assert!(ctl.state.favorites.is_empty());
    assert!(ctl.state.toasts.current().is_none());
}
