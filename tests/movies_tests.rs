mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::{assert_failure, error_paths, spawn_app, spawn_app_with};
use movies_api::config::Config;
use sea_orm::ConnectionTrait;
use serde_json::{Value, json};

fn ratings(movies: &Value) -> Vec<f64> {
    movies
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["rating"].as_f64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_movies_ordered_by_rating() {
    let app = spawn_app().await;

    let (status, body) = app.get("/movies?order=rating&limit=2").await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["items"], 2);
    assert_eq!(data["total"], 21);
    assert_eq!(ratings(&data["movies"]), vec![0.9, 3.2]);
    assert_eq!(data["movies"][1]["title"], "Toy Story 2");
}

#[tokio::test]
async fn test_list_movies_default_page_carries_relations() {
    let app = spawn_app().await;

    let (status, body) = app.get("/movies").await;
    assert_eq!(status, StatusCode::OK);

    let movies = body["data"]["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 5);

    let avatar = &movies[0];
    assert_eq!(avatar["id"], 1);
    assert_eq!(avatar["title"], "Avatar");
    assert_eq!(avatar["genre_id"], 5);
    assert_eq!(avatar["genre"]["name"], "Science Fiction");
    assert_eq!(avatar["link"], "http://movies.test/movies/1");
    assert!(avatar.get("created_at").is_none());

    let cast: Vec<&str> = avatar["actors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(cast, vec!["Sam Worthington", "Zoe Saldana"]);
}

#[tokio::test]
async fn test_list_movies_offset_and_search() {
    let app = spawn_app().await;

    let (status, body) = app.get("/movies?offset=20&limit=5&search=ignored").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"], 1);
    assert_eq!(body["data"]["total"], 21);
    assert_eq!(body["data"]["movies"][0]["title"], "Hotel Transylvania");
}

#[tokio::test]
async fn test_list_movies_rejects_bad_params() {
    let app = spawn_app().await;

    let (status, body) = app.get("/movies?order=genre_id").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&body, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/movies?offset=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/movies?limit=1001").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_links_use_public_url() {
    let mut config = Config::default();
    config.server.public_url = Some("https://api.example.com/".to_string());
    let app = spawn_app_with(config).await;

    let (status, body) = app.get("/movies?limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["movies"][0]["link"],
        "https://api.example.com/movies/1"
    );
}

#[tokio::test]
async fn test_get_movie_by_id() {
    let app = spawn_app().await;

    let (status, body) = app.get("/movies/10").await;
    assert_eq!(status, StatusCode::OK);

    let movie = &body["data"]["movie"];
    assert_eq!(movie["title"], "The Lion King");
    assert_eq!(movie["release_date"], "1994-06-24T00:00:00+00:00");
    assert!(movie["length"].is_null());
    assert!(movie.get("genre_id").is_none());
    assert_eq!(movie["genre"]["name"], "Animation");
    assert!(movie["actors"].as_array().unwrap().is_empty());
    assert!(movie.get("link").is_none());

    let (status, body) = app.get("/movies/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&body, StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/movies/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(assert_failure(&body, StatusCode::NOT_FOUND), "Movie 9999 not found");
}

#[tokio::test]
async fn test_movie_id_past_integer_range_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = app.get("/movies/99999999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        assert_failure(&body, StatusCode::NOT_FOUND),
        "Movie 99999999999 not found"
    );

    let (status, _) = app
        .send_json("PATCH", "/movies/2147483648", &json!({ "title": "Nope" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/movies/-2147483649").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get("/movies?limit=1").await;
    assert_eq!(body["data"]["total"], 21);
}

#[tokio::test]
async fn test_newest_movies() {
    let app = spawn_app().await;

    let (status, body) = app.get("/movies/new?limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].get("total").is_none());

    let movies = body["data"]["movies"].as_array().unwrap();
    let titles: Vec<&str> = movies.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec!["Star Wars: The Force Awakens", "Inside Out", "Hotel Transylvania"]
    );

    let first = &movies[0];
    assert_eq!(first["release_date"], "2015-12-18T00:00:00+00:00");
    assert!(first.get("genre_id").is_none());
    assert_eq!(first["genre"]["name"], "Science Fiction");
    assert_eq!(first["actors"].as_array().unwrap().len(), 2);
    assert_eq!(first["link"], "http://movies.test/movies/4");
}

#[tokio::test]
async fn test_recommended_movies() {
    let app = spawn_app().await;

    let (status, body) = app.get("/movies/recommended?limit=100").await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["total"], 21);
    assert_eq!(data["items"], 11);

    let ratings = ratings(&data["movies"]);
    assert!(ratings.iter().all(|r| *r >= 8.0));
    assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    assert!((ratings[0] - 10.0).abs() < f64::EPSILON);

    let first = &data["movies"][0];
    assert_eq!(first["genre"]["name"], "Fantasy");
    assert!(first.get("actors").is_none());
    assert!(first.get("genre_id").is_none());
    assert_eq!(first["link"], "http://movies.test/movies/8");
}

#[tokio::test]
async fn test_create_movie() {
    let app = spawn_app().await;

    let (status, body) = app
        .send_json(
            "POST",
            "/movies",
            &json!({
                "title": "  Dune  ",
                "rating": 8.1,
                "awards": 6,
                "release_date": "2021-10-22",
                "length": 155,
                "genre_id": 5
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["meta"]["status"], 201);

    let movie = &body["data"]["movie"];
    assert_eq!(movie["id"], 22);
    assert_eq!(movie["title"], "Dune");
    assert_eq!(movie["release_date"], "2021-10-22T00:00:00+00:00");
    assert_eq!(movie["genre_id"], 5);

    let (_, body) = app.get("/movies?limit=1").await;
    assert_eq!(body["data"]["total"], 22);
}

#[tokio::test]
async fn test_create_movie_reports_field_errors() {
    let app = spawn_app().await;

    let (status, body) = app.send_json("POST", "/movies", &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
    assert_eq!(body["status"], 400);
    assert_eq!(
        error_paths(&body),
        vec!["title", "rating", "awards", "release_date"]
    );

    let (status, body) = app
        .send_json(
            "POST",
            "/movies",
            &json!({
                "title": "Nowhere",
                "rating": 5,
                "awards": 0,
                "release_date": "2020-01-01",
                "genre_id": 999
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_paths(&body), vec!["genre_id"]);

    let (_, body) = app.get("/movies?limit=1").await;
    assert_eq!(body["data"]["total"], 21);
}

#[tokio::test]
async fn test_create_movie_rejects_malformed_json() {
    let app = spawn_app().await;

    let (status, body) = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/movies")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"title\": "))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure(&body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_applies_zero_rating() {
    let app = spawn_app().await;

    let (status, body) = app
        .send_json("PATCH", "/movies/1", &json!({ "rating": 0 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Movie updated successfully");

    let movie = &body["data"]["movie"];
    assert_eq!(movie["rating"].as_f64(), Some(0.0));
    assert_eq!(movie["title"], "Avatar");
    assert_eq!(movie["awards"], 3);
}

#[tokio::test]
async fn test_update_title_only() {
    let app = spawn_app().await;

    let (status, body) = app
        .send_json("PATCH", "/movies/5", &json!({ "title": "  Jurassic Park III " }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body_after) = app.get("/movies/5").await;
    let movie = &body_after["data"]["movie"];
    assert_eq!(body["data"]["movie"]["title"], "Jurassic Park III");
    assert_eq!(movie["title"], "Jurassic Park III");
    assert_eq!(movie["rating"].as_f64(), Some(8.3));
    assert_eq!(movie["length"], 127);
    assert_eq!(movie["genre"]["name"], "Adventure");
}

#[tokio::test]
async fn test_update_null_clears_genre() {
    let app = spawn_app().await;

    let (status, _) = app
        .send_json("PATCH", "/movies/19", &json!({ "genre_id": null }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/movies/19").await;
    assert!(body["data"]["movie"]["genre"].is_null());
}

#[tokio::test]
async fn test_update_rejections() {
    let app = spawn_app().await;

    let (status, body) = app
        .send_json("PATCH", "/movies/1", &json!({ "title": "" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_paths(&body), vec!["title"]);

    let (status, body) = app
        .send_json("PATCH", "/movies/1", &json!({ "genre_id": 999 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_paths(&body), vec!["genre_id"]);

    let (status, body) = app
        .send_json("PATCH", "/movies/9999", &json!({ "rating": 5 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_failure(&body, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send_json("PATCH", "/movies/abc", &json!({ "rating": 5 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_movie_cascades() {
    let app = spawn_app().await;

    assert_eq!(app.store.actors().count_favoring(2).await.unwrap(), 2);
    assert_eq!(app.store.actors().count_links_for_movie(2).await.unwrap(), 2);

    let (status, body) = app.delete("/movies/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["msg"], "Movie deleted successfully");
    assert!(body.get("data").is_none());

    let (status, _) = app.get("/movies/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let actors = app.store.actors();
    assert_eq!(actors.count_favoring(2).await.unwrap(), 0);
    assert_eq!(actors.count_links_for_movie(2).await.unwrap(), 0);

    let dicaprio = actors.get(3).await.unwrap().unwrap();
    assert_eq!(dicaprio.name, "Leonardo DiCaprio");
    assert!(dicaprio.favorite_movie_id.is_none());

    let (_, body) = app.get("/movies?limit=1").await;
    assert_eq!(body["data"]["total"], 20);

    let (status, body) = app.delete("/movies/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_failure(&body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_movie_rolls_back_when_a_step_fails() {
    let app = spawn_app().await;

    app.store
        .conn
        .execute_unprepared(
            "CREATE TRIGGER block_movie_delete BEFORE DELETE ON movies \
             BEGIN SELECT RAISE(ABORT, 'movie deletes are blocked'); END;",
        )
        .await
        .unwrap();

    let (status, body) = app.delete("/movies/2").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_failure(&body, StatusCode::INTERNAL_SERVER_ERROR);

    let actors = app.store.actors();
    assert_eq!(actors.count_favoring(2).await.unwrap(), 2);
    assert_eq!(actors.count_links_for_movie(2).await.unwrap(), 2);

    let (status, body) = app.get("/movies/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["movie"]["actors"].as_array().unwrap().len(), 2);
}
