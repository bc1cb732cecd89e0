//! Demo catalog used by the `seed` command and the integration tests.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::DbErr;
use tracing::info;

use super::Store;
use crate::models::movie::NewMovie;

const GENRES: &[(&str, i32)] = &[
    ("Comedy", 1),
    ("Horror", 2),
    ("Drama", 3),
    ("Action", 4),
    ("Science Fiction", 5),
    ("Thriller", 6),
    ("Animation", 7),
    ("Adventure", 8),
    ("Documentary", 9),
    ("Kids", 10),
    ("Fantasy", 11),
    ("Musical", 12),
];

struct SeedMovie {
    title: &'static str,
    rating: f64,
    awards: i32,
    released: (i32, u32, u32),
    length: Option<i32>,
    genre: Option<&'static str>,
}

const MOVIES: &[SeedMovie] = &[
    SeedMovie { title: "Avatar", rating: 7.9, awards: 3, released: (2010, 10, 4), length: Some(120), genre: Some("Science Fiction") },
    SeedMovie { title: "Titanic", rating: 7.7, awards: 11, released: (1997, 9, 4), length: Some(320), genre: Some("Drama") },
    SeedMovie { title: "Star Wars: Return of the Jedi", rating: 9.1, awards: 7, released: (1983, 5, 25), length: Some(131), genre: Some("Science Fiction") },
    SeedMovie { title: "Star Wars: The Force Awakens", rating: 9.0, awards: 6, released: (2015, 12, 18), length: Some(136), genre: Some("Science Fiction") },
    SeedMovie { title: "Jurassic Park", rating: 8.3, awards: 5, released: (1993, 6, 11), length: Some(127), genre: Some("Adventure") },
    SeedMovie { title: "Harry Potter and the Deathly Hallows: Part 1", rating: 9.0, awards: 2, released: (2010, 11, 19), length: Some(146), genre: Some("Fantasy") },
    SeedMovie { title: "Transformers: Dark of the Moon", rating: 0.9, awards: 1, released: (2011, 6, 29), length: Some(154), genre: Some("Action") },
    SeedMovie { title: "Harry Potter and the Philosopher's Stone", rating: 10.0, awards: 1, released: (2001, 11, 16), length: Some(152), genre: Some("Fantasy") },
    SeedMovie { title: "Harry Potter and the Chamber of Secrets", rating: 3.5, awards: 2, released: (2002, 11, 15), length: Some(161), genre: Some("Fantasy") },
    SeedMovie { title: "The Lion King", rating: 9.1, awards: 3, released: (1994, 6, 24), length: None, genre: Some("Animation") },
    SeedMovie { title: "Alice in Wonderland", rating: 5.7, awards: 2, released: (2010, 3, 5), length: Some(108), genre: None },
    SeedMovie { title: "Finding Nemo", rating: 8.3, awards: 2, released: (2003, 5, 30), length: Some(100), genre: Some("Animation") },
    SeedMovie { title: "Toy Story", rating: 6.1, awards: 0, released: (1995, 11, 22), length: Some(81), genre: Some("Animation") },
    SeedMovie { title: "Toy Story 2", rating: 3.2, awards: 2, released: (1999, 11, 24), length: Some(92), genre: Some("Animation") },
    SeedMovie { title: "Life Is Beautiful", rating: 8.3, awards: 5, released: (1997, 12, 20), length: None, genre: Some("Drama") },
    SeedMovie { title: "Home Alone", rating: 3.2, awards: 1, released: (1990, 11, 16), length: Some(103), genre: Some("Comedy") },
    SeedMovie { title: "Inside Out", rating: 9.0, awards: 2, released: (2015, 6, 19), length: Some(95), genre: Some("Animation") },
    SeedMovie { title: "Chariots of Fire", rating: 9.9, awards: 7, released: (1981, 3, 30), length: Some(124), genre: None },
    SeedMovie { title: "Big", rating: 7.3, awards: 2, released: (1988, 6, 3), length: Some(104), genre: Some("Comedy") },
    SeedMovie { title: "I Am Sam", rating: 9.0, awards: 4, released: (2001, 12, 28), length: Some(132), genre: Some("Drama") },
    SeedMovie { title: "Hotel Transylvania", rating: 7.1, awards: 1, released: (2012, 9, 28), length: Some(91), genre: Some("Kids") },
];

struct SeedActor {
    name: &'static str,
    rating: Option<f64>,
    favorite: Option<&'static str>,
    cast_in: &'static [&'static str],
}

const ACTORS: &[SeedActor] = &[
    SeedActor { name: "Sam Worthington", rating: Some(7.5), favorite: Some("Avatar"), cast_in: &["Avatar"] },
    SeedActor { name: "Zoe Saldana", rating: Some(5.5), favorite: Some("Avatar"), cast_in: &["Avatar"] },
    SeedActor { name: "Leonardo DiCaprio", rating: Some(3.5), favorite: Some("Titanic"), cast_in: &["Titanic"] },
    SeedActor { name: "Kate Winslet", rating: Some(1.5), favorite: Some("Titanic"), cast_in: &["Titanic"] },
    SeedActor { name: "Mark Hamill", rating: Some(2.3), favorite: Some("Star Wars: Return of the Jedi"), cast_in: &["Star Wars: Return of the Jedi", "Star Wars: The Force Awakens"] },
    SeedActor { name: "Harrison Ford", rating: Some(6.7), favorite: Some("Star Wars: The Force Awakens"), cast_in: &["Star Wars: Return of the Jedi", "Star Wars: The Force Awakens"] },
    SeedActor { name: "Daniel Radcliffe", rating: Some(7.5), favorite: Some("Harry Potter and the Philosopher's Stone"), cast_in: &["Harry Potter and the Deathly Hallows: Part 1", "Harry Potter and the Philosopher's Stone", "Harry Potter and the Chamber of Secrets"] },
    SeedActor { name: "Emma Watson", rating: Some(9.0), favorite: Some("Harry Potter and the Deathly Hallows: Part 1"), cast_in: &["Harry Potter and the Deathly Hallows: Part 1", "Harry Potter and the Philosopher's Stone", "Harry Potter and the Chamber of Secrets"] },
    SeedActor { name: "Tom Hanks", rating: Some(8.5), favorite: Some("Toy Story"), cast_in: &["Toy Story", "Toy Story 2", "Big"] },
    SeedActor { name: "Sean Penn", rating: Some(9.2), favorite: Some("I Am Sam"), cast_in: &["I Am Sam"] },
    SeedActor { name: "Macaulay Culkin", rating: None, favorite: None, cast_in: &["Home Alone"] },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub genres: usize,
    pub movies: usize,
    pub actors: usize,
    pub links: usize,
}

impl SeedReport {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.genres == 0 && self.movies == 0 && self.actors == 0
    }
}

/// Loads the demo catalog. Does nothing when genres already exist.
pub async fn seed_demo_catalog(store: &Store) -> Result<SeedReport, DbErr> {
    let genre_repo = store.genres();
    if genre_repo.count().await? > 0 {
        info!("Catalog already populated, skipping seed");
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();

    let mut genre_ids = HashMap::new();
    for (name, ranking) in GENRES {
        let genre = genre_repo.create(name, *ranking).await?;
        genre_ids.insert(*name, genre.id);
        report.genres += 1;
    }

    let movie_repo = store.movies();
    let mut movie_ids = HashMap::new();
    for movie in MOVIES {
        let (year, month, day) = movie.released;
        let release_date = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map_or_else(Utc::now, |dt| dt.and_utc());

        let created = movie_repo
            .create(NewMovie {
                title: movie.title.to_string(),
                rating: movie.rating,
                awards: movie.awards,
                release_date,
                length: movie.length,
                genre_id: movie.genre.and_then(|g| genre_ids.get(g).copied()),
            })
            .await?;
        movie_ids.insert(movie.title, created.id);
        report.movies += 1;
    }

    let actor_repo = store.actors();
    for actor in ACTORS {
        let favorite = actor.favorite.and_then(|t| movie_ids.get(t).copied());
        let created = actor_repo.create(actor.name, actor.rating, favorite).await?;
        report.actors += 1;

        for title in actor.cast_in {
            if let Some(movie_id) = movie_ids.get(title) {
                actor_repo.link_movie(created.id, *movie_id).await?;
                report.links += 1;
            }
        }
    }

    info!(
        genres = report.genres,
        movies = report.movies,
        actors = report.actors,
        links = report.links,
        "Seeded demo catalog"
    );

    Ok(report)
}
