pub mod prelude;

pub mod actor_movie;
pub mod actors;
pub mod genres;
pub mod movies;
