pub use super::actor_movie::Entity as ActorMovie;
pub use super::actors::Entity as Actors;
pub use super::genres::Entity as Genres;
pub use super::movies::Entity as Movies;
