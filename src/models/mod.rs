pub mod mood;
pub mod post;
pub mod user;
pub mod video;
