pub mod health;
pub mod intakes;
pub mod normalize;
pub mod render;
pub mod summary;
