// Learning resources: static curated tables and the recommender over them.

pub mod handlers;
pub mod recommender;
pub mod resources;
