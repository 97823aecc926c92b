pub mod ids;
pub mod mastery;
pub mod rune;
pub mod summary;
pub mod summoner;
