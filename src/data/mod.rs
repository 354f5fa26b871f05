pub mod applekill;
pub mod nicknames;
pub mod roster;
pub mod sources;

pub use sources::DataStore;
