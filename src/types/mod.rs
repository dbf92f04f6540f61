pub mod message;
pub mod package;
pub mod workout;
