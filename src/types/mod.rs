pub mod date;
pub mod uuid;

pub mod author;
