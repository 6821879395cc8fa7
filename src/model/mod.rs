pub mod pod;
pub mod user;
