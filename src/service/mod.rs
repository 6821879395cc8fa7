//! Business logic layer between the Discord handlers and the repositories.

pub mod alert;
pub mod card;
pub mod pod;

#[cfg(test)]
mod test;
