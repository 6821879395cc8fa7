//! Database repository layer for pods and users.
//!
//! Repositories wrap SeaORM queries and return domain models, keeping entity
//! types out of the service layer. They are generic over the connection so the
//! same code runs against the pooled connection and inside transactions.

pub mod pod;
pub mod user;

#[cfg(test)]
mod test;
