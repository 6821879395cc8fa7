pub mod prelude;

pub mod pod;
pub mod pod_user;
pub mod user;
