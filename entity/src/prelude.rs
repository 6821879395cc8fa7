pub use super::pod::Entity as Pod;
pub use super::pod_user::Entity as PodUser;
pub use super::user::Entity as User;
