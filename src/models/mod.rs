// Models module - Domain entity representations

pub mod month;
pub mod subscription;

pub use month::Month;
pub use subscription::{NewSubscription, Subscription};
