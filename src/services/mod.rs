// Services module - Business logic

pub mod subscriptions;
pub mod validation;
