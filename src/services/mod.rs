pub mod health;
pub mod notifier;
pub mod scheduler;
