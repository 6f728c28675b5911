//! # Pickup Match Bot
//!
//! A Telegram bot that organises one recurring pickup football match per chat.
//!
//! ## Features
//! - Step-by-step match creation (location, date and time, pitch size)
//! - Player sign-up with a slotted roster sized to the pitch
//! - Dark and light teams, picked by name or at random, with player swaps
//! - Reminder alarms a number of hours before kickoff
//! - Automatic reset once the match time has passed

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Errors a match operation can be refused with
pub mod error;
/// Match record, roster, teams and the creation wizard
pub mod models;
/// Background services like alarms, expiration and health checks
pub mod services;
/// Utility functions for datetime, feedback and logging
pub mod utils;
