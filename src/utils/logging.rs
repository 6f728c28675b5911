use tracing::{debug, error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_START: {} by {} in chat {} - {}", command, user, chat_id, d),
        None => info!("CMD_START: {} by {} in chat {}", command, user, chat_id),
    }
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user: &str, chat_id: i64) {
    debug!("CMD_SUCCESS: {} by {} in chat {}", command, user, chat_id);
}

/// Logs a refused command with consistent format
pub fn log_command_error(command: &str, user: &str, chat_id: i64, error: &str) {
    warn!("CMD_ERROR: {} by {} in chat {} - {}", command, user, chat_id, error);
}

/// Logs a creation wizard transition
pub fn log_wizard_step(step: &str, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!("WIZARD: {} in chat {} - {}", step, chat_id, d),
        None => info!("WIZARD: {} in chat {}", step, chat_id),
    }
}

/// Logs background job activity
pub fn log_scheduler_event(job: &str, details: &str) {
    info!("SCHEDULER: {} - {}", job, details);
}

/// Logs background job failures
pub fn log_scheduler_error(job: &str, error: &str) {
    error!("SCHEDULER_ERROR: {} failed: {}", job, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
