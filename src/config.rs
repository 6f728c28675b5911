use anyhow::{anyhow, Result};
use std::env;

use crate::models::VenuePrices;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub http_port: u16,
    pub prices: VenuePrices,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .or_else(|_| env::var("TELEGRAM_APITOKEN"))
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let defaults = VenuePrices::default();
        let prices = VenuePrices {
            small: price_from_env("PRICE_SMALL", defaults.small)?,
            medium: price_from_env("PRICE_MEDIUM", defaults.medium)?,
            large: price_from_env("PRICE_LARGE", defaults.large)?,
        };

        Ok(Config {
            telegram_bot_token: token,
            http_port,
            prices,
        })
    }
}

fn price_from_env(name: &str, default: u32) -> Result<u32> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid {}", name)),
        _ => Ok(default),
    }
}
