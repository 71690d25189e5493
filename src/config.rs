// ===============================
// src/config.rs
// ===============================
/*
=============================================================================
Project : futures_order_bot — interactive Binance Futures order client
Module  : config.rs
Version : 0.1.0

Summary : Collects order parameters at the terminal, builds the futures
          order request, signs it and sends it to Binance USDⓈ-M Futures
          (testnet by default), logging every request/response to an
          append-only text log.
=============================================================================
*/
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::Style;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dotenvy::dotenv;
use url::Url;

use crate::binance::{MAINNET_REST_URL, TESTNET_REST_URL};

/// Venue tujuan order
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum MarketMode {
    Mock,
    BinanceTestnet,
    BinanceMainnet,
}

impl MarketMode {
    // Endpoint default per mode
    pub fn default_rest_url(&self) -> &'static str {
        match self {
            MarketMode::Mock           => TESTNET_REST_URL, // tidak dipakai saat mock
            MarketMode::BinanceTestnet => TESTNET_REST_URL,
            MarketMode::BinanceMainnet => MAINNET_REST_URL,
        }
    }

    pub fn is_testnet(&self) -> bool {
        !matches!(self, MarketMode::BinanceMainnet)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketMode::Mock           => "mock",
            MarketMode::BinanceTestnet => "binance_testnet",
            MarketMode::BinanceMainnet => "binance_mainnet",
        }
    }
}

#[derive(Parser, Clone, Debug)]
#[command(name = "futures_order_bot", version, about = "Interactive Binance Futures order client")]
pub struct Args {
    /// Where orders go: mock | binance_testnet | binance_mainnet
    #[arg(long, env = "VENUE_MODE", value_enum, default_value_t = MarketMode::BinanceTestnet)]
    pub mode: MarketMode,

    /// Override the REST base URL for the selected mode
    #[arg(long, env = "BINANCE_REST_URL")]
    pub rest_url: Option<String>,

    #[arg(long, env = "BINANCE_RECV_WINDOW", default_value_t = 5000)]
    pub recv_window: u64,

    /// Append-only event log
    #[arg(long, env = "LOG_FILE", default_value = "bot.log")]
    pub log_file: PathBuf,

    /// EnvFilter directive, e.g. `info` or `futures_order_bot=debug`
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    #[arg(long, env = "BINANCE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "BINANCE_API_SECRET", hide_env_values = true)]
    pub api_secret: Option<String>,
}

impl Args {
    pub fn rest_base(&self) -> Result<Url> {
        let raw = self
            .rest_url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.mode.default_rest_url());
        Url::parse(raw.trim()).with_context(|| format!("invalid REST url: {raw}"))
    }

    /// Both halves of the key pair, when supplied up front.
    pub fn preset_credentials(&self) -> Option<(String, String)> {
        let key = self.api_key.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let sec = self.api_secret.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((key.to_string(), sec.to_string()))
    }

    pub fn presentation(&self) -> Presentation {
        if self.no_color { Presentation::plain() } else { Presentation::colorful() }
    }
}

pub fn load() -> Args {
    // Pastikan .env dibaca (agar BINANCE_API_KEY, VENUE_MODE, dll ter-load)
    let _ = dotenv();
    Args::parse()
}

/// Prompt theme + output styles, handed to the prompt and report code.
pub struct Presentation {
    pub theme: Box<dyn Theme>,
    pub heading: Style,
    pub ok: Style,
    pub err: Style,
    pub dim: Style,
}

impl Presentation {
    pub fn colorful() -> Self {
        Self {
            theme: Box::new(ColorfulTheme::default()),
            heading: Style::new().bold().cyan(),
            ok: Style::new().green(),
            err: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    pub fn plain() -> Self {
        Self {
            theme: Box::new(SimpleTheme),
            heading: Style::new(),
            ok: Style::new(),
            err: Style::new(),
            dim: Style::new(),
        }
    }
}
