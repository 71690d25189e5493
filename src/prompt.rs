// ===============================
// src/prompt.rs
// ===============================
//
// Terminal input:
// - credentials    : masked (Password)
// - order type     : Select menu
// - symbol / side  : free text + Tab completion
// - qty / prices   : decimal, re-prompt sampai valid
// - confirmations  : y/n
//
use std::io;

use anyhow::{Context, Result};
use dialoguer::theme::Theme;
use dialoguer::{Completion, Confirm, Input, Password, Select};
use rust_decimal::Decimal;

use crate::builder::parse_decimal;
use crate::config::Presentation;
use crate::domain::{normalize_symbol, OrderIntent, OrderKind, Side};

pub const COMMON_SYMBOLS: &[&str] = &[
    "BTCUSDT", "ETHUSDT", "BNBUSDT", "SOLUSDT", "XRPUSDT", "DOGEUSDT", "ADAUSDT", "LTCUSDT",
];
pub const SIDES: &[&str] = &["buy", "sell"];

/// Prefix completion over a fixed word list; first match wins.
pub struct Vocabulary(pub &'static [&'static str]);

impl Completion for Vocabulary {
    fn get(&self, input: &str) -> Option<String> {
        complete(self.0, input)
    }
}

pub fn complete(words: &[&str], input: &str) -> Option<String> {
    let needle = input.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return None;
    }
    words
        .iter()
        .find(|w| w.to_ascii_lowercase().starts_with(&needle))
        .map(|w| w.to_string())
}

/// Interactive input only takes the two real words.
pub fn check_side(input: &str) -> Result<(), String> {
    let s = input.trim();
    if SIDES.iter().any(|w| w.eq_ignore_ascii_case(s)) {
        Ok(())
    } else {
        Err("Side must be buy or sell".to_string())
    }
}

pub fn check_symbol(input: &str) -> Result<(), String> {
    if normalize_symbol(input).is_empty() {
        Err("Input required.".to_string())
    } else {
        Ok(())
    }
}

/// True when the error chain bottoms out in an interrupted read (Ctrl-C).
pub fn is_interrupt(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        if let Some(dialoguer::Error::IO(e)) = cause.downcast_ref::<dialoguer::Error>() {
            return e.kind() == io::ErrorKind::Interrupted;
        }
        cause
            .downcast_ref::<io::Error>()
            .map_or(false, |e| e.kind() == io::ErrorKind::Interrupted)
    })
}

pub struct Prompter<'a> {
    style: &'a Presentation,
}

impl<'a> Prompter<'a> {
    pub fn new(style: &'a Presentation) -> Self {
        Self { style }
    }

    fn theme(&self) -> &dyn Theme {
        self.style.theme.as_ref()
    }

    pub fn credentials(&self) -> Result<(String, String)> {
        let key = Password::with_theme(self.theme())
            .with_prompt("Enter API Key")
            .interact()
            .context("read API key")?;
        let secret = Password::with_theme(self.theme())
            .with_prompt("Enter API Secret")
            .interact()
            .context("read API secret")?;
        Ok((key.trim().to_string(), secret.trim().to_string()))
    }

    pub fn order_kind(&self) -> Result<OrderKind> {
        let items: Vec<&str> = OrderKind::ALL.iter().map(|k| k.label()).collect();
        let idx = Select::with_theme(self.theme())
            .with_prompt("Order type")
            .items(&items)
            .default(0)
            .interact()
            .context("read order type")?;
        Ok(OrderKind::ALL[idx])
    }

    pub fn symbol(&self) -> Result<String> {
        let completion = Vocabulary(COMMON_SYMBOLS);
        let raw: String = Input::with_theme(self.theme())
            .with_prompt("Symbol (e.g. BTCUSDT)")
            .completion_with(&completion)
            .validate_with(|s: &String| check_symbol(s))
            .interact_text()
            .context("read symbol")?;
        Ok(normalize_symbol(&raw))
    }

    pub fn side(&self) -> Result<Side> {
        let completion = Vocabulary(SIDES);
        let raw: String = Input::with_theme(self.theme())
            .with_prompt("Side (buy/sell)")
            .completion_with(&completion)
            .validate_with(|s: &String| check_side(s))
            .interact_text()
            .context("read side")?;
        Ok(Side::from_user(&raw))
    }

    pub fn decimal(&self, prompt: &str, field: &'static str) -> Result<Decimal> {
        let raw: String = Input::with_theme(self.theme())
            .with_prompt(prompt)
            .validate_with(move |s: &String| parse_decimal(field, s).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()
            .with_context(|| format!("read {field}"))?;
        Ok(parse_decimal(field, &raw)?)
    }

    /// Walks through every field the chosen order type needs.
    pub fn intent(&self) -> Result<OrderIntent> {
        let kind = self.order_kind()?;
        let symbol = self.symbol()?;
        let side = self.side()?;
        let quantity = self.decimal("Quantity", "quantity")?;
        let price = if kind.needs_price() {
            Some(self.decimal("Limit price", "price")?)
        } else {
            None
        };
        let stop_price = if kind.needs_stop_price() {
            Some(self.decimal("Stop price", "stopPrice")?)
        } else {
            None
        };
        Ok(OrderIntent { symbol, side, kind, quantity, price, stop_price })
    }

    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(self.theme())
            .with_prompt(prompt)
            .default(default)
            .interact()
            .with_context(|| format!("read answer to {prompt:?}"))
    }
}
