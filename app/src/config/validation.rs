//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

use super::defaults::{MAX_COLS, MAX_COUNT};

static RE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_\-]{0,31}$").unwrap());
static RE_HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/?#]+\S*$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "url" => {
            if !RE_HTTP_URL.is_match(value) {
                return Err("must be an http(s) URL without spaces".into());
            }
        }
        "prefix" => {
            if !RE_PREFIX.is_match(value) {
                return Err(
                    "must be 1-32 characters of letters, digits, '_' or '-', starting with a letter or digit"
                        .into(),
                );
            }
        }
        "count" => validate_int_range(value, 1, MAX_COUNT)?,
        "cols" => validate_int_range(value, 1, MAX_COLS)?,
        "start" => {
            value.parse::<u32>().map_err(|_| "must be a non-negative integer")?;
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: u32, max: u32) -> Result<(), String> {
    let v: u32 = value.parse().map_err(|_| "must be an integer")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
