//! Background color parsing and range checks

use crate::{
    error::{AppError, Result},
    models::Rgb,
};
use regex::Regex;

pub const HEX_FORMAT_MESSAGE: &str = "Hexadecimal background color was not entered in the correct format. \
Please follow these examples:\n\nWhite: FFFFFF\nBlack: 000000\nPure Red: FF0000";

pub const COMPONENT_RANGE_MESSAGE: &str = "Background color should be entered as a sequence of 3 \
integer numbers between 0 and 255 (values for Red, Green and Blue components) separated by spaces. \
For instance, for a bright red you can use: '-bg 255 0 0' or '-hbg #FF0000'.";

/// Parses HTML-style hex colors such as `FF0000`, `#00ff00` or `F00`
#[derive(Debug, Clone)]
pub struct HexColorParser {
    pattern: Regex,
}

impl HexColorParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"^#?((?:[0-9a-fA-F]{3}){1,2})$")?,
        })
    }

    /// Whether `input` is a 3 or 6 digit hex color, optionally `#`-prefixed
    pub fn is_valid(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }

    /// Decode `input` into an [`Rgb`].
    ///
    /// Three-digit shorthand is widened digit by digit, so `F00` decodes the
    /// same as `FF0000`.
    pub fn parse(&self, input: &str) -> Result<Rgb> {
        let digits = self
            .pattern
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| AppError::format(HEX_FORMAT_MESSAGE))?;

        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        let channel = |offset: usize| -> Result<u8> {
            u8::from_str_radix(&expanded[offset..offset + 2], 16)
                .map_err(|_| AppError::format(HEX_FORMAT_MESSAGE))
        };

        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Range-check three integer components into an [`Rgb`]
pub fn rgb_from_components(components: [i64; 3]) -> Result<Rgb> {
    let min = components.iter().copied().min().unwrap_or(0);
    let max = components.iter().copied().max().unwrap_or(0);
    if min < 0 || max > 255 {
        return Err(AppError::range(COMPONENT_RANGE_MESSAGE));
    }

    let [r, g, b] = components;
    // In range after the check above
    Ok(Rgb::new(r as u8, g as u8, b as u8))
}
