//! Fee rate selection.
//!
//! The selector holds the loaded fee options and the chosen tier, derives the
//! effective fee rate with [`derive_effective_fee_rate`], and reports a new
//! rate only when the effective value actually changes.

use tracing::debug;

use crate::domain::{FeeOption, FeeSummary, FALLBACK_FEE_RATE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeTierKind {
    Slow,
    Average,
    Fast,
    Custom,
}

impl FeeTierKind {
    pub const PRESETS: [FeeTierKind; 3] =
        [FeeTierKind::Slow, FeeTierKind::Average, FeeTierKind::Fast];

    /// Position of the tier's option in the service's fee list.
    pub fn preset_index(&self) -> Option<usize> {
        match self {
            FeeTierKind::Slow => Some(0),
            FeeTierKind::Average => Some(1),
            FeeTierKind::Fast => Some(2),
            FeeTierKind::Custom => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeeTier {
    Slow,
    #[default]
    Average,
    Fast,
    Custom { input: String },
}

impl FeeTier {
    pub fn kind(&self) -> FeeTierKind {
        match self {
            FeeTier::Slow => FeeTierKind::Slow,
            FeeTier::Average => FeeTierKind::Average,
            FeeTier::Fast => FeeTierKind::Fast,
            FeeTier::Custom { .. } => FeeTierKind::Custom,
        }
    }
}

/// Effective fee rate for a tier given the loaded options.
///
/// An empty `options` slice means the options have not been loaded yet.
pub fn derive_effective_fee_rate(options: &[FeeOption], tier: &FeeTier) -> f64 {
    let candidate = match tier {
        FeeTier::Custom { input } => parse_float_prefix(input),
        preset => preset
            .kind()
            .preset_index()
            .and_then(|idx| options.get(idx))
            .and_then(|option| option.fee_rate),
    };
    match candidate {
        Some(rate) if rate.is_finite() && rate > 0.0 => rate,
        _ => FALLBACK_FEE_RATE,
    }
}

/// Parse the longest leading decimal number in `text`, ignoring whatever follows.
///
/// `" 7.5 sat"` yields `7.5`, `"abc"` yields `None`.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Integer truncation applied to the custom input when it loses focus.
///
/// `"7.5"` becomes `"7"`, `"007"` becomes `"7"`. Input without a leading
/// integer becomes the literal `"NaN"`.
pub fn truncate_custom_input(text: &str) -> String {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = {
        let len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        &rest[..len]
    };
    if digits.is_empty() {
        return "NaN".to_owned();
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        "0".to_owned()
    } else if negative {
        format!("-{significant}")
    } else {
        significant.to_owned()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeeSelectorPhase {
    Uninitialized,
    Ready { options: Vec<FeeOption> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeeRateEvent {
    OptionsLoaded(FeeSummary),
    OptionsFailed(String),
    Select(FeeTierKind),
    CustomInput(String),
    CustomBlur,
}

/// One selectable tile in the fee bar.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeTile {
    pub kind: FeeTierKind,
    pub option: FeeOption,
    pub selected: bool,
}

impl FeeTile {
    pub fn rate_label(&self) -> Option<String> {
        self.option.fee_rate.map(|rate| format!("{rate} sat/vB"))
    }
}

#[derive(Debug, Clone)]
pub struct FeeRateSelector {
    phase: FeeSelectorPhase,
    tier: FeeTier,
    /// Custom text kept while a preset tier is selected.
    parked_input: String,
    last_reported: Option<f64>,
}

impl Default for FeeRateSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl FeeRateSelector {
    pub fn new() -> Self {
        Self {
            phase: FeeSelectorPhase::Uninitialized,
            tier: FeeTier::default(),
            parked_input: String::new(),
            last_reported: None,
        }
    }

    pub fn phase(&self) -> &FeeSelectorPhase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, FeeSelectorPhase::Ready { .. })
    }

    pub fn tier(&self) -> &FeeTier {
        &self.tier
    }

    /// Options from the service, without the synthetic custom entry.
    pub fn options(&self) -> &[FeeOption] {
        match &self.phase {
            FeeSelectorPhase::Uninitialized => &[],
            FeeSelectorPhase::Ready { options } => options,
        }
    }

    pub fn custom_input(&self) -> Option<&str> {
        match &self.tier {
            FeeTier::Custom { input } => Some(input),
            _ => None,
        }
    }

    /// Tiles to render: up to three presets followed by the custom entry.
    /// Nothing is rendered before the options are loaded.
    pub fn tiles(&self) -> Vec<FeeTile> {
        if !self.is_ready() {
            return Vec::new();
        }
        let selected = self.tier.kind();
        let mut tiles: Vec<FeeTile> = FeeTierKind::PRESETS
            .iter()
            .zip(self.options())
            .map(|(kind, option)| FeeTile {
                kind: *kind,
                option: option.clone(),
                selected: *kind == selected,
            })
            .collect();
        tiles.push(FeeTile {
            kind: FeeTierKind::Custom,
            option: FeeOption::custom(),
            selected: selected == FeeTierKind::Custom,
        });
        tiles
    }

    pub fn effective_rate(&self) -> f64 {
        derive_effective_fee_rate(self.options(), &self.tier)
    }

    /// Apply a user or data event. Returns the new effective rate if it changed.
    pub fn apply(&mut self, event: FeeRateEvent) -> Option<f64> {
        match event {
            FeeRateEvent::OptionsLoaded(summary) => {
                debug!(count = summary.list.len(), "fee options loaded");
                self.phase = FeeSelectorPhase::Ready {
                    options: summary.list,
                };
            }
            FeeRateEvent::OptionsFailed(reason) => {
                debug!(%reason, "fee options unavailable");
            }
            FeeRateEvent::Select(kind) => self.select(kind),
            FeeRateEvent::CustomInput(text) => {
                if let FeeTier::Custom { input } = &mut self.tier {
                    *input = text;
                }
            }
            FeeRateEvent::CustomBlur => {
                if let FeeTier::Custom { input } = &mut self.tier {
                    *input = truncate_custom_input(input);
                }
            }
        }
        self.poll_change()
    }

    /// Report the effective rate if it differs from the last reported one.
    /// The first call after construction always reports.
    pub fn poll_change(&mut self) -> Option<f64> {
        let rate = self.effective_rate();
        if self.last_reported == Some(rate) {
            return None;
        }
        debug!(rate, "effective fee rate changed");
        self.last_reported = Some(rate);
        Some(rate)
    }

    fn select(&mut self, kind: FeeTierKind) {
        if self.tier.kind() == kind {
            return;
        }
        let previous = std::mem::replace(
            &mut self.tier,
            match kind {
                FeeTierKind::Slow => FeeTier::Slow,
                FeeTierKind::Average => FeeTier::Average,
                FeeTierKind::Fast => FeeTier::Fast,
                FeeTierKind::Custom => FeeTier::Custom {
                    input: std::mem::take(&mut self.parked_input),
                },
            },
        );
        if let FeeTier::Custom { input } = previous {
            self.parked_input = input;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_prefix_follows_leading_number() {
        assert_eq!(parse_float_prefix("7.5"), Some(7.5));
        assert_eq!(parse_float_prefix("  12abc"), Some(12.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("3."), Some(3.0));
        assert_eq!(parse_float_prefix("1e2x"), Some(100.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("-4"), Some(-4.0));
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("sat"), None);
        assert_eq!(parse_float_prefix("NaN"), None);
    }

    #[test]
    fn truncation_keeps_integer_part() {
        assert_eq!(truncate_custom_input("7.5"), "7");
        assert_eq!(truncate_custom_input("007"), "7");
        assert_eq!(truncate_custom_input("0.9"), "0");
        assert_eq!(truncate_custom_input("-3.2"), "-3");
        assert_eq!(truncate_custom_input("-0"), "0");
        assert_eq!(truncate_custom_input(" 12 sat"), "12");
    }

    #[test]
    fn truncation_of_garbage_is_nan() {
        assert_eq!(truncate_custom_input(""), "NaN");
        assert_eq!(truncate_custom_input("abc"), "NaN");
        assert_eq!(truncate_custom_input(".5"), "NaN");
        assert_eq!(truncate_custom_input("NaN"), "NaN");
    }
}
