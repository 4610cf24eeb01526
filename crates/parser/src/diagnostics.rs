pub const ZONE_FROM_RANGE: &str = "zone entry interpreted from range";
pub const MARKET_WITHOUT_PRICE: &str = "market entry without explicit price";
pub const DEFAULT_POSITION_PCT: &str = "default total position percent applied: 1%";
pub const DIRECTIONAL_CONFLICT: &str = "directional validation conflict";
pub const MISSING_REQUIRED: &str = "missing required fields or ambiguous parse";

/// Errors decide status, warnings only lower confidence.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Diagnostics {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Diagnostics {
    pub fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    pub fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
