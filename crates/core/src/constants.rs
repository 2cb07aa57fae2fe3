use chrono_tz::Tz;

/// Average year length in days, accounting for leap years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Decimal places used when displaying prices
pub const DISPLAY_DECIMAL_PRECISION: usize = 2;

/// Maximum length of a stock or portfolio name
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a ticker symbol
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Timezone used to derive "today" when none is configured
pub const DEFAULT_VALUATION_TZ: Tz = chrono_tz::UTC;
