/// Decimal places kept for money amounts (cents)
pub const MONEY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for display of percentages and averages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Largest amount an expense or budget may carry (10 digits, 2 of them decimals)
pub const MAX_AMOUNT: &str = "99999999.99";

/// Number of expenses shown in the dashboard "recent" list
pub const RECENT_EXPENSES_LIMIT: usize = 10;

/// Trailing window used to decide whether a user is active for reporting
pub const ACTIVE_USER_WINDOW_DAYS: i64 = 30;

/// Default budget thresholds when a user first configures a budget
pub const DEFAULT_WARNING_PERCENTAGE: i32 = 75;
pub const DEFAULT_CRITICAL_PERCENTAGE: i32 = 90;

/// Version string echoed in report metadata
pub const REPORT_API_VERSION: &str = "1.0";

/// Field length limits
pub const CATEGORY_NAME_MAX_LEN: usize = 100;
pub const CATEGORY_ICON_MAX_LEN: usize = 50;
pub const EXPENSE_DESCRIPTION_MAX_LEN: usize = 255;
pub const EXPENSE_LOCATION_MAX_LEN: usize = 200;
pub const USERNAME_MAX_LEN: usize = 150;
