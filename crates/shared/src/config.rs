//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Account-category tables used to classify transaction labels.
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    /// Account labels and presentation settings used by the statements.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Account-category tables.
///
/// Each list holds the classified account labels belonging to that
/// category. A label that appears in no list is unclassified.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyConfig {
    /// Revenue labels.
    #[serde(default = "default_revenue_accounts")]
    pub revenue: Vec<String>,
    /// Expense labels.
    #[serde(default = "default_expense_accounts")]
    pub expense: Vec<String>,
    /// Asset labels (the bank account belongs here).
    #[serde(default = "default_asset_accounts")]
    pub asset: Vec<String>,
    /// Liability and equity labels.
    #[serde(default = "default_liability_or_equity_accounts")]
    pub liability_or_equity: Vec<String>,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            revenue: default_revenue_accounts(),
            expense: default_expense_accounts(),
            asset: default_asset_accounts(),
            liability_or_equity: default_liability_or_equity_accounts(),
        }
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_revenue_accounts() -> Vec<String> {
    labels(&[
        "إيرادات عمليات",
        "إيرادات تحويلات",
        "إيرادات متنوعة",
        "إيرادات مبيعات",
        "إيرادات إيداعات",
    ])
}

fn default_expense_accounts() -> Vec<String> {
    labels(&[
        "مصاريف تشغيل",
        "مصاريف مشتريات",
        "مصاريف ضرائب",
        "مصاريف بنكية",
        "مصاريف سداد قروض",
        "مصاريف رواتب",
        "مصاريف إيجار",
        "مصاريف خدمات",
    ])
}

fn default_asset_accounts() -> Vec<String> {
    // Cash withdrawals draw down the bank asset.
    labels(&["البنك", "النقد", "سحوبات نقدية"])
}

fn default_liability_or_equity_accounts() -> Vec<String> {
    labels(&["حسابات متنوعة"])
}

/// Statement settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Label of the bank account used as the universal counter-account.
    #[serde(default = "default_bank_account")]
    pub bank_account: String,
    /// Label whose debits are treated as owner withdrawals.
    #[serde(default = "default_withdrawal_account")]
    pub withdrawal_account: String,
    /// Labels whose movements count as financing activity.
    #[serde(default = "default_financing_accounts")]
    pub financing_accounts: Vec<String>,
    /// Currency code shown on every statement.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            bank_account: default_bank_account(),
            withdrawal_account: default_withdrawal_account(),
            financing_accounts: default_financing_accounts(),
            currency: default_currency(),
        }
    }
}

fn default_bank_account() -> String {
    "البنك".to_string()
}

fn default_withdrawal_account() -> String {
    "سحوبات نقدية".to_string()
}

fn default_financing_accounts() -> Vec<String> {
    labels(&["مصاريف سداد قروض", "سحوبات نقدية"])
}

fn default_currency() -> String {
    "SAR".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BANKBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
