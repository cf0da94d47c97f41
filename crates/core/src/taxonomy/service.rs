//! Account label classification.

use bankbook_shared::TaxonomyConfig;

use super::types::AccountCategory;

/// Category tables used to classify account labels.
///
/// Built once from configuration and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AccountTaxonomy {
    bank_account: String,
    tables: [(AccountCategory, Vec<String>); 4],
}

impl AccountTaxonomy {
    /// Builds the taxonomy from configured category tables.
    #[must_use]
    pub fn new(config: &TaxonomyConfig, bank_account: &str) -> Self {
        Self {
            bank_account: bank_account.to_string(),
            tables: [
                (AccountCategory::Revenue, config.revenue.clone()),
                (AccountCategory::Expense, config.expense.clone()),
                (AccountCategory::Asset, config.asset.clone()),
                (AccountCategory::LiabilityOrEquity, config.liability_or_equity.clone()),
            ],
        }
    }

    /// Classifies an account label.
    ///
    /// The bank counter-account is always an asset. Other labels are looked
    /// up in revenue, expense, asset and liability/equity order, so a label
    /// listed twice takes the earlier category. Unknown labels are
    /// `Unclassified`.
    #[must_use]
    pub fn classify(&self, label: &str) -> AccountCategory {
        if label == self.bank_account {
            return AccountCategory::Asset;
        }
        self.tables
            .iter()
            .find(|(_, labels)| labels.iter().any(|l| l == label))
            .map_or(AccountCategory::Unclassified, |(category, _)| *category)
    }
}

impl Default for AccountTaxonomy {
    fn default() -> Self {
        Self::new(&TaxonomyConfig::default(), "البنك")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("إيرادات مبيعات", AccountCategory::Revenue)]
    #[case("إيرادات إيداعات", AccountCategory::Revenue)]
    #[case("مصاريف تشغيل", AccountCategory::Expense)]
    #[case("مصاريف سداد قروض", AccountCategory::Expense)]
    #[case("البنك", AccountCategory::Asset)]
    #[case("سحوبات نقدية", AccountCategory::Asset)]
    #[case("حسابات متنوعة", AccountCategory::LiabilityOrEquity)]
    #[case("غير معروف", AccountCategory::Unclassified)]
    #[case("", AccountCategory::Unclassified)]
    fn test_classify_default_tables(#[case] label: &str, #[case] expected: AccountCategory) {
        let taxonomy = AccountTaxonomy::default();
        assert_eq!(taxonomy.classify(label), expected);
    }

    #[test]
    fn test_bank_account_is_asset_without_config_entry() {
        let config = TaxonomyConfig {
            revenue: vec!["Sales".into()],
            expense: vec!["Rent".into()],
            asset: vec![],
            liability_or_equity: vec![],
        };
        let taxonomy = AccountTaxonomy::new(&config, "Bank");

        assert_eq!(taxonomy.classify("Bank"), AccountCategory::Asset);
        assert_eq!(taxonomy.classify("Sales"), AccountCategory::Revenue);
    }

    #[rstest]
    #[case::listed_as_revenue(vec!["Bank".into()], vec![])]
    #[case::listed_as_expense(vec![], vec!["Bank".into()])]
    fn test_bank_account_beats_other_tables(#[case] revenue: Vec<String>, #[case] expense: Vec<String>) {
        let config = TaxonomyConfig {
            revenue,
            expense,
            asset: vec![],
            liability_or_equity: vec!["Bank".into()],
        };
        let taxonomy = AccountTaxonomy::new(&config, "Bank");

        assert_eq!(taxonomy.classify("Bank"), AccountCategory::Asset);
    }

    #[test]
    fn test_first_category_wins_for_duplicate_labels() {
        let config = TaxonomyConfig {
            revenue: vec!["Refunds".into()],
            expense: vec!["Refunds".into()],
            asset: vec![],
            liability_or_equity: vec![],
        };
        let taxonomy = AccountTaxonomy::new(&config, "Bank");

        assert_eq!(taxonomy.classify("Refunds"), AccountCategory::Revenue);
    }
}
