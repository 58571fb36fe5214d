use crate::core::services::ServiceResult;
use crate::ledger::Ledger;

pub struct CategoryService;

impl CategoryService {
    pub fn add(ledger: &mut Ledger, name: impl Into<String>) -> ServiceResult<()> {
        ledger.add_category(name)?;
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, name: &str) -> ServiceResult<()> {
        ledger.remove_category(name)?;
        Ok(())
    }

    pub fn select(ledger: &mut Ledger, name: &str) -> ServiceResult<()> {
        ledger.categories.select(name)?;
        ledger.touch();
        Ok(())
    }

    pub fn list(ledger: &Ledger) -> Vec<&str> {
        ledger
            .categories
            .names()
            .iter()
            .map(String::as_str)
            .collect()
    }

    pub fn selected(ledger: &Ledger) -> &str {
        ledger.categories.selected()
    }
}
