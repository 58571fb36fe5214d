use crate::core::services::ServiceResult;
use crate::ledger::Ledger;

pub struct ParticipantService;

impl ParticipantService {
    pub fn add(ledger: &mut Ledger, name: impl Into<String>) -> ServiceResult<()> {
        ledger.add_participant(name)?;
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, name: &str) -> ServiceResult<()> {
        ledger.remove_participant(name)?;
        Ok(())
    }

    pub fn list(ledger: &Ledger) -> Vec<&str> {
        ledger.roster.names().collect()
    }
}
