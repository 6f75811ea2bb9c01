use std::sync::Arc;
use tracing::{info, instrument};

use crate::modules::event_registrations::adapters::outbound::registration_ledger::RegistrationLedger;
use crate::modules::event_registrations::core::event::validate_participant_id;
use crate::modules::event_registrations::use_cases::application_error::ApplicationError;
use crate::modules::event_registrations::use_cases::cancel_registration::command::CancelRegistration;

pub struct CancelRegistrationHandler<TLedger>
where
    TLedger: RegistrationLedger + ?Sized,
{
    ledger: Arc<TLedger>,
}

impl<TLedger> CancelRegistrationHandler<TLedger>
where
    TLedger: RegistrationLedger + ?Sized,
{
    pub fn new(ledger: Arc<TLedger>) -> Self {
        Self { ledger }
    }

    /// Cancelling is allowed at any time, including after the event started.
    #[instrument(skip(self, command), fields(event_id = %command.event_id))]
    pub async fn handle(&self, command: CancelRegistration) -> Result<(), ApplicationError> {
        let participant_id = validate_participant_id(&command.participant_id)?;
        self.ledger
            .delete(&participant_id, command.event_id)
            .await
            .map_err(|e| ApplicationError::from_store(e, "registration"))?;
        info!(%participant_id, "registration cancelled");
        Ok(())
    }
}
