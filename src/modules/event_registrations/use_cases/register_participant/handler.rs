use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::modules::event_registrations::adapters::outbound::registration_ledger::RegistrationLedger;
use crate::modules::event_registrations::adapters::outbound::store_error::StoreError;
use crate::modules::event_registrations::core::admission::Admission;
use crate::modules::event_registrations::core::event::validate_participant_id;
use crate::modules::event_registrations::core::registration::Registration;
use crate::modules::event_registrations::use_cases::application_error::{
    ApplicationError, ConflictReason,
};
use crate::modules::event_registrations::use_cases::register_participant::command::RegisterParticipant;
use crate::modules::event_registrations::use_cases::register_participant::retry_policy::RetryPolicy;

pub struct RegisterParticipantHandler<TLedger>
where
    TLedger: RegistrationLedger + ?Sized,
{
    ledger: Arc<TLedger>,
    retry_policy: RetryPolicy,
}

impl<TLedger> RegisterParticipantHandler<TLedger>
where
    TLedger: RegistrationLedger + ?Sized,
{
    pub fn new(ledger: Arc<TLedger>, retry_policy: RetryPolicy) -> Self {
        Self {
            ledger,
            retry_policy,
        }
    }

    /// The occurred, capacity and duplicate checks and the insert happen inside
    /// `RegistrationLedger::admit`. Only serialization conflicts are retried.
    #[instrument(skip(self, command), fields(event_id = %command.event_id))]
    pub async fn handle(
        &self,
        command: RegisterParticipant,
    ) -> Result<Registration, ApplicationError> {
        let participant_id = validate_participant_id(&command.participant_id)?;
        let max_attempts = self.retry_policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            match self
                .ledger
                .admit(command.event_id, &participant_id, command.now)
                .await
            {
                Ok(Admission::Admitted(registration)) => {
                    info!(%participant_id, attempt, "participant registered");
                    return Ok(registration);
                }
                Ok(Admission::Rejected(rejection)) => {
                    debug!(%participant_id, %rejection, "registration rejected");
                    return Err(ApplicationError::Conflict(rejection.into()));
                }
                Err(StoreError::SerializationConflict(detail)) => {
                    warn!(%participant_id, attempt, %detail, "admission conflicted");
                    if attempt < max_attempts {
                        tokio::time::sleep(self.retry_policy.backoff_for(attempt)).await;
                    }
                }
                Err(err) => return Err(ApplicationError::from_store(err, "event")),
            }
        }

        warn!(%participant_id, max_attempts, "admission retries exhausted");
        Err(ApplicationError::Conflict(ConflictReason::Busy))
    }
}
