//! Roster and status transitions.
//!
//! Each operation runs the entity transition under the store lock, so all
//! mutations of one recruitment are linearizable.

use tracing::{debug, info};

use super::RecruitmentStore;
use crate::domain::{MusterError, Participant, RecruitmentStatus};

impl RecruitmentStore {
    /// Add `user_id` as a Member.
    ///
    /// Errors: NotFound, NotOpen (terminal status), AlreadyParticipant, Full.
    /// The capacity check and the append happen in
    /// one critical section: two racing joins for the last slot cannot both win.
    pub fn join(
        &self,
        recruitment_id: &str,
        user_id: &str,
        display_name: &str,
    ) -> Result<(), MusterError> {
        let now = self.clock.now();
        let mut state = self.lock();
        let recruitment = state.get_mut(recruitment_id)?;

        if let Err(err) = recruitment.add_member(user_id, display_name, now) {
            debug!(recruitment_id, user_id, error = %err, "join rejected");
            return Err(err);
        }

        info!(
            recruitment_id,
            user_id,
            participants = recruitment.participant_count(),
            max_players = recruitment.max_players,
            status = %recruitment.status,
            "participant joined"
        );
        Ok(())
    }

    /// Remove a non-host participant. Full reverts to Open once a slot frees up.
    pub fn leave(&self, recruitment_id: &str, user_id: &str) -> Result<Participant, MusterError> {
        let now = self.clock.now();
        let mut state = self.lock();
        let recruitment = state.get_mut(recruitment_id)?;

        match recruitment.remove_participant(user_id, now) {
            Ok(removed) => {
                info!(
                    recruitment_id,
                    user_id,
                    participants = recruitment.participant_count(),
                    status = %recruitment.status,
                    "participant left"
                );
                Ok(removed)
            }
            Err(err) => {
                debug!(recruitment_id, user_id, error = %err, "leave rejected");
                Err(err)
            }
        }
    }

    /// Administrative override, valid from any status. The new status sticks
    /// until the next count-crossing join/leave.
    pub fn set_status(
        &self,
        recruitment_id: &str,
        status: RecruitmentStatus,
    ) -> Result<(), MusterError> {
        let now = self.clock.now();
        let mut state = self.lock();
        let recruitment = state.get_mut(recruitment_id)?;
        let previous = recruitment.status;
        recruitment.override_status(status, now);

        info!(recruitment_id, from = %previous, to = %status, "status overridden");
        Ok(())
    }

    /// Attach the announcement message once the gateway has posted it.
    pub fn bind_message(&self, recruitment_id: &str, message_ref: &str) -> Result<(), MusterError> {
        let now = self.clock.now();
        self.lock().rebind_message(recruitment_id, message_ref, now)?;
        debug!(recruitment_id, message_ref, "message bound");
        Ok(())
    }

    /// `Recruitment::can_join` evaluated against the store clock.
    pub fn can_join(&self, recruitment_id: &str, user_id: &str) -> Result<bool, MusterError> {
        let now = self.clock.now();
        let state = self.lock();
        state
            .get(recruitment_id)
            .map(|r| r.can_join(user_id, now))
            .ok_or_else(|| MusterError::recruitment_not_found(recruitment_id))
    }

    pub fn is_expired(&self, recruitment_id: &str) -> Result<bool, MusterError> {
        let now = self.clock.now();
        let state = self.lock();
        state
            .get(recruitment_id)
            .map(|r| r.is_expired(now))
            .ok_or_else(|| MusterError::recruitment_not_found(recruitment_id))
    }
}
