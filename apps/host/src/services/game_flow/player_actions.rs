//! Participant commands: claiming the first turn, placing cards, and the
//! inbound message handler replicas talk to.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::GameHost;
use crate::domain::cards::Card;
use crate::domain::placement::{apply_move, PlacementCheck};
use crate::domain::snapshot::snapshot;
use crate::domain::state::Phase;
use crate::error::HostError;
use crate::errors::domain::{DomainError, RejectKind};
use crate::net::peer::PeerSink;
use crate::net::protocol::{ClientMsg, ErrorCode, ServerMsg};

impl GameHost {
    /// First claim wins the first turn; later claims are ignored rather
    /// than rejected, since racing for the start is expected behavior.
    pub fn claim_start(self: &Arc<Self>, participant_id: Uuid) -> Result<(), HostError> {
        let mut state = self.state.lock();
        if state.phase != Phase::StartSelection {
            debug!(%participant_id, phase = ?state.phase, "late start claim ignored");
            return Ok(());
        }
        let seat = state.seat_of(participant_id).ok_or_else(|| {
            DomainError::rejected(RejectKind::UnknownParticipant, "Not seated in this game")
        })?;

        let name = state.seats[usize::from(seat)].display_name.clone();
        state.turn = seat;
        state.phase = Phase::Placement;
        let seq = state.set_message(format!("{name} starts!"));

        info!(%participant_id, seat, "start claimed");
        self.bump_epoch();
        self.commit(&state);
        self.schedule_followups(&state);
        self.spawn_banner_clear(seq);
        Ok(())
    }

    /// Validate and apply one human move, then hand the turn to whatever
    /// followup the new state needs.
    pub fn play_card(
        self: &Arc<Self>,
        participant_id: Uuid,
        card: Card,
        slot: usize,
        face_up: bool,
    ) -> Result<(), HostError> {
        let mut state = self.state.lock();
        let seat = state.seat_of(participant_id).ok_or_else(|| {
            DomainError::rejected(RejectKind::UnknownParticipant, "Not seated in this game")
        })?;

        apply_move(&mut state, seat, card, slot, face_up, PlacementCheck::Enforce)?;

        debug!(%participant_id, seat, %card, slot, face_up, "card placed");
        self.bump_epoch();
        self.commit(&state);
        self.schedule_followups(&state);
        Ok(())
    }

    /// Attach a replica's outbound sink. Safe to call again on reconnect.
    pub fn attach_peer(&self, identity: Uuid, sink: Box<dyn PeerSink>) {
        self.hub.attach(identity, sink);
    }

    /// One inbound replica message. Errors never propagate to the caller;
    /// they become per-peer `Error` feedback.
    pub fn handle_msg(self: &Arc<Self>, from: Uuid, msg: ClientMsg) {
        match msg {
            ClientMsg::Join { identity, name } => self.handle_join(from, identity, name),
            ClientMsg::Move {
                participant_id,
                card,
                slot,
                face_up,
            } => {
                if participant_id != from {
                    self.send_error(from, ErrorCode::Forbidden, "Not your seat");
                    return;
                }
                if let Err(err) = self.play_card(participant_id, card, slot, face_up) {
                    self.reject(from, err);
                }
            }
            ClientMsg::ClaimStart { participant_id } => {
                if participant_id != from {
                    self.send_error(from, ErrorCode::Forbidden, "Not your seat");
                    return;
                }
                if let Err(err) = self.claim_start(participant_id) {
                    self.reject(from, err);
                }
            }
        }
    }

    /// Raw wire text from a replica. Unparseable input gets `BadRequest`.
    pub fn handle_text(self: &Arc<Self>, from: Uuid, text: &str) {
        match serde_json::from_str::<ClientMsg>(text) {
            Ok(msg) => self.handle_msg(from, msg),
            Err(err) => {
                warn!(%from, %err, "malformed message");
                self.send_error(from, ErrorCode::BadRequest, "Malformed message");
            }
        }
    }

    /// Join during Lobby registers the identity; a known identity joining
    /// mid-game is a reconnection and just gets the current snapshot. An
    /// unknown identity mid-game has no seat to come back to.
    fn handle_join(self: &Arc<Self>, from: Uuid, identity: Uuid, name: String) {
        if identity != from {
            self.send_error(from, ErrorCode::Forbidden, "Identity mismatch");
            return;
        }

        let state = self.state.lock();
        if state.phase == Phase::Lobby {
            let mut roster = self.roster.lock();
            if !roster.iter().any(|(id, _)| *id == identity) {
                info!(%identity, %name, "joined the lobby");
                roster.push((identity, name));
            }
        } else if state.seat_of(identity).is_none() {
            drop(state);
            self.send_error(from, ErrorCode::Forbidden, "No seat in the running game");
            return;
        } else {
            info!(%identity, "reconnected mid-game");
        }

        self.hub.send_to(
            from,
            ServerMsg::StateUpdate {
                state: snapshot(&state),
            },
        );
    }

    fn reject(&self, to: Uuid, err: HostError) {
        let code = match &err {
            HostError::Domain(_) => ErrorCode::Rejected,
            _ => ErrorCode::BadRequest,
        };
        debug!(%to, %err, "command rejected");
        self.send_error(to, code, err.detail());
    }

    pub(super) fn send_error(&self, to: Uuid, code: ErrorCode, message: impl Into<String>) {
        self.hub.send_to(
            to,
            ServerMsg::Error {
                code,
                message: message.into(),
            },
        );
    }
}
