//! Transient plugin state and its update/dispatch surface.
use std::sync::Arc;

use client_dispatch::{ActionDispatcher, DispatchError};
use hex_core::{Address, Direction, Extension, TileCoord, WorldState};
use tracing::debug;

use crate::checkin::{self, CheckInState};
use crate::commands::{self, CheckInError, CommandError};
use crate::config::PluginConfig;
use crate::message::HostMessage;

/// Failure surface of a command attempt: refused locally before dispatch,
/// or the dispatch channel itself failed.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error(transparent)]
    Refused(#[from] CheckInError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// One plugin instance's transient fields.
///
/// The poll loop, the state subscription, and the host message bus all
/// funnel into plain overwrites of these fields; they race freely and may
/// deliver duplicates. Every derived value is recomputed by [`Self::evaluate`]
/// from the current fields, so the last write wins and nothing accumulates.
/// A superseding input is the only form of cancellation.
pub struct PluginController {
    config: PluginConfig,
    dispatcher: Arc<dyn ActionDispatcher>,
    extension: Option<Extension>,
    state: Option<WorldState>,
    selected_tile: Option<TileCoord>,
    account: Option<Address>,
}

impl PluginController {
    pub fn new(config: PluginConfig, dispatcher: Arc<dyn ActionDispatcher>) -> Self {
        Self {
            config,
            dispatcher,
            extension: None,
            state: None,
            selected_tile: None,
            account: None,
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Replace the world snapshot (poll result or subscription push).
    pub fn apply_state(&mut self, state: WorldState) {
        self.state = Some(state);
    }

    /// Replace the resolved extension registry. `None` records that the
    /// lookup failed, which surfaces as the fatal no-extension state.
    pub fn apply_extension(&mut self, extension: Option<Extension>) {
        self.extension = extension;
    }

    /// Total handler for the host message bus.
    pub fn handle_message(&mut self, message: HostMessage) {
        match message {
            HostMessage::Ready { account } => {
                debug!(%account, "host ready");
                self.account = Some(account);
            }
            HostMessage::TileInteraction { tile } => {
                debug!(%tile, "tile selected");
                self.selected_tile = Some(tile);
            }
        }
    }

    pub fn selected_tile(&self) -> Option<TileCoord> {
        self.selected_tile
    }

    pub fn account(&self) -> Option<&Address> {
        self.account.as_ref()
    }

    /// Recompute eligibility from the current fields.
    pub fn evaluate(&self) -> CheckInState<'_> {
        checkin::evaluate(
            self.extension.as_ref(),
            self.state.as_ref(),
            self.selected_tile,
            self.account.as_ref(),
            &self.config,
        )
    }

    /// Attempt the gated check-in. Refused locally when any precondition is
    /// missing; otherwise handed off fire-and-forget.
    pub async fn check_in(&self) -> Result<(), PluginError> {
        let call = commands::check_in_call(&self.evaluate(), self.account.as_ref())?;
        debug!(%call, "dispatching check-in");
        self.dispatcher.dispatch(call).await?;
        Ok(())
    }

    /// Move the player's seeker one tile.
    pub async fn move_seeker(&self, direction: Direction) -> Result<(), PluginError> {
        let call = commands::move_seeker_call(
            self.world_state()?,
            self.known_account()?,
            direction,
            &self.config,
        )?;
        self.dispatcher.dispatch(call).await?;
        Ok(())
    }

    /// Spawn a tile adjacent to the player's seeker.
    pub async fn spawn_tile_in_direction(&self, direction: Direction) -> Result<(), PluginError> {
        let call = commands::spawn_tile_in_direction_call(
            self.world_state()?,
            self.known_account()?,
            direction,
            &self.config,
        )?;
        self.dispatcher.dispatch(call).await?;
        Ok(())
    }

    /// Spawn a tile at an explicit coordinate.
    pub async fn spawn_tile_at(&self, coord: TileCoord) -> Result<(), PluginError> {
        self.dispatcher
            .dispatch(commands::spawn_tile_at_call(coord))
            .await?;
        Ok(())
    }

    /// Spawn a seeker for the current account at the origin.
    pub async fn spawn_seeker(&self) -> Result<(), PluginError> {
        let call = commands::spawn_seeker_call(self.known_account()?);
        self.dispatcher.dispatch(call).await?;
        Ok(())
    }

    fn world_state(&self) -> Result<&WorldState, CommandError> {
        self.state.as_ref().ok_or(CommandError::NoWorldState)
    }

    fn known_account(&self) -> Result<&Address, CommandError> {
        self.account.as_ref().ok_or(CommandError::NoAccount)
    }
}
