//! Plugin runtime configuration.
use std::env;
use std::time::Duration;

use hex_core::{Address, OriginConvention};

/// Which lookup resolves the player's seeker from a snapshot.
///
/// Deployments with only a numeric seeker pool derive the id from the
/// account; deployments that expose ownership metadata match the owner
/// address. One model is canonical per deployment, chosen here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OwnershipModel {
    /// Seeker id equals the low 32 bits of the account address.
    #[default]
    DerivedId,
    /// Explicit owner-address match on the entity, null owner rejected.
    OwnerAddress,
}

/// Configuration for one running plugin instance.
#[derive(Clone, Debug)]
pub struct PluginConfig {
    /// Coordinate-origin convention; applied to every geometry call.
    pub origin: OriginConvention,
    pub ownership: OwnershipModel,
    /// Contract address of the extension whose buildings gate the action.
    pub extension_id: Option<Address>,
    /// State query poll cadence; the subscription pushes independently.
    pub poll_interval: Duration,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            origin: OriginConvention::default(),
            ownership: OwnershipModel::default(),
            extension_id: None,
            poll_interval: Duration::from_millis(2000),
        }
    }
}

impl PluginConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `PLUGIN_TOP_LEFT_ORIGIN` (truthy switches the direction tables)
    /// - `PLUGIN_OWNER_ADDRESS_LOOKUP` (truthy selects owner-address match)
    /// - `PLUGIN_EXTENSION_ID`
    /// - `PLUGIN_POLL_INTERVAL_MS`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if read_env_flag("PLUGIN_TOP_LEFT_ORIGIN") {
            config.origin = OriginConvention::TopLeft;
        }

        if read_env_flag("PLUGIN_OWNER_ADDRESS_LOOKUP") {
            config.ownership = OwnershipModel::OwnerAddress;
        }

        if let Ok(raw) = env::var("PLUGIN_EXTENSION_ID") {
            config.extension_id = Address::parse(&raw).ok();
        }

        if let Some(millis) = read_env::<u64>("PLUGIN_POLL_INTERVAL_MS") {
            config.poll_interval = Duration::from_millis(millis.max(1));
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_flag(key: &str) -> bool {
    matches!(
        env::var(key).as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE") | Ok("yes")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_bottom_left_origin_and_derived_ids() {
        let config = PluginConfig::default();
        assert_eq!(config.origin, OriginConvention::BottomLeft);
        assert_eq!(config.ownership, OwnershipModel::DerivedId);
        assert_eq!(config.poll_interval, Duration::from_millis(2000));
        assert!(config.extension_id.is_none());
    }
}
