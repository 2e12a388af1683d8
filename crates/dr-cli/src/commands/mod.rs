pub mod eval;
pub mod roll;
pub mod stats;

use std::path::Path;

use dr_core::RollerConfig;
use tracing::debug;

/// Load the config file if one was given, then apply a command-line seed.
pub fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<RollerConfig, String> {
    let config = RollerConfig::load(path, seed).map_err(|e| e.to_string())?;
    debug!(?config, "roller config");
    Ok(config)
}
