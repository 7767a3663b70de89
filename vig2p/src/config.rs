use serde::{Deserialize, Serialize};

/// Knobs for [`crate::g2p::G2pVi`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct G2pConfig {
    /// Spell out standalone digits 0-9 before tokenization.
    pub expand_digits: bool,
    /// Run the table consistency check when the front end is built.
    pub check_tables: bool,
}

impl Default for G2pConfig {
    fn default() -> Self {
        Self {
            expand_digits: false,
            check_tables: true,
        }
    }
}
