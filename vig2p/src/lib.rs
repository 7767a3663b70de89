pub mod config;
pub mod error;
pub mod features;
pub mod g2p;
pub mod utils;

pub use config::G2pConfig;
pub use error::G2pError;
pub use g2p::{g2p, G2pResult, G2pVi, Tone};
