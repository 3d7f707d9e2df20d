//! # ledger-auth
//!
//! Session-based authentication for the ledger dashboard.
//!
//! Provides the access gate (a total decision over path and session claim),
//! the login credential check against stored bcrypt hashes, and opaque
//! session token minting. Session rows themselves live in `ledger-db`.

pub mod claims;
pub mod credentials;
pub mod error;
pub mod gate;
pub mod password;
pub mod session;
pub mod token;

pub use claims::{RequestContext, SessionClaim};
pub use credentials::{Credentials, UserDirectory, authenticate};
pub use error::AuthError;
pub use gate::{AccessGate, GateDecision, GateRoutes, decide};
pub use session::SessionStore;
