//! Domain Services
//!
//! Pure logic over destinations: shape normalisation, selection and
//! validation. No I/O.

pub mod resolver;
pub mod validator;

pub use resolver::{canonicalize, destination_set, ResolvedRemote, DEFAULT_DESTINATION};
pub use validator::{
    check_destination, ensure_valid, require_destination, validate_all, validate_one,
    DestinationViolation, ViolationMode,
};
