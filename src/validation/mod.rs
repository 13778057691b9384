//! Input validation.
//!
//! - [`validator`] - field predicates (address syntax, mask shape, host bounds, class)
//! - [`outcome`] - per-field and whole-request outcomes with display messages

mod outcome;
mod validator;

pub use outcome::{
    error_message, validate_complete_input, validate_host_count, validate_ip, validate_mask,
    ErrorKind, Mode, ValidationFailure, ValidationOutcome,
};
pub use validator::{
    classify_address, is_mask_appropriate_for_class, is_valid_host_count, is_valid_ipv4,
    is_valid_subnet_mask,
};
