// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cineseat::CoreError;
use cineseat_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

fn invalid_input(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

fn rule_violation(rule: &str, err: &DomainError) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: rule.to_string(),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::InvalidDate { .. } | DomainError::DateArithmeticOverflow { .. } => {
            invalid_input("date", &err)
        }
        DomainError::InvalidTime { .. } => invalid_input("time", &err),
        DomainError::ParseError { input, error } => ApiError::InvalidInput {
            field: String::from("input"),
            message: format!("Failed to parse '{input}': {error}"),
        },
        DomainError::InvalidGrid { .. } => invalid_input("grid", &err),
        DomainError::InvalidTicketCount { .. } => invalid_input("ticket_count", &err),
        DomainError::InvalidScreeningInterval { .. } => invalid_input("interval_minutes", &err),
        DomainError::SeatOutOfGrid { .. } => rule_violation("seat_in_grid", &err),
        DomainError::SeatCapacityExceeded { .. } => rule_violation("seat_capacity", &err),
        DomainError::TicketBelowPickedSeats { .. } => {
            rule_violation("ticket_covers_picked_seats", &err)
        }
        DomainError::MissingDate => rule_violation("date_selected", &err),
        DomainError::MissingTime => rule_violation("time_selected", &err),
        DomainError::SeatCountMismatch { .. } => rule_violation("seat_count_matches_ticket", &err),
        DomainError::PriceMismatch { .. } => rule_violation("price_matches_quote", &err),
        DomainError::DateOutOfRange { .. } => rule_violation("date_in_window", &err),
        DomainError::TimeNotScheduled { .. } => rule_violation("time_scheduled", &err),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
