//! Argument validation.
//!
//! A text argument is missing when it is absent or blank. Numeric zero is a
//! legitimate value; negative quantities and prices are not. Presence is
//! checked explicitly, so `stock: 0` or `buyPrice: 0` is accepted where a
//! truthiness test would have reported the fields as missing.

use async_graphql::ID;
use jiff::Timestamp;
use tally_app::ids::{ObjectIdError, TypedId};
use thiserror::Error;

pub(crate) const MISSING_STORE_ID: &str = "Please provide a storeId";
pub(crate) const MISSING_STORE_AND_PRODUCT_ID: &str = "Please provide a storeId and productId";
pub(crate) const MISSING_REQUIRED_FIELDS: &str = "Please fill all the fields which are required";

#[derive(Debug, Error)]
pub(crate) enum ValidationError {
    #[error("{0}")]
    Missing(&'static str),

    #[error("{field} is not a valid id")]
    InvalidId {
        field: &'static str,
        #[source]
        source: ObjectIdError,
    },

    #[error("{field} must be an RFC 3339 timestamp")]
    InvalidDate {
        field: &'static str,
        #[source]
        source: jiff::Error,
    },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.trim().is_empty())
}

/// Fails with `message` unless every value is present.
pub(crate) fn require<'a>(
    values: impl IntoIterator<Item = Option<&'a str>>,
    message: &'static str,
) -> Result<(), ValidationError> {
    if values.into_iter().all(is_present) {
        Ok(())
    } else {
        Err(ValidationError::Missing(message))
    }
}

/// Text of an optional id argument.
pub(crate) fn id_text(id: Option<&ID>) -> Option<&str> {
    id.map(|id| id.as_str())
}

/// Parses an id argument that must be supplied, failing with `message` when it is not.
pub(crate) fn require_id<T>(
    field: &'static str,
    id: Option<&ID>,
    message: &'static str,
) -> Result<TypedId<T>, ValidationError> {
    match id_text(id) {
        Some(id) if is_present(Some(id)) => parse_id(field, id),
        _ => Err(ValidationError::Missing(message)),
    }
}

pub(crate) fn parse_id<T>(field: &'static str, value: &str) -> Result<TypedId<T>, ValidationError> {
    TypedId::parse_str(value.trim()).map_err(|source| ValidationError::InvalidId { field, source })
}

pub(crate) fn parse_timestamp(
    field: &'static str,
    value: &str,
) -> Result<Timestamp, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|source| ValidationError::InvalidDate { field, source })
}

pub(crate) fn non_negative(field: &'static str, value: i32) -> Result<i32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use tally_app::domain::stores::records::StoreId;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn require_accepts_filled_values() -> TestResult {
        require([Some("Pepsi"), Some("Drink")], MISSING_REQUIRED_FIELDS)?;

        Ok(())
    }

    #[test]
    fn require_rejects_absent_and_blank_values() {
        for values in [[Some("Pepsi"), None], [Some("Pepsi"), Some("")], [Some("  "), Some("x")]] {
            let result = require(values, MISSING_REQUIRED_FIELDS);

            assert!(
                matches!(result, Err(ValidationError::Missing(MISSING_REQUIRED_FIELDS))),
                "expected missing fields for {values:?}"
            );
        }
    }

    #[test]
    fn parse_id_accepts_object_id_hex() -> TestResult {
        let id: StoreId = parse_id("storeId", "66681bf2338fe8d36fd5663b")?;

        assert_eq!(id.to_hex(), "66681bf2338fe8d36fd5663b");

        Ok(())
    }

    #[test]
    fn parse_id_rejects_other_text() {
        let result = parse_id::<()>("storeId", "store-1");

        assert!(
            matches!(result, Err(ValidationError::InvalidId { field: "storeId", .. })),
            "expected invalid id, got {result:?}"
        );
    }

    #[test]
    fn require_id_reports_missing_before_parsing() {
        for id in [None, Some(ID(String::new())), Some(ID(" ".to_string()))] {
            let result = require_id::<()>("_id", id.as_ref(), MISSING_STORE_ID);

            assert!(
                matches!(result, Err(ValidationError::Missing(MISSING_STORE_ID))),
                "expected missing id for {id:?}"
            );
        }
    }

    #[test]
    fn require_id_parses_supplied_id() -> TestResult {
        let id = ID("66681bf2338fe8d36fd5663b".to_string());

        let store: StoreId = require_id("_id", Some(&id), MISSING_STORE_ID)?;

        assert_eq!(store.to_hex(), "66681bf2338fe8d36fd5663b");

        Ok(())
    }

    #[test]
    fn parse_timestamp_accepts_rfc3339() -> TestResult {
        let timestamp = parse_timestamp("createdAt", "2021-04-28T06:09:02.911Z")?;

        assert_eq!(timestamp.to_string(), "2021-04-28T06:09:02.911Z");

        Ok(())
    }

    #[test]
    fn parse_timestamp_rejects_free_text() {
        assert!(
            parse_timestamp("createdAt", "yesterday").is_err(),
            "free text is not a timestamp"
        );
    }

    #[test]
    fn zero_is_a_valid_quantity() -> TestResult {
        assert_eq!(non_negative("stock", 0)?, 0);

        Ok(())
    }

    #[test]
    fn negative_quantity_is_rejected() {
        assert!(
            matches!(
                non_negative("stock", -1),
                Err(ValidationError::Negative { field: "stock" })
            ),
            "negative stock must be rejected"
        );
    }
}
