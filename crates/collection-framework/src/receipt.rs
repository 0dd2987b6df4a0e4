//! # Receipts
//!
//! Mutations answer with a [`Receipt`]: a transport-neutral outcome plus the
//! human-readable message the caller sees. A missing id is an ordinary outcome here,
//! not an error; the boundary turns it into a 404-equivalent.

use crate::entity::CollectionEntity;

/// Result kind of a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Ok,
    NotFound,
}

impl Outcome {
    /// The HTTP status code this outcome corresponds to.
    pub fn status_code(self) -> u16 {
        match self {
            Outcome::Created => 201,
            Outcome::Ok => 200,
            Outcome::NotFound => 404,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub outcome: Outcome,
    pub message: String,
}

impl Receipt {
    pub fn created<T: CollectionEntity>(record: &T) -> Self {
        Self {
            outcome: Outcome::Created,
            message: record.created_message(),
        }
    }

    pub fn renamed(old: &str, new: &str) -> Self {
        Self {
            outcome: Outcome::Ok,
            message: format!("{old} renamed to {new}"),
        }
    }

    pub fn deleted<T: CollectionEntity>(record: &T) -> Self {
        Self {
            outcome: Outcome::Ok,
            message: format!("Deleted {} {}", T::KIND, record.label()),
        }
    }

    pub fn update_missing(id: &str) -> Self {
        Self {
            outcome: Outcome::NotFound,
            message: format!(
                "{id} is not found. Use PUT with a correct ID to modify or use POST to create new entry."
            ),
        }
    }

    pub fn delete_missing(id: &str) -> Self {
        Self {
            outcome: Outcome::NotFound,
            message: format!("{id} is not found. Use DELETE with a correct ID to delete."),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.outcome == Outcome::NotFound
    }
}

/// Reply to a create: the stored record (with its new id) and the receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct Created<T> {
    pub record: T,
    pub receipt: Receipt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Outcome::Created.status_code(), 201);
        assert_eq!(Outcome::Ok.status_code(), 200);
        assert_eq!(Outcome::NotFound.status_code(), 404);
    }

    #[test]
    fn test_missing_messages_name_the_id() {
        let update = Receipt::update_missing("hos042");
        assert!(update.is_not_found());
        assert_eq!(
            update.message,
            "hos042 is not found. Use PUT with a correct ID to modify or use POST to create new entry."
        );

        let delete = Receipt::delete_missing("hos042");
        assert!(delete.is_not_found());
        assert!(delete.message.starts_with("hos042 is not found."));
    }

    #[test]
    fn test_renamed_message() {
        let receipt = Receipt::renamed("General", "National");
        assert_eq!(receipt.outcome, Outcome::Ok);
        assert_eq!(receipt.message, "General renamed to National");
    }
}
