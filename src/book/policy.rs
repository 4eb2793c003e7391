//! Insert policy for records whose name is already taken.

use std::fmt;
use std::str::FromStr;

/// What [`AddressBook::add_record`](super::AddressBook::add_record) does on a
/// name collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPolicy {
    /// Replace the stored record, keeping its position in listing order.
    #[default]
    Upsert,
    /// Reject the insert with `AddressBookError::AlreadyExists`.
    InsertOrFail,
}

impl InsertPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertPolicy::Upsert => "upsert",
            InsertPolicy::InsertOrFail => "insert_or_fail",
        }
    }
}

impl FromStr for InsertPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upsert" => Ok(InsertPolicy::Upsert),
            "insert_or_fail" | "insert-or-fail" => Ok(InsertPolicy::InsertOrFail),
            other => Err(format!(
                "Must be 'upsert' or 'insert_or_fail', got: {}",
                other
            )),
        }
    }
}

impl fmt::Display for InsertPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("upsert".parse::<InsertPolicy>(), Ok(InsertPolicy::Upsert));
        assert_eq!(
            "Insert_Or_Fail".parse::<InsertPolicy>(),
            Ok(InsertPolicy::InsertOrFail)
        );
        assert_eq!(
            "insert-or-fail".parse::<InsertPolicy>(),
            Ok(InsertPolicy::InsertOrFail)
        );
        assert!("never".parse::<InsertPolicy>().is_err());
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [InsertPolicy::Upsert, InsertPolicy::InsertOrFail] {
            assert_eq!(policy.to_string().parse::<InsertPolicy>(), Ok(policy));
        }
    }
}
