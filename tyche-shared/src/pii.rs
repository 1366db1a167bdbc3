use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wraps personal data (emails, phone numbers) so it never shows up in log lines.
///
/// `Debug` and `Display` print a fixed mask; `Serialize` passes the real value
/// through, since API responses echo submissions back to their author.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Masked<T>(pub T);

const MASK: &str = "********";

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_value_in_logs() {
        let email = Masked("jane@example.com");
        assert_eq!(format!("{}", email), "********");
        assert_eq!(format!("{:?}", email), "********");
    }

    #[test]
    fn test_masked_serializes_real_value() {
        let email = Masked("jane@example.com".to_string());
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"jane@example.com\"");
    }
}
