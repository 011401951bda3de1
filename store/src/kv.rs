//! The key-value storage trait.

use crate::StoreError;

/// String-keyed, string-valued persistence.
///
/// Reads distinguish "absent" (`Ok(None)`) from "backend failed" (`Err`);
/// callers that favor availability flatten the latter to a default at the
/// service boundary, not here.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value under `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// All keys currently present.
    fn list_keys(&self) -> Result<Vec<String>, StoreError>;

    /// Remove several keys. The default implementation removes one at a
    /// time and stops at the first failure.
    fn remove_many(&self, keys: &[String]) -> Result<(), StoreError> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}
