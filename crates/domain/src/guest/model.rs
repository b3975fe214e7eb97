use std::hash::{Hash, Hasher};

use common::GuestId;
use serde::{Deserialize, Serialize};
use store::StoredEntity;

use super::GuestError;

/// Guest gender as recorded on the registration card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// A registered hotel guest.
///
/// Identity is the guest id alone: two `Guest` values with the same id are
/// equal regardless of name or gender, matching store lookup semantics.
/// Names are validated on construction and on every rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    id: GuestId,
    first_name: String,
    last_name: String,
    gender: Gender,
}

impl Guest {
    /// Creates a guest. Names must be non-empty and contain no whitespace.
    pub fn new(
        id: GuestId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
    ) -> Result<Self, GuestError> {
        let first_name = validated_name(first_name.into())?;
        let last_name = validated_name(last_name.into())?;
        Ok(Self {
            id,
            first_name,
            last_name,
            gender,
        })
    }

    pub fn id(&self) -> GuestId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Replaces both names, re-running name validation. Neither name changes
    /// when either is invalid.
    pub fn rename(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<(), GuestError> {
        let first_name = validated_name(first_name.into())?;
        let last_name = validated_name(last_name.into())?;
        self.first_name = first_name;
        self.last_name = last_name;
        Ok(())
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }
}

fn validated_name(name: String) -> Result<String, GuestError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(GuestError::InvalidName { name });
    }
    Ok(name)
}

impl PartialEq for Guest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Guest {}

impl Hash for Guest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl StoredEntity for Guest {
    type Id = GuestId;
    const KIND: &'static str = "guest";

    fn id(&self) -> GuestId {
        self.id
    }

    fn with_id(mut self, id: GuestId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_are_accepted() {
        let guest = Guest::new(GuestId::new(1), "Maria", "Petrova", Gender::Female).unwrap();
        assert_eq!(guest.first_name(), "Maria");
        assert_eq!(guest.last_name(), "Petrova");
        assert_eq!(guest.gender(), Gender::Female);
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = Guest::new(GuestId::new(1), "", "Petrova", Gender::Female);
        assert!(matches!(result, Err(GuestError::InvalidName { .. })));
    }

    #[test]
    fn whitespace_in_name_is_rejected() {
        for bad in ["An na", " ", "\t", "Anna "] {
            let result = Guest::new(GuestId::new(1), bad, "Petrova", Gender::Female);
            assert!(matches!(result, Err(GuestError::InvalidName { .. })), "{bad:?}");
        }
    }

    #[test]
    fn rename_keeps_old_names_on_failure() {
        let mut guest = Guest::new(GuestId::new(1), "Maria", "Petrova", Gender::Female).unwrap();
        assert!(guest.rename("Ana", "bad name").is_err());
        assert_eq!(guest.first_name(), "Maria");
        assert_eq!(guest.last_name(), "Petrova");

        guest.rename("Ana", "Dimitrova").unwrap();
        assert_eq!(guest.first_name(), "Ana");
        assert_eq!(guest.last_name(), "Dimitrova");
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = Guest::new(GuestId::new(1), "Maria", "Petrova", Gender::Female).unwrap();
        let b = Guest::new(GuestId::new(1), "Ivan", "Ivanov", Gender::Male).unwrap();
        let c = Guest::new(GuestId::new(2), "Maria", "Petrova", Gender::Female).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serialization_roundtrip() {
        let guest = Guest::new(GuestId::new(5), "Ivan", "Ivanov", Gender::Male).unwrap();
        let json = serde_json::to_string(&guest).unwrap();
        let back: Guest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), guest.id());
        assert_eq!(back.first_name(), guest.first_name());
    }
}
