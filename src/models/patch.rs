use serde::{Deserialize, Deserializer};

/// One field of a partial update.
///
/// `Absent` when the key is missing from the request body, `Null` when it is
/// present as `null`, `Set` otherwise. Fields must carry `#[serde(default)]`
/// so a missing key lands on `Absent`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Set(T),
}

impl<T> Patch<T> {
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(v) => Some(v),
            _ => None,
        }
    }

    /// Writes the patch into `slot`. `Null` resets the slot to `default`.
    /// Returns true when the slot was touched.
    pub fn apply_to(self, slot: &mut T, default: impl FnOnce() -> T) -> bool {
        match self {
            Patch::Absent => false,
            Patch::Null => {
                *slot = default();
                true
            }
            Patch::Set(v) => {
                *slot = v;
                true
            }
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Set(v),
            None => Patch::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default)]
        name: Patch<String>,
        #[serde(default)]
        count: Patch<u32>,
    }

    #[test]
    fn test_absent_null_and_set_are_distinct() {
        let body: Body = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(body.name, Patch::Null);
        assert_eq!(body.count, Patch::Absent);

        let body: Body = serde_json::from_str(r#"{"name": "x", "count": 3}"#).unwrap();
        assert_eq!(body.name, Patch::Set("x".to_string()));
        assert_eq!(body.count, Patch::Set(3));
    }

    #[test]
    fn test_apply_to() {
        let mut value = "old".to_string();
        assert!(!Patch::Absent.apply_to(&mut value, String::new));
        assert_eq!(value, "old");

        assert!(Patch::Set("new".to_string()).apply_to(&mut value, String::new));
        assert_eq!(value, "new");

        assert!(Patch::Null.apply_to(&mut value, String::new));
        assert_eq!(value, "");
    }
}
