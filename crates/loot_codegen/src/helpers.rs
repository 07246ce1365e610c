//! Identifier canonicalization.

/// Convert a raw catalog id to its SCREAMING_SNAKE_CASE enum token.
///
/// Each uppercase letter is emitted as an underscore separator followed by
/// itself; everything else is uppercased in place, so snake_case and
/// camelCase ids land on the same token shape. An id with an uppercase
/// first letter gains a leading underscore; catalog ids start lowercase,
/// and the serialization names in already-shipped save data rely on the
/// tokens staying exactly as this function produces them.
pub fn id_to_enum(id: &str) -> String {
    let mut token = String::with_capacity(id.len() + 4);
    for ch in id.chars() {
        if ch.is_uppercase() {
            token.push('_');
        }
        token.extend(ch.to_uppercase());
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_passes_through() {
        assert_eq!(id_to_enum("goblin"), "GOBLIN");
        assert_eq!(id_to_enum("none"), "NONE");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(id_to_enum("mini_boss"), "MINI_BOSS");
        assert_eq!(id_to_enum("gold_pile"), "GOLD_PILE");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(id_to_enum("miniBoss"), "MINI_BOSS");
        assert_eq!(id_to_enum("amuletOfDestruction"), "AMULET_OF_DESTRUCTION");
    }

    #[test]
    fn test_digits_pass_through() {
        assert_eq!(id_to_enum("sword2"), "SWORD2");
        assert_eq!(id_to_enum("tier2Boss"), "TIER2_BOSS");
    }

    #[test]
    fn test_leading_uppercase_gains_separator() {
        // The separator rule applies to the first character too.
        assert_eq!(id_to_enum("Goblin"), "_GOBLIN");
    }

    #[test]
    fn test_empty_id() {
        assert_eq!(id_to_enum(""), "");
    }
}
