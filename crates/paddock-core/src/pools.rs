//! Built-in horse name pool and colour palette.

/// Names drawn (without replacement) when generating a roster.
pub const HORSE_NAMES: [&str; 30] = [
    "A BEAUTIFUL MIND",
    "ABDÜL",
    "ABDÜL HAKEEM",
    "AYBAKAN",
    "BİG BOSS",
    "BLONDE ANGEL",
    "BRAVE HEART",
    "COLT",
    "DAY STAR",
    "DERBENT",
    "EL NINO",
    "ELUSIVE",
    "FAIR HILL",
    "GÜMÜŞDERE",
    "INVINCIBLE",
    "KANEKO",
    "LIFECHAIN",
    "MARGARET HALL",
    "MISTY",
    "PEGASUS",
    "PHANTOM",
    "SECRETARIAT",
    "SHADOWFAX",
    "SULTAN OF KAYRA",
    "THUNDERBOLT",
    "GRACE HOPPER",
    "JOAN CLARKE",
    "ADA LOVELACE",
    "WAR ADMIRAL",
    "BLACK BEAUTY",
];

/// Initial `available_colors` of a fresh state.
pub const DEFAULT_PALETTE: [&str; 20] = [
    "#409EFF", "#67C23A", "#E6A23C", "#F56C6C", "#909399", "#1989FA", "#41B883", "#F16F5C",
    "#F7BA2A", "#8E44AD", "#3498DB", "#2ECC71", "#F39C12", "#E74C3C", "#9B59B6", "#34495E",
    "#16A085", "#27AE60", "#E67E22", "#D35400",
];

/// Owned copy of [`HORSE_NAMES`].
pub fn default_names() -> Vec<String> {
    HORSE_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Owned copy of [`DEFAULT_PALETTE`].
pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let set: HashSet<_> = HORSE_NAMES.iter().collect();
        assert_eq!(set.len(), HORSE_NAMES.len());
    }

    #[test]
    fn palette_entries_are_unique_hex() {
        let set: HashSet<_> = DEFAULT_PALETTE.iter().collect();
        assert_eq!(set.len(), DEFAULT_PALETTE.len());
        for c in DEFAULT_PALETTE {
            assert_eq!(c.len(), 7, "{c}");
            assert!(c.starts_with('#'));
            assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
        }
    }
}
