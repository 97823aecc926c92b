/// Ordered substitution table for stat names. Ordering matters: the more
/// specific "... Regeneration" keys must run before their bare stat keys, or
/// "Health Regeneration" would come out as "HP Regeneration".
const SUBSTITUTIONS: [(&str, &str); 12] = [
    ("Magic Resist", "MR"),
    ("Critical Damage", "Crit dmg"),
    ("Attack Speed", "AS"),
    ("Mana Regeneration", "MP5"),
    ("Cooldown Reduction", "CDR"),
    ("Ability Power", "AP"),
    ("Attack Damage", "AD"),
    ("Health Regeneration", "HP5"),
    ("Health", "HP"),
    ("Movement Speed", "MS"),
    ("Gold", "GP10"),
    ("Penetration", "Pen"),
];

/// Shortens a verbose rune or mastery name to a compact display token.
///
/// Rune names are phrased "X of Y"; only the effect name after the last
/// " of " is kept. "Scaling <stat>" becomes "<stat> per Level", then the
/// stat substitution table is applied.
pub fn abbreviate(raw_name: &str) -> String {
    let effect = match raw_name.rfind(" of ") {
        Some(pos) => &raw_name[pos + " of ".len()..],
        None => raw_name,
    };

    let mut name = match effect.strip_prefix("Scaling ") {
        Some(stripped) => format!("{} per Level", stripped),
        None => effect.to_string(),
    };

    for (pattern, replacement) in SUBSTITUTIONS {
        name = name.replace(pattern, replacement);
    }

    name
}

#[cfg(test)]
mod tests {
    use super::abbreviate;

    #[test]
    fn keeps_text_after_last_of() {
        assert_eq!(abbreviate("Greater Mark of Desolation"), "Desolation");
        assert_eq!(abbreviate("Greater Quintessence of Movement Speed"), "MS");
    }

    #[test]
    fn scaling_runes_become_per_level() {
        assert_eq!(abbreviate("Greater Quintessence of Scaling Health"), "HP per Level");
        assert_eq!(abbreviate("Greater Glyph of Scaling Mana Regeneration"), "MP5 per Level");
    }

    #[test]
    fn regeneration_keys_win_over_bare_stats() {
        assert_eq!(abbreviate("Greater Seal of Health Regeneration"), "HP5");
        assert_eq!(abbreviate("Greater Seal of Health"), "HP");
    }

    #[test]
    fn stat_table_is_applied() {
        assert_eq!(abbreviate("Greater Glyph of Magic Resist"), "MR");
        assert_eq!(abbreviate("Greater Glyph of Cooldown Reduction"), "CDR");
        assert_eq!(abbreviate("Greater Mark of Critical Damage"), "Crit dmg");
        assert_eq!(abbreviate("Greater Quintessence of Gold"), "GP10");
        assert_eq!(abbreviate("Greater Mark of Armor Penetration"), "Armor Pen");
    }

    #[test]
    fn names_without_of_pass_through_the_table() {
        assert_eq!(abbreviate("Attack Damage"), "AD");
        assert_eq!(abbreviate("Sorcery"), "Sorcery");
    }
}
