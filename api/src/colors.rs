/// Kit colours for a national team, as `#RRGGBB` hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamColors {
    pub primary: &'static str,
    pub secondary: &'static str,
}

const fn kit(primary: &'static str, secondary: &'static str) -> TeamColors {
    TeamColors { primary, secondary }
}

pub const DEFAULT_COLORS: TeamColors = kit("#000000", "#FFFFFF");

const TEAM_COLORS: &[(&str, TeamColors)] = &[
    ("Argentina", kit("#75AADB", "#FFFFFF")),
    ("Brazil", kit("#F7E03C", "#00A859")),
    ("France", kit("#002395", "#FFFFFF")),
    ("Germany", kit("#000000", "#FFFFFF")),
    ("Italy", kit("#0066CC", "#FFFFFF")),
    ("Spain", kit("#AA151B", "#FFCC00")),
    ("England", kit("#FFFFFF", "#CC0000")),
    ("Netherlands", kit("#FF4B00", "#FFFFFF")),
    ("Portugal", kit("#FF0000", "#00A859")),
    ("Belgium", kit("#FFD700", "#000000")),
    ("Uruguay", kit("#55A3D9", "#FFFFFF")),
    ("Croatia", kit("#FF0000", "#FFFFFF")),
    ("Mexico", kit("#006847", "#FFFFFF")),
    ("Sweden", kit("#FFCC00", "#0000FF")),
    ("Denmark", kit("#C60C30", "#FFFFFF")),
    ("Colombia", kit("#FCD116", "#0000FF")),
    ("Switzerland", kit("#D52B1E", "#FFFFFF")),
    ("Russia", kit("#D52B1E", "#FFFFFF")),
    ("Japan", kit("#BC002D", "#FFFFFF")),
    ("South Korea", kit("#C60C30", "#FFFFFF")),
    ("Australia", kit("#FFCC00", "#0000FF")),
    ("Nigeria", kit("#008751", "#FFFFFF")),
    ("Senegal", kit("#00853F", "#FFFFFF")),
    ("Morocco", kit("#C1272D", "#FFFFFF")),
    ("Iran", kit("#DA0000", "#FFFFFF")),
    ("Saudi Arabia", kit("#006C35", "#FFFFFF")),
    ("Serbia", kit("#C6363C", "#FFFFFF")),
    ("Poland", kit("#DC143C", "#FFFFFF")),
    ("Peru", kit("#D91023", "#FFFFFF")),
    ("Iceland", kit("#003897", "#FFFFFF")),
    ("Costa Rica", kit("#002B7F", "#FFFFFF")),
    ("Panama", kit("#FF0000", "#FFFFFF")),
    ("Tunisia", kit("#E70013", "#FFFFFF")),
    ("Egypt", kit("#CE1126", "#FFFFFF")),
    ("USA", kit("#3C3B6E", "#FFFFFF")),
    ("United States", kit("#3C3B6E", "#FFFFFF")),
    ("Canada", kit("#FF0000", "#FFFFFF")),
    ("Qatar", kit("#8A1538", "#FFFFFF")),
    ("Ghana", kit("#006B3F", "#FFFFFF")),
    ("Cameroon", kit("#007A5E", "#FFFFFF")),
    ("Ecuador", kit("#FFD100", "#0000FF")),
    ("Wales", kit("#D52834", "#FFFFFF")),
    ("Scotland", kit("#003366", "#FFFFFF")),
    ("Paraguay", kit("#FF0000", "#FFFFFF")),
    ("Chile", kit("#D52B1E", "#FFFFFF")),
    ("Romania", kit("#FFCC00", "#0000FF")),
    ("Bulgaria", kit("#00966E", "#FFFFFF")),
    ("Norway", kit("#BA0C2F", "#FFFFFF")),
    ("Turkey", kit("#E30A17", "#FFFFFF")),
    ("Greece", kit("#0D5EAF", "#FFFFFF")),
    ("Czech Republic", kit("#D7141A", "#FFFFFF")),
    ("Slovakia", kit("#0B4EA2", "#FFFFFF")),
    ("Slovenia", kit("#005DA4", "#FFFFFF")),
    ("Ukraine", kit("#FFD700", "#0000FF")),
    ("Hungary", kit("#C8102E", "#FFFFFF")),
    ("Austria", kit("#ED2939", "#FFFFFF")),
    ("South Africa", kit("#007749", "#FFFFFF")),
    ("Ivory Coast", kit("#F77F00", "#FFFFFF")),
    ("Côte d'Ivoire", kit("#F77F00", "#FFFFFF")),
    ("Algeria", kit("#006233", "#FFFFFF")),
    ("Angola", kit("#FF0000", "#FFFFFF")),
    ("Togo", kit("#006A4E", "#FFFFFF")),
    ("Zaire", kit("#FFD700", "#0000FF")),
    ("Honduras", kit("#0073CF", "#FFFFFF")),
    ("El Salvador", kit("#005BAC", "#FFFFFF")),
    ("Jamaica", kit("#FED100", "#000000")),
    ("Trinidad and Tobago", kit("#EF3340", "#FFFFFF")),
    ("New Zealand", kit("#000000", "#FFFFFF")),
    ("North Korea", kit("#C60C30", "#FFFFFF")),
    ("China", kit("#FFDE00", "#FF0000")),
    ("Iraq", kit("#007A3D", "#FFFFFF")),
    ("Kuwait", kit("#007A3D", "#FFFFFF")),
    ("United Arab Emirates", kit("#00732F", "#FFFFFF")),
    ("Israel", kit("#0038A8", "#FFFFFF")),
    ("Cuba", kit("#002A8F", "#FFFFFF")),
    ("Haiti", kit("#00209F", "#FFFFFF")),
    ("Bolivia", kit("#007A33", "#FFFFFF")),
    ("Venezuela", kit("#8B1A1A", "#FFFFFF")),
];

/// Kit colours for `team`, or [`DEFAULT_COLORS`] when the team is unmapped.
pub fn team_colors(team: &str) -> TeamColors {
    TEAM_COLORS
        .iter()
        .find(|(name, _)| *name == team)
        .map(|(_, colors)| *colors)
        .unwrap_or(DEFAULT_COLORS)
}

/// `"#75AADB"` → `(0x75, 0xAA, 0xDB)`.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_team_uses_table() {
        assert_eq!(team_colors("Argentina"), kit("#75AADB", "#FFFFFF"));
        assert_eq!(team_colors("Spain").secondary, "#FFCC00");
    }

    #[test]
    fn unmapped_team_falls_back_to_default() {
        assert_eq!(team_colors("Atlantis"), DEFAULT_COLORS);
        assert_eq!(team_colors(""), DEFAULT_COLORS);
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_rgb("#75AADB"), Some((0x75, 0xAA, 0xDB)));
        assert_eq!(hex_to_rgb("ffffff"), Some((255, 255, 255)));
        assert_eq!(hex_to_rgb("#FFF"), None);
        assert_eq!(hex_to_rgb("#GG0000"), None);
    }

    #[test]
    fn every_table_entry_is_valid_hex() {
        for (team, colors) in TEAM_COLORS {
            assert!(hex_to_rgb(colors.primary).is_some(), "{team} primary");
            assert!(hex_to_rgb(colors.secondary).is_some(), "{team} secondary");
        }
    }
}
