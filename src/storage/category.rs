use std::{convert::Infallible, fmt::Display, str::FromStr};

/// Item category.
///
/// The set of categories is closed; any label the warehouse does not know about
/// is treated as `Uncategorized` rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    Antibiotic,
    Painkiller,
    Antibacterial,
    Antihistamine,
    Supplement,
    Antacid,
    #[default]
    Uncategorized,
}

impl Category {
    /// Maps a label to its category. Matching is exact and case-sensitive.
    pub fn parse(label: &str) -> Self {
        match label {
            "Antibiotic" => Self::Antibiotic,
            "Painkiller" => Self::Painkiller,
            "Antibacterial" => Self::Antibacterial,
            "Antihistamine" => Self::Antihistamine,
            "Supplement" => Self::Supplement,
            "Antacid" => Self::Antacid,
            _ => Self::Uncategorized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Antibiotic => "Antibiotic",
            Self::Painkiller => "Painkiller",
            Self::Antibacterial => "Antibacterial",
            Self::Antihistamine => "Antihistamine",
            Self::Supplement => "Supplement",
            Self::Antacid => "Antacid",
            Self::Uncategorized => "None",
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(Category::parse("Antibiotic"), Category::Antibiotic);
        assert_eq!(Category::parse("Painkiller"), Category::Painkiller);
        assert_eq!(Category::parse("Antibacterial"), Category::Antibacterial);
        assert_eq!(Category::parse("Antihistamine"), Category::Antihistamine);
        assert_eq!(Category::parse("Supplement"), Category::Supplement);
        assert_eq!(Category::parse("Antacid"), Category::Antacid);
    }

    #[test]
    fn unknown_labels_are_uncategorized() {
        assert_eq!(Category::parse("Unknown"), Category::Uncategorized);
        assert_eq!(Category::parse(""), Category::Uncategorized);
        assert_eq!(Category::parse("painkiller"), Category::Uncategorized);
        assert_eq!("None".parse::<Category>(), Ok(Category::Uncategorized));
    }

    #[test]
    fn uncategorized_formats_as_none() {
        assert_eq!(Category::Uncategorized.to_string(), "None");
        assert_eq!(Category::Antacid.to_string(), "Antacid");
        assert_eq!(format!("{:<8}|", Category::Uncategorized), "None    |");
    }

    #[test]
    fn labels_round_trip() {
        for category in [
            Category::Antibiotic,
            Category::Painkiller,
            Category::Antibacterial,
            Category::Antihistamine,
            Category::Supplement,
            Category::Antacid,
            Category::Uncategorized,
        ] {
            assert_eq!(Category::parse(category.as_str()), category);
        }
    }
}
