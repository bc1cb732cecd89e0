/// Sort keys accepted by the genre listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreOrder {
    Name,
    Ranking,
}

impl GenreOrder {
    pub const ALLOWED: [&'static str; 2] = ["name", "ranking"];

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "ranking" => Some(Self::Ranking),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Ranking => "ranking",
        }
    }
}
