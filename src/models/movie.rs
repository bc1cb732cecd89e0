use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Sort keys accepted by the movie listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieOrder {
    Title,
    Rating,
    ReleaseDate,
    Length,
    Awards,
}

impl MovieOrder {
    pub const ALLOWED: [&'static str; 5] = ["title", "rating", "release_date", "length", "awards"];

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "title" => Some(Self::Title),
            "rating" => Some(Self::Rating),
            "release_date" => Some(Self::ReleaseDate),
            "length" => Some(Self::Length),
            "awards" => Some(Self::Awards),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Rating => "rating",
            Self::ReleaseDate => "release_date",
            Self::Length => "length",
            Self::Awards => "awards",
        }
    }
}

/// A validated movie ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub rating: f64,
    pub awards: i32,
    pub release_date: DateTime<Utc>,
    pub length: Option<i32>,
    pub genre_id: Option<i32>,
}

/// A validated partial update.
///
/// `None` leaves the stored value untouched. For the nullable columns the
/// inner `None` clears the column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub rating: Option<f64>,
    pub awards: Option<i32>,
    pub release_date: Option<DateTime<Utc>>,
    pub length: Option<Option<i32>>,
    pub genre_id: Option<Option<i32>>,
}

impl MovieChanges {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.rating.is_none()
            && self.awards.is_none()
            && self.release_date.is_none()
            && self.length.is_none()
            && self.genre_id.is_none()
    }
}

/// Parses the release date formats clients send: a bare date, a
/// `YYYY-MM-DD HH:MM:SS` datetime (read as UTC), or RFC 3339.
#[must_use]
pub fn parse_release_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Renders a release date as `YYYY-MM-DDTHH:MM:SS+00:00`.
#[must_use]
pub fn format_release_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_order_keys() {
        assert_eq!(MovieOrder::parse("rating"), Some(MovieOrder::Rating));
        assert_eq!(
            MovieOrder::parse("release_date"),
            Some(MovieOrder::ReleaseDate)
        );
        assert_eq!(MovieOrder::parse("genre_id"), None);
        assert_eq!(MovieOrder::parse(""), None);
    }

    #[test]
    fn parse_bare_date() {
        let parsed = parse_release_date("2010-10-04").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2010, 10, 4, 0, 0, 0).unwrap());
    }

    #[test]
    fn parse_sql_datetime() {
        let parsed = parse_release_date("1997-09-04 12:30:00").unwrap();
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(1997, 9, 4, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn parse_rfc3339_with_offset() {
        let parsed = parse_release_date("2004-07-04T02:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2004, 7, 4, 0, 0, 0).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_release_date("yesterday").is_none());
        assert!(parse_release_date("2010-13-40").is_none());
        assert!(parse_release_date("").is_none());
    }

    #[test]
    fn format_uses_explicit_offset() {
        let date = Utc.with_ymd_and_hms(2010, 10, 4, 0, 0, 0).unwrap();
        assert_eq!(format_release_date(&date), "2010-10-04T00:00:00+00:00");
    }

    #[test]
    fn empty_changes() {
        assert!(MovieChanges::default().is_empty());
        let changes = MovieChanges {
            length: Some(None),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
