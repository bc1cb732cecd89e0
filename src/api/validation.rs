use super::ApiError;
use crate::models::genre::GenreOrder;
use crate::models::movie::MovieOrder;

/// Treats `?key=` the same as a missing key.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Non-numeric ids are rejected; numeric ids past the `i32` range cannot
/// exist, so they resolve to a 404 for `resource`.
pub fn validate_id(raw: &str, resource: &str) -> Result<i32, ApiError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::validation(format!(
            "Invalid id: '{raw}'. The id must be a number"
        )));
    }

    trimmed
        .parse::<i32>()
        .map_err(|_| ApiError::not_found(resource, trimmed))
}

pub fn validate_limit(raw: Option<&str>, default: u64, max: u64) -> Result<u64, ApiError> {
    let Some(raw) = present(raw) else {
        return Ok(default);
    };

    match raw.parse::<u64>() {
        Ok(limit) if (1..=max).contains(&limit) => Ok(limit),
        _ => Err(ApiError::validation(format!(
            "Invalid limit: {raw}. Limit must be between 1 and {max}"
        ))),
    }
}

pub fn validate_offset(raw: Option<&str>) -> Result<u64, ApiError> {
    let Some(raw) = present(raw) else {
        return Ok(0);
    };

    raw.parse::<u64>().map_err(|_| {
        ApiError::validation(format!(
            "Invalid offset: {raw}. Offset must be a non-negative integer"
        ))
    })
}

pub fn validate_genre_order(raw: Option<&str>) -> Result<Option<GenreOrder>, ApiError> {
    present(raw)
        .map(|value| {
            GenreOrder::parse(value).ok_or_else(|| {
                ApiError::validation(format!(
                    "Invalid order: '{value}'. Allowed values are {}",
                    GenreOrder::ALLOWED.join(", ")
                ))
            })
        })
        .transpose()
}

pub fn validate_movie_order(raw: Option<&str>) -> Result<Option<MovieOrder>, ApiError> {
    present(raw)
        .map(|value| {
            MovieOrder::parse(value).ok_or_else(|| {
                ApiError::validation(format!(
                    "Invalid order: '{value}'. Allowed values are {}",
                    MovieOrder::ALLOWED.join(", ")
                ))
            })
        })
        .transpose()
}

pub fn validate_name(name: &str) -> Result<&str, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::validation("Genre name is required"));
    }
    Ok(name)
}
