use mongodb::bson::oid::ObjectId;

use crate::utils::error::{AppError, AppResult};

/// Title rule shared by polls and choices: present and non-empty.
pub fn non_empty_title(title: Option<&str>) -> AppResult<String> {
    match title {
        Some(t) if !t.is_empty() => Ok(t.to_string()),
        _ => Err(AppError::UnprocessableEntity(
            "title must not be an empty string".to_string(),
        )),
    }
}

/// A required id field that is absent or empty is a client error, not a
/// lookup miss.
pub fn required_id(value: Option<&str>, field: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::ValidationError(format!("{} is required", field))),
    }
}

/// Ids arrive as hex strings. One that does not resolve to an ObjectId is
/// reported as the entity not being found rather than as a parse error.
pub fn parse_object_id(raw: &str, entity: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| AppError::NotFound(format!("{} not found", entity)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn empty_title_is_unprocessable() {
        for title in [None, Some("")] {
            let err = non_empty_title(title).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn present_title_passes_through() {
        assert_eq!(non_empty_title(Some("JavaScript")).unwrap(), "JavaScript");
    }

    #[test]
    fn missing_id_field_is_a_bad_request() {
        for value in [None, Some("")] {
            let err = required_id(value, "pollId").unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn unparsable_object_id_reads_as_not_found() {
        let err = parse_object_id("definitely-not-hex", "Poll").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn well_formed_object_id_parses() {
        assert!(parse_object_id("54759eb3c090d83494e2d222", "Poll").is_ok());
    }
}
