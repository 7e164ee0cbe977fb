//! Submission validation and sanitization.

use crate::api::SubmitRequest;
use crate::error::ServerError;
use registration_store::{BoatClass, Distance, Gender, RegistrationDraft};

/// Turn a raw submission into a validated draft.
///
/// Required fields must be non-blank after trimming; the rejection names the
/// offending field. Scalar catalogue fields reject unknown values, while
/// unknown `distances` entries are dropped without failing the request. All
/// free-text fields are trimmed and markup-escaped before they can reach the
/// store, since they are rendered verbatim in the admin views.
pub fn validate(request: &SubmitRequest) -> Result<RegistrationDraft, ServerError> {
    let surname = required(&request.surname, "surname")?;
    let firstname = required(&request.firstname, "firstname")?;
    let birthdate = required(&request.birthdate, "birthdate")?;
    let gender_label = required(&request.gender, "gender")?;
    let country = required(&request.country, "country")?;
    let city = required(&request.city, "city")?;
    let team = required(&request.team, "team")?;
    let boat_label = required(&request.boat_class, "boat_class")?;
    let phone = required(&request.phone, "phone")?;

    let gender = Gender::parse(gender_label).ok_or(ServerError::InvalidGender)?;
    let boat_class = BoatClass::parse(boat_label).ok_or(ServerError::InvalidBoatClass)?;

    let mut distances = Vec::new();
    for label in &request.distances {
        if let Some(distance) = Distance::parse(label) {
            if !distances.contains(&distance) {
                distances.push(distance);
            }
        }
    }

    Ok(RegistrationDraft {
        surname: sanitize(surname),
        firstname: sanitize(firstname),
        patronymic: optional(&request.patronymic),
        birthdate: sanitize(birthdate),
        gender,
        country: sanitize(country),
        city: sanitize(city),
        rank: optional(&request.rank),
        team: sanitize(team),
        boat_class,
        phone: sanitize(phone),
        distances,
    })
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, ServerError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServerError::MissingField(field)),
    }
}

fn optional(value: &Option<String>) -> String {
    value.as_deref().map(sanitize).unwrap_or_default()
}

/// Trim and escape markup-significant characters in a free-text field.
fn sanitize(value: &str) -> String {
    html_escape::encode_safe(value.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> SubmitRequest {
        SubmitRequest {
            surname: Some("Иванов".into()),
            firstname: Some("Пётр".into()),
            patronymic: Some("Сергеевич".into()),
            birthdate: Some("1987-03-12".into()),
            gender: Some("М".into()),
            country: Some("Россия".into()),
            city: Some("Рязань".into()),
            rank: Some("КМС".into()),
            team: Some("Сынтул".into()),
            boat_class: Some("К-1".into()),
            phone: Some("+7 900 123-45-67".into()),
            distances: vec!["200 м".into(), "500 м".into()],
        }
    }

    #[test]
    fn test_full_request_accepted() {
        let draft = validate(&full_request()).unwrap();
        assert_eq!(draft.surname, "Иванов");
        assert_eq!(draft.gender, Gender::Male);
        assert_eq!(draft.boat_class, BoatClass::K1);
        assert_eq!(draft.distances, vec![Distance::M200, Distance::M500]);
    }

    #[test]
    fn test_missing_team_cites_team() {
        let mut request = full_request();
        request.team = None;

        match validate(&request) {
            Err(ServerError::MissingField(field)) => assert_eq!(field, "team"),
            other => panic!("expected MissingField(team), got {other:?}"),
        }
    }

    #[test]
    fn test_blank_after_trim_is_missing() {
        let mut request = full_request();
        request.surname = Some("   ".into());

        match validate(&request) {
            Err(ServerError::MissingField(field)) => assert_eq!(field, "surname"),
            other => panic!("expected MissingField(surname), got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let mut request = full_request();
        request.gender = Some("X".into());

        assert!(matches!(validate(&request), Err(ServerError::InvalidGender)));
    }

    #[test]
    fn test_unknown_boat_class_rejected() {
        let mut request = full_request();
        request.boat_class = Some("К-8".into());

        assert!(matches!(
            validate(&request),
            Err(ServerError::InvalidBoatClass)
        ));
    }

    #[test]
    fn test_unknown_distances_silently_dropped() {
        let mut request = full_request();
        request.distances = vec!["200 м".into(), "bogus".into()];

        let draft = validate(&request).unwrap();
        assert_eq!(draft.distances, vec![Distance::M200]);
    }

    #[test]
    fn test_duplicate_distances_collapsed() {
        let mut request = full_request();
        request.distances = vec!["500 м".into(), "200 м".into(), "500 м".into()];

        let draft = validate(&request).unwrap();
        assert_eq!(draft.distances, vec![Distance::M500, Distance::M200]);
    }

    #[test]
    fn test_optional_fields_default_empty() {
        let mut request = full_request();
        request.patronymic = None;
        request.rank = None;

        let draft = validate(&request).unwrap();
        assert_eq!(draft.patronymic, "");
        assert_eq!(draft.rank, "");
    }

    #[test]
    fn test_markup_is_escaped() {
        let mut request = full_request();
        request.surname = Some("<b>Иванов</b>".into());

        let draft = validate(&request).unwrap();
        assert!(!draft.surname.contains('<'));
        assert!(!draft.surname.contains('>'));
        assert!(draft.surname.contains("&lt;"));
        assert!(draft.surname.contains("Иванов"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut request = full_request();
        request.city = Some("  Рязань  ".into());

        let draft = validate(&request).unwrap();
        assert_eq!(draft.city, "Рязань");
    }
}
