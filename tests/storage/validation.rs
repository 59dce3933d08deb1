//! Profile record validation

use jobadvisor_foundation::{ErrorKind, Record, Type, Value};
use jobadvisor_storage::Profile;

#[test]
fn defaults_match_the_profile_model() {
    let profile = Profile::from_record(&Record::new()).unwrap();

    assert!(!profile.prefers_indoor);
    assert!(!profile.prefers_outdoor);
    assert!(!profile.prefers_hybrid);
    assert!(!profile.remote_ok);
    assert_eq!(&*profile.education, "None");
    assert_eq!(profile.years_experience, 0);
    assert!(profile.skill_match.abs() < f64::EPSILON);
    assert!(profile.salary_expectation.abs() < f64::EPSILON);
}

#[test]
fn nil_counts_as_absent() {
    let record = Record::new()
        .with("education", Value::Nil)
        .with("skill_match", Value::Nil);
    let profile = Profile::from_record(&record).unwrap();

    assert_eq!(profile, Profile::default());
}

#[test]
fn unknown_field_is_rejected() {
    let record = Record::new().with("favourite_colour", "green");
    let err = Profile::from_record(&record).unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(err.kind, ErrorKind::UnknownField(ref f) if f == "favourite_colour"));
}

#[test]
fn derived_attribute_names_are_not_profile_fields() {
    for field in ["branch", "job", "reason"] {
        let err = Profile::from_record(&Record::new().with(field, "x")).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownField(_)), "{field}");
    }
}

#[test]
fn flag_must_be_bool() {
    let record = Record::new().with("remote_ok", 1_i64);
    let err = Profile::from_record(&record).unwrap_err();

    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch {
            ref field,
            expected: Type::Bool,
            actual: Type::Int,
        } if field == "remote_ok"
    ));
}

#[test]
fn non_finite_number_is_invalid() {
    let record = Record::new().with("skill_match", f64::NAN);
    let err = Profile::from_record(&record).unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(err.kind, ErrorKind::InvalidValue { ref field, .. } if field == "skill_match"));
}

#[test]
fn education_must_be_text() {
    let record = Record::new().with("education", 3_i64);
    let err = Profile::from_record(&record).unwrap_err();

    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::String,
            ..
        }
    ));
}

#[test]
fn record_round_trip_preserves_profile() {
    let profile = Profile::new()
        .prefers_outdoor(true)
        .high_physical(true)
        .education("Diploma")
        .years_experience(4)
        .salary_expectation(2500.0);

    let record = profile.to_record();
    assert_eq!(record.len(), 12);
    assert_eq!(Profile::from_record(&record).unwrap(), profile);
}
