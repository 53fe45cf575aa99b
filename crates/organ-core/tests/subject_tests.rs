// Host-side tests for subject tags.

use organ_core::{AnimationRule, Subject, SubjectError};

#[test]
fn tags_round_trip_through_display() {
    for s in Subject::ALL {
        assert_eq!(s.to_string().parse::<Subject>(), Ok(s));
    }
}

#[test]
fn parsing_tolerates_case_and_whitespace() {
    assert_eq!(" Heart ".parse::<Subject>(), Ok(Subject::Heart));
    assert_eq!("CELLS".parse::<Subject>(), Ok(Subject::Cells));
}

#[test]
fn unknown_tag_is_rejected() {
    assert_eq!(
        "kidney".parse::<Subject>(),
        Err(SubjectError::Unknown("kidney".to_string()))
    );
    assert!("".parse::<Subject>().is_err());
}

#[test]
fn rules_per_subject() {
    assert_eq!(Subject::Heart.rule(), AnimationRule::Pulse);
    assert_eq!(Subject::Cells.rule(), AnimationRule::Cluster);
    assert_eq!(Subject::Brain.rule(), AnimationRule::Rotate);
    assert_eq!(Subject::Liver.rule(), AnimationRule::Rotate);
    assert_eq!(Subject::default(), Subject::Heart);
}
