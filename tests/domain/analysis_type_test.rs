use veracity::domain::AnalysisType;

#[test]
fn given_each_identifier_when_parsing_then_round_trips() {
    for analysis_type in AnalysisType::ALL {
        assert_eq!(AnalysisType::parse(analysis_type.as_str()), Some(analysis_type));
        assert_eq!(analysis_type.to_string(), analysis_type.as_str());
    }
}

#[test]
fn given_unknown_identifier_when_parsing_then_returns_none() {
    assert_eq!(AnalysisType::parse("plagiarism_check"), None);
    assert_eq!(AnalysisType::parse(""), None);
}

#[test]
fn given_unknown_identifier_when_resolving_then_defaults_to_factual_accuracy() {
    assert_eq!(
        AnalysisType::from_identifier("plagiarism_check"),
        AnalysisType::FactualAccuracyVerification
    );
    assert_eq!(AnalysisType::default(), AnalysisType::FactualAccuracyVerification);
}

#[test]
fn given_identifier_with_different_case_when_parsing_then_is_not_recognized() {
    assert_eq!(AnalysisType::parse("DETAIL_VERIFICATION"), None);
}
