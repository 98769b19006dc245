//! Conditions → assessment flows as the dashboard drives them

use crate::test_utils::{init_tracing, openweather_payload, ScriptedAdvisor};
use fogwatch_advisory::{
    assess_with_fallback, AdvisoryError, AdvisoryRequest, AssessmentSource, FogDetection,
    WeatherObservation,
};
use fogwatch_core::FogwatchConfig;
use fogwatch_domain::{
    FogLevel, HazardIndex, HazardInputs, HazardTier, ObservedConditions, RiskClassifier,
    RiskLevel, RoadType, TimeOfDay,
};

#[test]
fn weather_observation_drives_rule_based_assessment() {
    init_tracing();

    let observation =
        WeatherObservation::from_openweather_json(&openweather_payload(220, "Fog")).unwrap();
    let conditions = ObservedConditions::from_visibility(
        observation.visibility,
        TimeOfDay::Night,
        RoadType::Highway,
    );
    conditions.check_consistency().unwrap();

    let assessment = RiskClassifier::new().classify_conditions(&conditions);
    assert_eq!(assessment.risk_level, RiskLevel::High);
    assert_eq!(assessment.risk_score, 85);
    assert_eq!(assessment.recommended_speed_kmh, 30);
}

#[test]
fn vision_detection_overrides_weather_derived_fog() {
    let observation =
        WeatherObservation::from_openweather_json(&openweather_payload(1800, "Haze")).unwrap();
    let conditions =
        ObservedConditions::from_visibility(observation.visibility, TimeOfDay::Day, RoadType::City);
    assert_eq!(conditions.fog_level, FogLevel::None);

    let detection = FogDetection::parse(
        r#"{"fogLevel": "medium", "visibility": 650, "confidence": 82, "timeOfDay": "night"}"#,
    )
    .unwrap();
    let conditions = detection.apply_to(conditions);

    let assessment = RiskClassifier::new().classify_conditions(&conditions);
    assert_eq!(assessment.risk_level, RiskLevel::Medium);
    assert_eq!(assessment.risk_score, 65);
    assert_eq!(assessment.recommended_speed_kmh, 50);
}

#[tokio::test]
async fn advisory_answers_then_fails_over_to_rules() {
    init_tracing();
    let config = FogwatchConfig::default();

    let advisor = ScriptedAdvisor::new(vec![
        Ok(r#"{"riskLevel": "HIGH", "riskScore": 91, "recommendedSpeed": 25, "alert": "Pull over if visibility drops further", "reasoning": "Very dense fog"}"#.to_string()),
        Err(AdvisoryError::Transport("503 Service Unavailable".to_string())),
    ]);

    let request = AdvisoryRequest::new(
        FogLevel::Dense,
        90.0,
        TimeOfDay::Night,
        RoadType::Highway,
        "fog",
    );

    let first = assess_with_fallback(&advisor, &request, &config.advisory).await;
    assert_eq!(first.source, AssessmentSource::Ai);
    assert_eq!(first.assessment.recommended_speed_kmh, 25);

    let second = assess_with_fallback(&advisor, &request, &config.advisory).await;
    assert_eq!(second.source, AssessmentSource::RuleBased);
    assert_eq!(second.assessment.recommended_speed_kmh, 30);
    assert_eq!(second.assessment.alert_message, RiskLevel::High.alert_message());

    let third = assess_with_fallback(&advisor, &request, &config.advisory).await;
    assert!(third.is_fallback());

    assert_eq!(advisor.seen().len(), 3);
    assert_eq!(advisor.seen()[0], request);
}

#[test]
fn hazard_panel_and_classifier_agree_on_worst_case() {
    let observation =
        WeatherObservation::from_openweather_json(&openweather_payload(150, "Rain")).unwrap();

    let index = HazardIndex::compute(&HazardInputs {
        fog_level: observation.fog_level(),
        visibility: observation.visibility,
        incident_count: 7,
        weather_condition: &observation.condition,
        hour: 22,
    });
    assert_eq!(index.tier, HazardTier::Critical);

    let assessment = RiskClassifier::new().classify(
        observation.fog_level(),
        TimeOfDay::from_hour(22),
        RoadType::Highway,
    );
    assert_eq!(assessment.risk_level, RiskLevel::High);
}

#[test]
fn assessments_serialize_for_the_frontend() {
    let resolved = fogwatch_advisory::ResolvedAssessment::rule_based(
        FogLevel::Medium,
        TimeOfDay::Day,
        RoadType::City,
    );
    let json = serde_json::to_value(&resolved).unwrap();

    assert_eq!(json["riskLevel"], "MEDIUM");
    assert_eq!(json["riskScore"], 50);
    assert_eq!(json["recommendedSpeedKmh"], 60);
    assert_eq!(
        json["alertMessage"],
        "Moderate fog detected – reduce speed and use headlights."
    );
    assert_eq!(json["source"], "rule_based");
}

#[tokio::test]
async fn config_file_disables_advisory() {
    let config = FogwatchConfig::from_toml_str(
        r#"
        [advisory]
        enabled = false

        [logging]
        default_filter = "fogwatch=debug"
        "#,
    )
    .unwrap();
    assert_eq!(config.ranking.incident_limit, 12);
    assert_eq!(config.logging.default_filter, "fogwatch=debug");

    // A subscriber may already be installed by another test
    let _ = fogwatch_core::logging::init_from_config(&config.logging);

    let advisor = ScriptedAdvisor::new(vec![Ok(
        r#"{"riskLevel": "LOW", "riskScore": 3, "recommendedSpeed": 110, "alert": "Clear"}"#.to_string(),
    )]);
    let request = AdvisoryRequest::new(
        FogLevel::None,
        8000.0,
        TimeOfDay::Day,
        RoadType::Highway,
        "",
    );

    let resolved = assess_with_fallback(&advisor, &request, &config.advisory).await;
    assert!(resolved.is_fallback());
    assert_eq!(resolved.assessment.recommended_speed_kmh, 80);
    assert!(advisor.seen().is_empty());
    assert_eq!(request.weather_condition_text, "unknown");
}
