use trackrs::{
    default_packages, process_packages, read_package, summarize, AppConfig, OutputFormat,
    PackageEntry, TrackerError, Training, TrainingReadings, WorkoutKind, WorkoutPackage,
};

/// Integration tests that run sensor packages through the full pipeline

#[cfg(test)]
mod integration_tests {
    use super::*;

    const EXPECTED_DEFAULT_OUTPUT: &str = "\
Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Mean speed: 1.000 km/h; Calories burned: 336.000.
Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Mean speed: 9.750 km/h; Calories burned: 699.750.
Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Mean speed: 5.850 km/h; Calories burned: 157.500.
";

    fn run(packages: &[PackageEntry], format: OutputFormat) -> Result<String, TrackerError> {
        let mut buffer = Vec::new();
        process_packages(packages, &mut buffer, format)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    /// The built-in packages produce the reference report
    #[test]
    fn test_default_report() {
        let output = run(&default_packages(), OutputFormat::Text).unwrap();
        assert_eq!(output, EXPECTED_DEFAULT_OUTPUT);
    }

    #[test]
    fn test_running_package() {
        let info = summarize("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(info.training_type, "Running");
        assert!((info.distance - 9.75).abs() < 1e-9);
        assert!((info.speed - 9.75).abs() < 1e-9);
        assert!((info.calories - 699.75).abs() < 1e-9);
        assert!(info.get_message().contains("Calories burned: 699.750."));
    }

    #[test]
    fn test_swimming_package() {
        let info = summarize("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(info.training_type, "Swimming");
        assert!((info.speed - 1.0).abs() < 1e-9);
        assert!((info.calories - 336.0).abs() < 1e-9);
    }

    /// Pins the floored speed term of the race walking formula
    #[test]
    fn test_walking_package_regression() {
        let info = summarize("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(info.training_type, "SportsWalking");
        assert!((info.calories - 157.5).abs() < 1e-9);
        assert_eq!(
            info.get_message(),
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Mean speed: 5.850 km/h; Calories burned: 157.500."
        );
    }

    /// Step counts are passed through unchecked, sign included
    #[test]
    fn test_negative_action_count_summarized() {
        let info = summarize("RUN", &[-1000.0, 1.0, 75.0]).unwrap();
        assert_eq!(info.training_type, "Running");
        assert!((info.distance + 0.65).abs() < 1e-9);
        assert!((info.speed + 0.65).abs() < 1e-9);
        assert!(info.get_message().contains("Distance: -0.650 km; Mean speed: -0.650 km/h"));
    }

    #[test]
    fn test_unknown_workout_type() {
        let err = read_package("XYZ", &[15000.0, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, TrackerError::UnrecognizedWorkoutType { .. }));
        assert!(err.user_message().contains("XYZ"));
    }

    #[test]
    fn test_arity_error_is_distinct() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::ArgumentCount { expected: 4, actual: 3, .. }
        ));
        assert_ne!(
            err.user_message(),
            TrackerError::unrecognized("WLK").user_message()
        );
    }

    #[test]
    fn test_base_readings_have_no_calorie_formula() {
        let base = TrainingReadings::new(15000, 1.0, 75.0);
        assert!(matches!(
            base.show_training_info(),
            Err(TrackerError::NotImplemented { .. })
        ));
    }

    #[test]
    fn test_typed_package_matches_raw_package() {
        for entry in default_packages() {
            let typed = WorkoutPackage::from_raw(&entry.code, &entry.data).unwrap();
            assert_eq!(typed.kind().code(), entry.code);
            assert_eq!(typed.kind().arity(), entry.data.len());

            let from_typed = typed.into_training().show_training_info().unwrap();
            let from_raw = summarize(&entry.code, &entry.data).unwrap();
            assert_eq!(from_typed, from_raw);
        }
    }

    #[test]
    fn test_json_report() {
        let output = run(&default_packages(), OutputFormat::Json).unwrap();
        let names: Vec<String> = output
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["training_type"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(names, vec!["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn test_report_from_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("trackrs.toml");
        std::fs::write(
            &path,
            r#"
output = "text"

[[packages]]
code = "RUN"
data = [15000, 1, 75]

[[packages]]
code = "SWM"
data = [720, 1, 80, 25, 40]
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        let output = run(&config.packages, config.output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Workout type: Running;"));
        assert!(lines[1].starts_with("Workout type: Swimming;"));
    }

    #[test]
    fn test_all_kinds_dispatchable() {
        for kind in WorkoutKind::ALL {
            let data = vec![1000.0; kind.arity()];
            let training = read_package(kind.code(), &data).unwrap();
            assert_eq!(training.training_type(), kind.display_name());
        }
    }
}
