use fitness_tracker_core::{read_package, read_sample, TrackerError, Workout, WorkoutSample};

#[test]
fn known_codes_map_to_variants() {
    assert!(matches!(read_package("RUN", &[15000.0, 1.0, 75.0]), Ok(Workout::Running(_))));
    assert!(matches!(
        read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        Ok(Workout::SportsWalking { height, .. }) if height == 180.0
    ));
    assert!(matches!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Ok(Workout::Swimming { length_pool, count_pool, .. }) if length_pool == 25.0 && count_pool == 40.0
    ));
}

#[test]
fn parameters_bind_positionally() {
    let w = read_package("RUN", &[1234.0, 2.5, 68.0]).unwrap();
    let b = w.base();
    assert_eq!(b.action, 1234.0);
    assert_eq!(b.duration, 2.5);
    assert_eq!(b.weight, 68.0);
}

#[test]
fn unknown_code_falls_back_and_ignores_extras() {
    let w = read_package("XYZ", &[1000.0, 1.0, 70.0, 5.0, 5.0]).unwrap();
    assert!(matches!(w, Workout::Training(_)));
    assert_eq!(w.get_spent_calories(), 0.0);
    assert!((w.get_distance() - 0.65).abs() < 1e-12);

    // kodene er case-sensitive
    let lower = read_package("run", &[15000.0, 1.0, 75.0]).unwrap();
    assert!(matches!(lower, Workout::Training(_)));
}

#[test]
fn too_few_parameters_is_arity_error() {
    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0]).unwrap_err();
    match err {
        TrackerError::ArityMismatch { code, expected, got } => {
            assert_eq!(code, "SWM");
            assert_eq!(expected, 5);
            assert_eq!(got, 4);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(matches!(
        read_package("WLK", &[9000.0, 1.0, 75.0]),
        Err(TrackerError::ArityMismatch { expected: 4, got: 3, .. })
    ));
    assert!(matches!(
        read_package("???", &[1.0, 1.0]),
        Err(TrackerError::ArityMismatch { expected: 3, got: 2, .. })
    ));
}

#[test]
fn extra_parameters_for_known_code_are_ignored() {
    let plain = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    let extra = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(plain, extra);

    let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 99.0]).unwrap();
    assert!((swim.get_spent_calories() - 336.0).abs() < 1e-9);

    let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).unwrap();
    assert!(matches!(walk, Workout::SportsWalking { height, .. } if height == 180.0));
}

#[test]
fn fractional_and_negative_counts_are_computed_as_given() {
    let w = read_package("RUN", &[100.5, 1.0, 75.0]).unwrap();
    assert!((w.get_distance() - 100.5 * 0.65 / 1000.0).abs() < 1e-12);

    let neg = read_package("RUN", &[-10.0, 1.0, 75.0]).unwrap();
    assert!((neg.get_distance() - (-10.0 * 0.65 / 1000.0)).abs() < 1e-12);

    let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap();
    assert!((swim.get_mean_speed() - 25.0 * 40.5 / 1000.0).abs() < 1e-12);
}

#[test]
fn non_finite_values_are_rejected() {
    assert!(matches!(
        read_package("WLK", &[9000.0, f64::NAN, 75.0, 180.0]),
        Err(TrackerError::InvalidParameter { index: 1, .. })
    ));
    assert!(matches!(
        read_package("WLK", &[9000.0, 1.0, 75.0, f64::INFINITY]),
        Err(TrackerError::InvalidParameter { index: 3, .. })
    ));
}

#[test]
fn swimming_with_zero_duration_is_an_error() {
    let err = read_package("SWM", &[720.0, 0.0, 80.0, 25.0, 40.0]).unwrap_err();
    assert!(matches!(err, TrackerError::ZeroDuration { ref code } if code == "SWM"));
    assert!(err.to_string().contains("SWM"));
}

#[test]
fn zero_duration_is_fine_for_running() {
    let w = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap();
    assert_eq!(w.get_mean_speed(), 0.0);
}

#[test]
fn read_sample_matches_read_package() {
    let sample = WorkoutSample::new("WLK", &[9000.0, 1.0, 75.0, 180.0]);
    assert_eq!(
        read_sample(&sample).unwrap(),
        read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap()
    );
}
