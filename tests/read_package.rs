use fitness_tracker::error::PackageError;
use fitness_tracker::pipeline::read::read_package;
use fitness_tracker::types::workout::{WorkoutKind, WorkoutRecord};

#[test]
fn unknown_code_is_rejected() {
    let err = read_package("XYZ", &[1.0, 2.0, 3.0]).expect_err("unknown code");
    assert_eq!(err, PackageError::UnknownWorkoutType("XYZ".to_string()));
}

#[test]
fn wrong_arity_is_rejected() {
    let err = read_package("RUN", &[15000.0, 1.0]).expect_err("too few values");
    assert_eq!(
        err,
        PackageError::ArityMismatch {
            code: "RUN",
            expected: 3,
            got: 2,
        }
    );

    let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).expect_err("too many values");
    assert!(matches!(err, PackageError::ArityMismatch { expected: 4, got: 5, .. }));
}

#[test]
fn running_package_end_to_end() {
    let record = read_package("RUN", &[15000.0, 1.0, 75.0]).expect("running record");
    assert_eq!(record.kind(), WorkoutKind::Running);

    let message = record.show_training_info().get_message();
    assert_eq!(
        message,
        "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 797.805."
    );
}

#[test]
fn walking_package_end_to_end() {
    let record = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("walking record");
    assert_eq!(record.kind(), WorkoutKind::Walking);
    assert!((record.distance() - 5.85).abs() < 1e-9);

    let message = record.show_training_info().get_message();
    assert!(message.contains("Workout type: SportsWalking;"));
    assert!(message.contains("Distance: 5.850 km"));
    assert!(message.contains("Calories burned: 349.252."));
}

#[test]
fn swimming_package_end_to_end() {
    let record = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swimming record");
    assert_eq!(record.kind(), WorkoutKind::Swimming);
    assert!((record.mean_speed() - 1.0).abs() < 1e-9);
    assert!((record.spent_calories() - 336.0).abs() < 1e-9);

    let message = record.show_training_info().get_message();
    assert_eq!(
        message,
        "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000."
    );
}

#[test]
fn fractional_pool_count_is_rejected() {
    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 2.5]).expect_err("fractional count");
    assert_eq!(
        err,
        PackageError::InvalidField {
            field: "count_pool",
            value: 2.5,
        }
    );
    assert!(read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -1.0]).is_err());
}
