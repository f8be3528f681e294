mod common;

use approx::assert_relative_eq;
use common::{jodrell_42ft, vela};
use dishplan::coordinates::GeodeticLocation;
use dishplan::planner_errors::PlannerError;
use dishplan::sensitivity::{integration_time, integration_time_from_str, parse_snr};
use dishplan::telescope::Telescope;

#[test]
fn test_reference_dish_sensitivity() {
    let dish = jodrell_42ft();
    assert_relative_eq!(dish.effective_area(), 70.7738, epsilon = 1e-4);
    assert_relative_eq!(dish.gain(), 0.025_630_6, epsilon = 1e-7);

    let t = integration_time(&dish, &vela(), 10.0).unwrap();
    assert!((t - 106.0).abs() / 106.0 < 0.02, "integration time {t}");
}

#[test]
fn test_gain_scales_with_dish_area() {
    let site = GeodeticLocation::new(53.23625, 2.3071).unwrap();
    let small = Telescope::new("small", site, 12.8, 610.0, 10.0, 0.55, 130.0).unwrap();
    let large = Telescope::new("large", site, 25.6, 610.0, 10.0, 0.55, 130.0).unwrap();

    assert_relative_eq!(large.gain() / small.gain(), 4.0, max_relative = 1e-12);

    // a four times larger gain cuts the integration time by sixteen
    let t_small = integration_time(&small, &vela(), 10.0).unwrap();
    let t_large = integration_time(&large, &vela(), 10.0).unwrap();
    assert_relative_eq!(t_small / t_large, 16.0, max_relative = 1e-9);
}

#[test]
fn test_snr_text_boundary() {
    let dish = jodrell_42ft();
    let source = vela();

    let five = integration_time_from_str(&dish, &source, "5").unwrap();
    let ten = integration_time_from_str(&dish, &source, "10").unwrap();
    assert_relative_eq!(five.seconds, ten.seconds / 4.0, max_relative = 1e-9);
    assert_eq!(five.snr, 5.0);

    assert!(matches!(
        integration_time_from_str(&dish, &source, "abc"),
        Err(PlannerError::InvalidParameterError(_))
    ));
    assert!(matches!(parse_snr("-10"), Err(PlannerError::InvalidParameterError(_))));
}

#[test]
fn test_very_large_snr_has_no_upper_bound() {
    let t = integration_time(&jodrell_42ft(), &vela(), 1e6).unwrap();
    assert!(t.is_finite());
    assert_relative_eq!(t, 106.304_8 * 1e10, max_relative = 1e-5);
}
