use session_chart::data_types::{Sample, TrendSeries};
use session_chart::presentation::{format_pct, present, ChartBody, Trend, PLACEHOLDER};

fn series(date: &str, points: Vec<Sample>) -> TrendSeries {
    TrendSeries::new(date, points, 300)
}

fn sample_day() -> TrendSeries {
    series(
        "2024-05-06",
        vec![
            Sample::new("09:30", 0.0),
            Sample::new("10:00", 1.2),
            Sample::new("11:30", -0.5),
            Sample::new("15:00", 2.0),
        ],
    )
}

#[test]
fn test_format_pct() {
    assert_eq!(format_pct(1.2), "+1.20%");
    assert_eq!(format_pct(0.0), "+0.00%");
    assert_eq!(format_pct(-0.0), "+0.00%");
    assert_eq!(format_pct(-0.5), "-0.50%");
    assert_eq!(format_pct(12.346), "+12.35%");
}

#[test]
fn test_trend_classification() {
    assert_eq!(Trend::of(Some(0.0)), Trend::Up);
    assert_eq!(Trend::of(Some(0.01)), Trend::Up);
    assert_eq!(Trend::of(Some(-0.01)), Trend::Down);
    assert_eq!(Trend::of(None), Trend::Up);
}

#[test]
fn test_latest_from_series() {
    let model = present(&sample_day(), Some("2024-05-07 10:00"), Some(-3.0));
    assert_eq!(model.latest_pct, Some(2.0));
    assert_eq!(model.latest_label, "+2.00%");
    assert_eq!(model.trend, Trend::Up);
    assert_eq!(model.date, "2024-05-06");
    assert!(model.has_data());
}

#[test]
fn test_latest_falls_back_to_estimate() {
    let s = series("", vec![Sample::new("10:00", 0.4), Sample::new("10:01", f64::NAN)]);
    let model = present(&s, Some("2024-05-07 10:01:30"), Some(-1.256));
    assert_eq!(model.latest_pct, Some(-1.256));
    assert_eq!(model.latest_label, "-1.26%");
    assert_eq!(model.trend, Trend::Down);
    assert_eq!(model.date, "2024-05-07");
}

#[test]
fn test_no_latest_value() {
    let model = present(&TrendSeries::empty(), None, Some(f64::NAN));
    assert_eq!(model.latest_pct, None);
    assert_eq!(model.latest_label, PLACEHOLDER);
    assert_eq!(model.trend, Trend::Up);
    assert_eq!(model.date, "");
    assert_eq!(model.date_label(), PLACEHOLDER);
}

#[test]
fn test_no_data_state() {
    let model = present(&TrendSeries::empty(), Some("2024-05-07 09:00"), Some(0.3));
    assert_eq!(model.body, ChartBody::NoData);
    assert!(model.frame().is_none());
    assert_eq!(model.latest_label, "+0.30%");
}

#[test]
fn test_all_non_finite_is_not_no_data() {
    let s = series("2024-05-06", vec![Sample::new("10:00", f64::NAN)]);
    let model = present(&s, None, None);
    let frame = model.frame().expect("points exist, so a frame is produced");
    assert!(frame.geometry.is_empty());
    assert_eq!(frame.geometry.line_path, "");
    assert!(frame.value_ticks.is_empty());
    assert_eq!(frame.marker, None);
}

#[test]
fn test_value_ticks() {
    let model = present(&sample_day(), None, None);
    let frame = model.frame().unwrap();
    let labels: Vec<&str> = frame.value_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["+2.00%", "+0.00%", "-0.50%"]);

    let ys: Vec<f64> = frame.value_ticks.iter().map(|t| t.y).collect();
    assert!(ys[0] < ys[1] && ys[1] < ys[2]);
    assert_eq!(Some(ys[1]), frame.geometry.zero_y);
}

#[test]
fn test_value_ticks_skip_duplicate_zero() {
    let s = series("d", vec![Sample::new("10:00", 0.7), Sample::new("10:30", 1.1)]);
    let model = present(&s, None, None);
    let labels: Vec<String> = model
        .frame()
        .unwrap()
        .value_ticks
        .iter()
        .map(|t| t.label.clone())
        .collect();
    assert_eq!(labels, vec!["+1.10%", "+0.00%"]);
}

#[test]
fn test_marker_on_latest_point() {
    let model = present(&sample_day(), None, None);
    let frame = model.frame().unwrap();
    assert_eq!(frame.marker, frame.geometry.coords.last().copied());

    // Last sample unusable: no marker even though earlier coordinates exist.
    let s = series("d", vec![Sample::new("10:00", 0.7), Sample::new("10:30", f64::NAN)]);
    let model = present(&s, None, None);
    let frame = model.frame().unwrap();
    assert_eq!(frame.geometry.coords.len(), 1);
    assert_eq!(frame.marker, None);
}

#[test]
fn test_time_ticks_are_static() {
    let with_data = present(&sample_day(), None, None);
    let without = present(&TrendSeries::empty(), None, None);
    assert_eq!(with_data.time_ticks, without.time_ticks);

    let labels: Vec<&str> = with_data.time_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["09:30", "11:30/13:00", "15:00"]);

    let xs: Vec<f64> = with_data.time_ticks.iter().map(|t| t.x).collect();
    assert!((xs[0] - 44.0).abs() < 1e-6);
    assert!((xs[1] - 517.0).abs() < 1e-6);
    assert!((xs[2] - 990.0).abs() < 1e-6);
}
