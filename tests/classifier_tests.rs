use edge_shape_classifier::histogram::EdgeHistogram;
use edge_shape_classifier::*;
use ndarray::{s, Array3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn create_noise_image(height: usize, width: usize, seed: u64) -> Array3<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array3::from_shape_simple_fn((height, width, 3), || rng.gen_range(0..=255) as f64)
}

/// White axis-aligned box on a black background.
fn create_box_image(size: usize, rows: (usize, usize), cols: (usize, usize)) -> Array3<f64> {
    Array3::from_shape_fn((size, size, 3), |(y, x, _)| {
        if (rows.0..rows.1).contains(&y) && (cols.0..cols.1).contains(&x) {
            255.0
        } else {
            0.0
        }
    })
}

fn create_disc_image(size: usize, radius: f64, color: [f64; 3]) -> Array3<f64> {
    let center = size as f64 / 2.0;
    Array3::from_shape_fn((size, size, 3), |(y, x, c)| {
        let (dy, dx) = (y as f64 - center, x as f64 - center);
        if (dx * dx + dy * dy).sqrt() <= radius {
            color[c]
        } else {
            0.0
        }
    })
}

/// Directions spread over 50 distinct values, alternating `high` and `low`
/// repetitions so every bin count is one of the two.
fn alternating_directions(high: usize, low: usize) -> Vec<f64> {
    let mut directions = Vec::new();
    for k in 0..50 {
        let repeats = if k % 2 == 0 { high } else { low };
        let direction = k as f64 * 0.1 - 2.45;
        directions.extend(std::iter::repeat(direction).take(repeats));
    }
    directions
}

#[test]
fn test_engineered_spread_of_five_is_ball() {
    let hist = EdgeHistogram::from_directions(&alternating_directions(15, 5)).unwrap();
    assert_eq!(hist.spread(), 5.0);
    assert_eq!(ShapeLabel::from_spread(hist.spread()), ShapeLabel::Ball);
}

#[test]
fn test_engineered_spread_of_ten_is_cylinder() {
    let hist = EdgeHistogram::from_directions(&alternating_directions(25, 5)).unwrap();
    assert_eq!(hist.spread(), 10.0);
    assert_eq!(ShapeLabel::from_spread(hist.spread()), ShapeLabel::Cylinder);
}

#[test]
fn test_engineered_spread_of_twenty_is_brick() {
    let hist = EdgeHistogram::from_directions(&alternating_directions(45, 5)).unwrap();
    assert_eq!(hist.spread(), 20.0);
    assert_eq!(ShapeLabel::from_spread(hist.spread()), ShapeLabel::Brick);
}

#[test]
fn test_box_is_brick() {
    let image = create_box_image(256, (60, 190), (70, 180));
    let report = analyze(image.view()).unwrap();

    assert_eq!(report.label, ShapeLabel::Brick);
    assert!(report.spread > 16.75);
    assert_eq!(report.histogram.total() as usize, report.strong_edges);
}

#[test]
fn test_classify_is_deterministic() {
    let image = create_disc_image(260, 90.0, [220.0, 60.0, 40.0]);

    let first = classify(image.view()).unwrap();
    let second = classify(image.view()).unwrap();
    assert_eq!(first, second);
    assert!(ShapeLabel::ALL.contains(&first));
}

#[test]
fn test_small_red_disc_is_ball() {
    let image = create_disc_image(256, 20.0, [220.0, 60.0, 40.0]);

    let report = analyze(image.view()).unwrap();
    assert_eq!(report.label, ShapeLabel::Ball);
    assert!(report.spread < 8.8, "spread {}", report.spread);
    assert_eq!(report.strong_edges, 224);
}

#[test]
fn test_white_disc_is_cylinder() {
    let image = create_disc_image(256, 30.0, [255.0, 255.0, 255.0]);

    let report = analyze(image.view()).unwrap();
    assert_eq!(report.label, ShapeLabel::Cylinder);
    assert!((report.spread - 14.669).abs() < 1e-3, "spread {}", report.spread);
    assert_eq!(report.strong_edges, 484);
    assert_eq!(classify(image.view()).unwrap(), ShapeLabel::Cylinder);
}

#[test]
fn test_border_outside_crop_is_ignored() {
    let image = create_noise_image(260, 270, 7);
    let baseline = analyze(image.view()).unwrap();

    let mut altered = image.clone();
    let replacement = create_noise_image(260, 270, 99);
    for region in [s![..10, .., ..], s![245.., .., ..], s![.., ..10, ..], s![.., 245.., ..]] {
        altered
            .slice_mut(&region)
            .assign(&replacement.slice(&region));
    }
    assert_ne!(altered, image);

    let report = analyze(altered.view()).unwrap();
    assert_eq!(report.label, baseline.label);
    assert_eq!(report.spread, baseline.spread);
    assert_eq!(report.histogram, baseline.histogram);
}

#[test]
fn test_pixels_inside_crop_matter() {
    let image = create_box_image(256, (60, 190), (70, 180));
    let shifted = create_box_image(256, (80, 200), (70, 160));

    let a = analyze(image.view()).unwrap();
    let b = analyze(shifted.view()).unwrap();
    assert_ne!(a.strong_edges, b.strong_edges);
}

#[test]
fn test_minimum_size_image_is_accepted() {
    let image = create_noise_image(245, 245, 3);
    assert!(classify(image.view()).is_ok());
}

#[test]
fn test_extra_channels_are_averaged() {
    let rgb = create_box_image(250, (40, 200), (40, 200));
    let mut rgba = Array3::<f64>::zeros((250, 250, 4));
    rgba.slice_mut(s![.., .., ..3]).assign(&rgb);
    rgba.slice_mut(s![.., .., 3]).assign(&rgb.slice(s![.., .., 0]));

    // Alpha follows the box, so the channel mean is unchanged
    let rgb_report = analyze(rgb.view()).unwrap();
    let rgba_report = analyze(rgba.view()).unwrap();
    assert_eq!(rgb_report.histogram, rgba_report.histogram);
}

#[test]
fn test_error_cases() {
    let narrow = Array3::<f64>::zeros((300, 200, 3));
    assert!(matches!(
        classify(narrow.view()),
        Err(ClassifyError::ImageTooSmall { width: 200, .. })
    ));

    let gray = Array3::<f64>::zeros((250, 250, 1));
    assert!(matches!(
        classify(gray.view()),
        Err(ClassifyError::TooFewChannels { channels: 1, required: 3 })
    ));

    // Only the border has structure, and the border is cropped away
    let mut framed = Array3::<f64>::zeros((250, 250, 3));
    framed.slice_mut(s![..5, .., ..]).fill(255.0);
    assert!(matches!(
        classify(framed.view()),
        Err(ClassifyError::NoStrongEdges { .. })
    ));
}
