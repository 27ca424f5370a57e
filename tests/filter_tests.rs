use edge_shape_classifier::gradient::{HORIZONTAL_KERNEL, VERTICAL_KERNEL};
use edge_shape_classifier::{convert_to_grayscale, filter_2d, ClassifyError};
use ndarray::{arr2, array, Array2, Array3};

fn create_gradient_image(height: usize, width: usize) -> Array2<f64> {
    Array2::from_shape_fn((height, width), |(i, j)| (i * 7 + j * 3) as f64 / 100.0)
}

#[test]
fn test_output_shape() {
    let shapes = [((10, 12), (3, 3)), ((5, 5), (5, 5)), ((8, 20), (1, 4)), ((7, 3), (2, 3))];

    for ((h, w), (m, n)) in shapes {
        let im = Array2::<f64>::zeros((h, w));
        let kernel = Array2::<f64>::ones((m, n));
        let out = filter_2d(im.view(), kernel.view()).unwrap();
        assert_eq!(out.dim(), (h - m + 1, w - n + 1));
    }
}

#[test]
fn test_uniform_image_scales_by_kernel_sum() {
    let c = 0.5;
    let im = Array2::from_elem((9, 7), c);
    let kernel = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let s: f64 = kernel.sum();

    let out = filter_2d(im.view(), kernel.view()).unwrap();

    assert_eq!(out.dim(), (8, 5));
    assert!(out.iter().all(|&v| (v - c * s).abs() < 1e-12));
}

#[test]
fn test_sobel_kernels_cancel_on_flat_image() {
    let im = Array2::from_elem((6, 6), 0.8);

    for kernel in [HORIZONTAL_KERNEL, VERTICAL_KERNEL] {
        let out = filter_2d(im.view(), arr2(&kernel).view()).unwrap();
        assert!(out.iter().all(|&v| v.abs() < 1e-12));
    }
}

#[test]
fn test_ramp_gives_constant_gradient() {
    // Intensity rises by 0.03 per column and 0.07 per row
    let im = create_gradient_image(12, 15);

    let gx = filter_2d(im.view(), arr2(&HORIZONTAL_KERNEL).view()).unwrap();
    let gy = filter_2d(im.view(), arr2(&VERTICAL_KERNEL).view()).unwrap();

    assert!(gx.iter().all(|&v| (v + 8.0 * 0.03).abs() < 1e-9));
    assert!(gy.iter().all(|&v| (v + 8.0 * 0.07).abs() < 1e-9));
}

#[test]
fn test_matches_naive_correlation() {
    let im = create_gradient_image(9, 11).mapv(|v| (v * 13.0).sin());
    let kernel = array![[0.5, -1.0], [2.0, 0.25], [-0.75, 1.5]];
    let out = filter_2d(im.view(), kernel.view()).unwrap();

    for i in 0..out.nrows() {
        for j in 0..out.ncols() {
            let mut expected = 0.0;
            for m in 0..3 {
                for n in 0..2 {
                    expected += im[[i + m, j + n]] * kernel[[m, n]];
                }
            }
            assert!((out[[i, j]] - expected).abs() < 1e-12);
        }
    }
}

#[test]
fn test_kernel_wider_than_image() {
    let im = Array2::<f64>::zeros((10, 2));
    let kernel = Array2::<f64>::zeros((3, 3));
    assert!(matches!(
        filter_2d(im.view(), kernel.view()),
        Err(ClassifyError::KernelTooLarge { kernel_cols: 3, image_cols: 2, .. })
    ));
}

#[test]
fn test_grayscale_of_equal_channels() {
    for v in [0.0, 0.25, 0.6, 1.0] {
        let im = Array3::from_elem((4, 5, 3), v);
        let gray = convert_to_grayscale(im.view()).unwrap();
        assert!(gray.iter().all(|&g| (g - v).abs() < 1e-12));
    }
}

#[test]
fn test_grayscale_drops_channel_axis() {
    let im = Array3::<f64>::zeros((17, 9, 3));
    assert_eq!(convert_to_grayscale(im.view()).unwrap().dim(), (17, 9));
}
