use nanorand::{Rng, WyRand};
use pixelfilters::filters::color_adjust::{brightness, contrast, negative};
use pixelfilters::filters::edge::sobel;
use pixelfilters::filters::grayscale::grayscale_gauss;
use pixelfilters::filters::noise::{median, median_at};
use pixelfilters::{apply, apply_batch, FilterError, FilterKind, FilterParams, Rgb, Rgba, RgbaImage};

fn random_image(width: usize, height: usize, seed: u64) -> RgbaImage {
    let mut pixels = vec![0u8; width * height * 4];
    WyRand::new_seed(seed).fill(&mut pixels);
    RgbaImage::from_raw(width, height, pixels).unwrap()
}

#[test]
fn test_negativo_is_involution() {
    for seed in 0..4 {
        let img = random_image(17, 9, seed);
        let params = FilterParams::default();
        let twice = apply("negativo", &apply("negativo", &img, &params), &params);
        assert_eq!(twice, img);
    }
}

#[test]
fn test_brilho_roundtrip_without_saturation() {
    let img = RgbaImage::filled(128, 128, Rgba::new(128, 128, 128, 255));
    let darker = apply("brilho", &img, &FilterParams::default().with_brightness(-10.0));
    let back = apply("brilho", &darker, &FilterParams::default().with_brightness(10.0));

    assert_eq!(darker.get(64, 64).unwrap(), Rgba::new(118, 118, 118, 255));
    assert_eq!(back, img);
}

#[test]
fn test_grayscale_gauss_is_achromatic() {
    let img = random_image(23, 11, 42);
    let out = apply("grayscale_gauss", &img, &FilterParams::default());

    for (_, _, color) in out.pixels() {
        assert_eq!(color.red, color.green);
        assert_eq!(color.green, color.blue);
    }
    // alpha untouched
    for ((_, _, a), (_, _, b)) in img.pixels().zip(out.pixels()) {
        assert_eq!(a.alpha, b.alpha);
    }
}

#[test]
fn test_mediana_uniform_is_identity() {
    let img = RgbaImage::filled(12, 7, Rgba::new(33, 66, 99, 200));
    assert_eq!(apply("mediana", &img, &FilterParams::default()), img);
}

#[test]
fn test_deteccao_borda_uniform_is_black() {
    let img = RgbaImage::filled(12, 7, Rgba::new(33, 66, 99, 200));
    let out = apply("deteccao_borda", &img, &FilterParams::default());

    for (_, _, color) in out.pixels() {
        assert_eq!(color, Rgba::new(0, 0, 0, 200));
    }
}

#[test]
fn test_unknown_identifier_falls_back_to_grayscale_gauss() {
    let img = random_image(9, 9, 7);
    let params = FilterParams::default();

    assert_eq!(apply("foo", &img, &params), apply("grayscale_gauss", &img, &params));
    assert_eq!("foo".parse::<FilterKind>(), Ok(FilterKind::GrayscaleGauss));
}

#[test]
fn test_median_scenario() {
    let mut img = RgbaImage::filled(3, 3, Rgba::new(100, 100, 100, 255));
    img.set(1, 1, Rgba::new(200, 100, 50, 255)).unwrap();

    assert_eq!(median_at(&img, 1, 1).unwrap(), Rgb { red: 100, green: 100, blue: 100 });
    assert_eq!(median(&img).get(1, 1).unwrap(), Rgba::new(100, 100, 100, 255));
}

#[test]
fn test_brightness_scenario() {
    let img = RgbaImage::filled(1, 1, Rgba::new(50, 50, 50, 255));
    assert_eq!(brightness(&img, -300.0).get(0, 0).unwrap(), Rgba::new(0, 0, 0, 255));
}

#[test]
fn test_contrast_scenario() {
    let img = RgbaImage::filled(1, 1, Rgba::new(200, 10, 10, 255));
    assert_eq!(contrast(&img, 2.0).get(0, 0).unwrap(), Rgba::new(255, 20, 20, 255));
}

#[test]
fn test_contrast_matches_double_rounding() {
    for step in 1..400 {
        let factor = step as f64 / 100.0;
        for c in 0..=255u8 {
            let img = RgbaImage::filled(1, 1, Rgba::new(c, 0, 0, 255));
            let expected = (c as f64 * factor).round().min(255.0) as u8;
            assert_eq!(contrast(&img, factor).get(0, 0).unwrap().red, expected, "{c} * {factor}");
        }
    }
}

#[test]
fn test_out_of_bounds_access() {
    let img = random_image(4, 4, 1);

    assert!(matches!(img.get(4, 0), Err(FilterError::OutOfBounds { .. })));
    assert!(matches!(median_at(&img, 0, 0), Err(FilterError::OutOfBounds { .. })));
}

#[test]
fn test_empty_image_is_noop() {
    let params = FilterParams::default();
    for (w, h) in [(0, 0), (0, 4), (4, 0)] {
        let img = RgbaImage::new(w, h);
        for kind in FilterKind::ALL {
            assert_eq!(apply(kind.name(), &img, &params), img);
        }
    }
}

#[test]
fn test_filters_do_not_modify_source() {
    let img = random_image(8, 8, 99);
    let copy = img.clone();

    let _ = grayscale_gauss(&img);
    let _ = sobel(&img);
    let _ = median(&img);
    let _ = negative(&img);
    assert_eq!(img, copy);
}

#[test]
fn test_batch_matches_single_calls() {
    let images: Vec<_> = (0..6).map(|seed| random_image(10, 6, seed)).collect();
    let params = FilterParams::default();

    for kind in FilterKind::ALL {
        let batch = apply_batch(kind.name(), &images, &params);
        for (img, out) in images.iter().zip(&batch) {
            assert_eq!(out, &apply(kind.name(), img, &params));
        }
    }
}
