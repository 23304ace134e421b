//! End-to-end: normalize a float frame, tile it, encode each tile and wrap it
//! as a data URL.

use std::io::Cursor;

use assert_matches::assert_matches;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use image_attendant::{
    ColorMode, Error, Range, SampleGrid, data_url, image_data_mode, normalize_to_uint8, tiles,
    to_dynamic_image,
};
use ndarray::{Array3, ArrayD, Axis, IxDyn};

fn gradient_rgb(lines: usize, samples: usize) -> Array3<f32> {
    Array3::from_shape_fn((lines, samples, 3), |(y, x, c)| {
        (y as f32) * 0.5 - (x as f32) * 0.25 + c as f32
    })
}

#[test]
fn test_tiles_round_trip_through_png_data_urls() {
    let grid = normalize_to_uint8(SampleGrid::from(gradient_rgb(64, 96).into_dyn()), None).unwrap();
    assert_eq!(image_data_mode(&grid).unwrap(), ColorMode::Rgb);

    let prefix = "data:image/png;charset=utf-8;base64,";
    let mut count = 0;

    for tile in tiles(&grid, 32).unwrap() {
        let rgb = to_dynamic_image(&tile.data).unwrap();
        let mut png = Vec::new();
        rgb.write_to(&mut Cursor::new(&mut png), ImageFormat::Png).unwrap();

        let url = data_url(&png, "png");
        let payload = url.strip_prefix(prefix).unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), png);

        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png)
            .unwrap()
            .to_rgb8();
        let (lines, samples) = tile.extent();
        let pixel = decoded.get_pixel(samples as u32 - 1, lines as u32 - 1).0;
        let last_line = tile.data.index_axis(Axis(0), lines - 1);
        let expected: Vec<u8> = last_line
            .index_axis(Axis(0), samples - 1)
            .iter()
            .copied()
            .collect();
        assert_eq!(pixel.to_vec(), expected);

        count += 1;
    }

    assert_eq!(count, 2 * 3);
}

#[test]
fn test_tiles_reassemble_into_parent() {
    let grid = normalize_to_uint8(SampleGrid::from(gradient_rgb(50, 70).into_dyn()), None).unwrap();
    let mut canvas = ArrayD::<u8>::zeros(grid.raw_dim());
    let mut mask = ArrayD::<bool>::from_elem(IxDyn(&[50, 70]), false);

    for tile in tiles(&grid, 16).unwrap() {
        let (lines, samples) = tile.extent();
        for y in 0..lines {
            for x in 0..samples {
                let (py, px) = (tile.line_offset + y, tile.sample_offset + x);
                assert!(!mask[[py, px]], "tiles overlap at ({py}, {px})");
                mask[[py, px]] = true;
                for c in 0..3 {
                    canvas[[py, px, c]] = tile.data[[y, x, c]];
                }
            }
        }
    }

    // 50 / 16 -> 3 x 16 lines, 70 / 16 -> 4 x 18 samples clipped at 70
    assert!(mask.iter().take(48 * 70).all(|&covered| covered));
    assert!(mask.iter().skip(48 * 70).all(|&covered| !covered));
    for ((idx, &value), &parent) in canvas.indexed_iter().zip(grid.iter()) {
        if mask[[idx[0], idx[1]]] {
            assert_eq!(value, parent);
        }
    }
}

#[test]
fn test_explicit_range_applies_to_u8_input() {
    let grid = ArrayD::<u8>::from_shape_vec(IxDyn(&[2, 2]), vec![0, 64, 128, 255]).unwrap();
    let out = normalize_to_uint8(SampleGrid::from(grid), Some(Range::new(64.0, 128.0))).unwrap();
    assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![0, 0, 255, 255]);
}

#[test]
fn test_errors_surface_through_public_api() {
    let flat = ArrayD::<f64>::from_elem(IxDyn(&[4, 4]), 0.5);
    assert_matches!(
        normalize_to_uint8(SampleGrid::from(flat.clone()), None),
        Err(Error::InvalidRange { .. })
    );
    assert_matches!(tiles(&flat, 5), Err(Error::InvalidTileSize { .. }));
    assert_eq!(
        image_attendant::collapse_alpha(&flat).unwrap_err().to_string(),
        "Unsupported operation: alpha collapse"
    );
}
