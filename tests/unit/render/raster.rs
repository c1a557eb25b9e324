use super::*;
use crate::foundation::core::Rgb;

fn uniforms() -> FrameUniforms {
    FrameUniforms {
        viewport: Size::new(32.0, 32.0),
        point_size: 6.0,
        clock_seconds: 0.0,
    }
}

#[test]
fn rejects_empty_dimensions() {
    assert!(RasterSurface::new(0, 10).is_err());
    assert!(RasterSurface::new(10, 0).is_err());
}

#[test]
fn clears_to_background() {
    let s = RasterSurface::new(4, 4).unwrap().with_background([10, 20, 30, 255]);
    assert_eq!(s.pixel(3, 3), Some([10, 20, 30, 255]));
    assert_eq!(s.pixel(4, 0), None);
}

#[test]
fn opaque_disc_covers_its_center() {
    let mut s = RasterSurface::new(32, 32)
        .unwrap()
        .with_background([0, 0, 0, 255]);
    let prim = Primitive::Point {
        position: Point::new(16.0, 16.0),
        size: 8.0,
        color: Rgb::new(1.0, 0.0, 0.0).with_alpha(1.0),
    };
    s.render(&[prim], &uniforms()).unwrap();
    assert_eq!(s.pixel(16, 16), Some([255, 0, 0, 255]));
    assert_eq!(s.pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn half_alpha_blends_over_background() {
    let mut s = RasterSurface::new(8, 8)
        .unwrap()
        .with_background([0, 0, 0, 255]);
    let prim = Primitive::Line {
        from: Point::new(0.0, 4.5),
        to: Point::new(8.0, 4.5),
        width: 4.0,
        color: Rgb::WHITE.with_alpha(0.5),
    };
    s.render(&[prim], &uniforms()).unwrap();
    let [r, g, b, a] = s.pixel(4, 4).unwrap();
    assert_eq!(a, 255);
    assert!((120..=135).contains(&r));
    assert_eq!(r, g);
    assert_eq!(g, b);
}

#[test]
fn ribbon_fills_between_its_pairs() {
    let mut s = RasterSurface::new(32, 32)
        .unwrap()
        .with_background([0, 0, 0, 255]);
    let color = Rgb::new(0.0, 1.0, 0.0).with_alpha(1.0);
    let prim = Primitive::Ribbon {
        pairs: vec![
            RibbonPair {
                left: Point::new(4.0, 28.0),
                right: Point::new(28.0, 28.0),
                color,
            },
            RibbonPair {
                left: Point::new(4.0, 4.0),
                right: Point::new(28.0, 4.0),
                color,
            },
        ],
    };
    s.render(&[prim], &uniforms()).unwrap();
    assert_eq!(s.pixel(16, 16), Some([0, 255, 0, 255]));
    assert_eq!(s.pixel(1, 1), Some([0, 0, 0, 255]));
}

#[test]
fn frames_clear_unless_accumulating() {
    let dot = Primitive::Point {
        position: Point::new(2.0, 2.0),
        size: 3.0,
        color: Rgb::WHITE.with_alpha(1.0),
    };
    let far = Primitive::Point {
        position: Point::new(12.0, 12.0),
        size: 3.0,
        color: Rgb::WHITE.with_alpha(1.0),
    };

    let mut s = RasterSurface::new(16, 16)
        .unwrap()
        .with_background([0, 0, 0, 255]);
    s.render(std::slice::from_ref(&dot), &uniforms()).unwrap();
    s.render(std::slice::from_ref(&far), &uniforms()).unwrap();
    assert_eq!(s.pixel(2, 2), Some([0, 0, 0, 255]));

    let mut s = RasterSurface::new(16, 16)
        .unwrap()
        .with_background([0, 0, 0, 255])
        .accumulate(true);
    s.render(std::slice::from_ref(&dot), &uniforms()).unwrap();
    s.render(std::slice::from_ref(&far), &uniforms()).unwrap();
    assert_eq!(s.pixel(2, 2), Some([255, 255, 255, 255]));
}

#[test]
fn image_export_unpremultiplies() {
    let s = RasterSurface::new(2, 2)
        .unwrap()
        .with_background([200, 100, 50, 128]);
    let img = s.to_image().unwrap();
    let px = img.get_pixel(0, 0).0;
    assert_eq!(px[3], 128);
    assert!((px[0] as i32 - 200).abs() <= 2);
    assert!((px[1] as i32 - 100).abs() <= 2);
}

#[test]
fn over_is_identity_for_transparent_source() {
    assert_eq!(over([1, 2, 3, 4], [0, 0, 0, 0]), [1, 2, 3, 4]);
    assert_eq!(over([1, 2, 3, 4], [9, 9, 9, 255]), [9, 9, 9, 255]);
}
