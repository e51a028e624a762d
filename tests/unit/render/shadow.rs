//! Tests for the gaussian blur and drop shadow drawing

#[cfg(test)]
mod tests {
    use koraju::collage::config::Color;
    use koraju::layout::placement::DropShadow;
    use koraju::render::shadow::{blur_radius, blur_rgba8_premul, blur_sigma, draw_drop_shadow};
    use tiny_skia::{PathBuilder, Pixmap, Transform};

    // Tests blur extent to sigma and radius conversion
    // Verified by using the blur extent as sigma
    #[test]
    fn test_sigma_and_radius() {
        assert!((blur_sigma(20.0) - 10.0).abs() < f32::EPSILON);
        assert_eq!(blur_radius(10.0), 30);
        assert_eq!(blur_radius(0.0), 0);
        assert!(blur_sigma(-4.0).abs() < f32::EPSILON);
    }

    // Tests a uniform buffer is unchanged by blurring
    // Verified by dropping the kernel normalization
    #[test]
    fn test_blur_preserves_uniform_buffer() {
        let src = [40u8, 80, 120, 200].repeat(6 * 4);
        let out = blur_rgba8_premul(&src, 6, 4, 3, 1.5).expect("blur");
        assert_eq!(out, src);
    }

    // Tests a single bright pixel spreads symmetrically
    // Verified by running only the horizontal pass
    #[test]
    fn test_blur_spreads_point() {
        let (w, h) = (9u32, 9u32);
        let mut src = vec![0u8; (w * h * 4) as usize];
        let center = ((4 * w + 4) * 4) as usize;
        for c in src.iter_mut().skip(center).take(4) {
            *c = 255;
        }

        let out = blur_rgba8_premul(&src, w, h, 3, 1.0).expect("blur");
        let alpha = |x: u32, y: u32| out.get(((y * w + x) * 4 + 3) as usize).copied();

        let peak = alpha(4, 4).expect("in bounds");
        assert!(peak < 255 && peak > 0);
        assert_eq!(alpha(3, 4), alpha(5, 4));
        assert_eq!(alpha(4, 3), alpha(4, 5));
        assert!(alpha(3, 3) > Some(0));
        assert_eq!(alpha(0, 0), Some(0));
    }

    // Tests zero radius copies and mismatched buffers are rejected
    // Verified by skipping the length check
    #[test]
    fn test_blur_edge_cases() {
        let src = vec![7u8; 16];
        assert_eq!(blur_rgba8_premul(&src, 2, 2, 0, 0.0).expect("copy"), src);
        assert!(blur_rgba8_premul(&src, 3, 2, 1, 1.0).is_err());
        assert!(blur_rgba8_premul(&src, 2, 2, 1, 0.0).is_err());
    }

    // Tests the shadow lands at the offset with soft edges
    // Verified by ignoring the shadow offset
    #[test]
    fn test_drop_shadow_is_offset_and_soft() {
        let mut target = Pixmap::new(60, 60).expect("pixmap");
        let shape = PathBuilder::from_rect(
            tiny_skia::Rect::from_xywh(-10.0, -10.0, 20.0, 20.0).expect("rect"),
        );
        let shadow = DropShadow {
            offset_x: 10.0,
            offset_y: 10.0,
            blur: 4.0,
            color: Color::BLACK,
        };

        draw_drop_shadow(
            &mut target,
            &shape,
            Transform::from_translate(25.0, 25.0),
            &shadow,
            None,
        )
        .expect("shadow");

        let alpha = |x, y| target.pixel(x, y).map(|p| p.alpha());
        assert_eq!(alpha(35, 35), Some(255));
        assert_eq!(alpha(16, 16), Some(0));
        let edge = alpha(25, 35).expect("in bounds");
        assert!(edge > 0 && edge < 255, "edge alpha {edge}");
        assert_eq!(alpha(59, 59), Some(0));
    }
}
