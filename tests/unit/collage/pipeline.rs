//! Tests for rendering a whole collection

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use koraju::collage::canvas::AspectRatio;
    use koraju::collage::collection::{Collection, ImageAsset};
    use koraju::collage::config::{Color, RenderConfig};
    use koraju::layout::engine::LayoutEngine;
    use koraju::layout::placement::LayoutStrategy;
    use koraju::render_collection;

    fn solid(color: [u8; 4]) -> ImageAsset {
        ImageAsset::new(RgbaImage::from_pixel(20, 10, Rgba(color)))
    }

    // Tests an empty collection renders nothing
    // Verified by rendering a blank surface for empty input
    #[test]
    fn test_empty_collection_is_noop() {
        let collection = Collection::new();
        let mut engine = LayoutEngine::with_seed(1);
        let rendered = render_collection(&collection, &RenderConfig::default(), 100, &mut engine)
            .expect("render succeeds");
        assert!(rendered.is_none());
    }

    // Tests canvas size, placement count and that images reach the surface
    // Verified by skipping the compositor draw
    #[test]
    fn test_render_grid_collection() {
        let mut collection = Collection::new();
        collection
            .add_batch(vec![solid([255, 0, 0, 255]), solid([0, 0, 255, 255])])
            .expect("batch fits");
        let config = RenderConfig {
            aspect: AspectRatio::new(2, 1).expect("valid ratio"),
            ..RenderConfig::default()
        };
        let mut engine = LayoutEngine::with_seed(1);

        let rendered = render_collection(&collection, &config, 120, &mut engine)
            .expect("render succeeds")
            .expect("non-empty collection");

        assert_eq!((rendered.canvas.width, rendered.canvas.height), (120, 60));
        assert_eq!(rendered.placements.len(), 2);
        assert_eq!(rendered.surface.width(), 120);
        assert_eq!(rendered.surface.pixel(30, 30), Some([255, 0, 0, 255]));
        assert_eq!(rendered.surface.pixel(90, 30), Some([0, 0, 255, 255]));
        assert_eq!(rendered.surface.pixel(0, 0), Some(Color::WHITE.to_array()));
    }

    // Tests seeded masonry renders reproduce the same pixels
    // Verified by seeding the second engine differently
    #[test]
    fn test_seeded_masonry_is_reproducible() {
        let mut collection = Collection::new();
        collection
            .add_batch(vec![solid([200, 50, 50, 255]); 3])
            .expect("batch fits");
        let config = RenderConfig {
            strategy: LayoutStrategy::Masonry,
            ..RenderConfig::default()
        };

        let render = |seed| {
            let mut engine = LayoutEngine::with_seed(seed);
            render_collection(&collection, &config, 90, &mut engine)
                .expect("render succeeds")
                .expect("non-empty collection")
        };
        let first = render(7);
        let second = render(7);

        assert_eq!(first.placements, second.placements);
        assert_eq!(first.surface.data(), second.surface.data());
    }

    // Tests different seeds move masonry items but keep size and item count
    // Verified by ignoring the engine and laying out from a fixed generator
    #[test]
    fn test_masonry_seeds_vary_placement_not_size() {
        let mut collection = Collection::new();
        collection
            .add_batch(vec![solid([30, 160, 90, 255]); 5])
            .expect("batch fits");
        let config = RenderConfig {
            strategy: LayoutStrategy::Masonry,
            aspect: AspectRatio::new(3, 2).expect("valid ratio"),
            ..RenderConfig::default()
        };

        let render = |seed| {
            let mut engine = LayoutEngine::with_seed(seed);
            render_collection(&collection, &config, 150, &mut engine)
                .expect("render succeeds")
                .expect("non-empty collection")
        };
        let first = render(1);
        let second = render(2);

        assert_eq!(first.canvas, second.canvas);
        assert_eq!(
            (first.surface.width(), first.surface.height()),
            (second.surface.width(), second.surface.height())
        );
        assert_eq!((first.surface.width(), first.surface.height()), (150, 100));
        assert_eq!(first.placements.len(), second.placements.len());
        assert_ne!(first.placements, second.placements);
    }

    // Tests a 20-image grid on a very flat canvas still draws every image
    // Verified by removing the padding cap in the grid layout
    #[test]
    fn test_flat_grid_draws_every_image() {
        let mut collection = Collection::new();
        collection
            .add_batch(vec![solid([255, 0, 0, 255]); 20])
            .expect("batch fits");
        let config = RenderConfig {
            aspect: AspectRatio::new(20, 1).expect("valid ratio"),
            ..RenderConfig::default()
        };
        let mut engine = LayoutEngine::with_seed(0);

        let rendered = render_collection(&collection, &config, 1200, &mut engine)
            .expect("render succeeds")
            .expect("non-empty collection");

        assert_eq!((rendered.canvas.width, rendered.canvas.height), (1200, 60));
        assert!(rendered.placements.iter().all(|p| p.target.is_positive()));
        for placement in &rendered.placements {
            let (cx, cy) = placement.target.center();
            assert_eq!(
                rendered.surface.pixel(cx as u32, cy as u32),
                Some([255, 0, 0, 255]),
                "item {} missing",
                placement.index
            );
        }
    }
}
