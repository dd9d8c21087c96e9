mod tests {
    use lumatrix::color::{
        BLACK, Rgb, WHITE, add_colors, rgb_clamped, rgb_from_u32, rgb_to_u32, subtract_colors,
    };

    #[test]
    fn test_packing() {
        let color = rgb_from_u32(0x12_34_56);
        assert_eq!(color, Rgb { r: 0x12, g: 0x34, b: 0x56 });
        assert_eq!(rgb_to_u32(color), 0x12_34_56);
        assert_eq!(rgb_from_u32(0), BLACK);
        assert_eq!(rgb_from_u32(0xFF_FF_FF), WHITE);
    }

    #[test]
    fn test_packed_out_of_range_is_white() {
        assert_eq!(rgb_from_u32(0x0100_0000), WHITE);
        assert_eq!(rgb_from_u32(u32::MAX), WHITE);
    }

    #[test]
    fn test_rgb_clamped() {
        assert_eq!(rgb_clamped(300, -5, 128), Rgb { r: 255, g: 0, b: 128 });
        assert_eq!(rgb_clamped(0, 255, 1), Rgb { r: 0, g: 255, b: 1 });
    }

    #[test]
    fn test_add_and_subtract_saturate() {
        let step = Rgb { r: 10, g: 10, b: 10 };
        let color = Rgb { r: 250, g: 250, b: 250 };
        assert_eq!(add_colors(add_colors(color, step), step), WHITE);

        let dim = Rgb { r: 5, g: 20, b: 0 };
        assert_eq!(subtract_colors(dim, step), Rgb { r: 0, g: 10, b: 0 });
    }
}
