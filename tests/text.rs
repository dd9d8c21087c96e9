mod tests {
    use lumatrix::text::{
        BLANK_GLYPH, GLYPH_WIDTH, MAX_TEXT_LEN, MissingGlyph, ScrollMatrix, glyph, glyph_columns,
        is_allowed, sanitize,
    };

    #[test]
    fn test_sanitize_replaces_disallowed_characters() {
        assert_eq!(sanitize("Hello_World!").as_str(), "Hello World!");
        assert_eq!(sanitize("a-b#c(d):e;f,g.h?").as_str(), "a b c(d):e;f,g.h?");
        assert_eq!(sanitize("über").as_str(), " ber");
        assert_eq!(sanitize("").as_str(), "");
    }

    #[test]
    fn test_sanitize_truncates() {
        let long: String = "x".repeat(300);
        assert_eq!(sanitize(&long).len(), MAX_TEXT_LEN);

        let exact: String = "y".repeat(MAX_TEXT_LEN);
        assert_eq!(sanitize(&exact).as_str(), exact);
    }

    #[test]
    fn test_is_allowed() {
        for c in ['a', 'Z', '0', '9', '.', ',', '!', '?', '(', ')', ':', ';'] {
            assert!(is_allowed(c), "{c:?} should be allowed");
        }
        for c in ['_', '-', ' ', '#', 'é'] {
            assert!(!is_allowed(c), "{c:?} should not be allowed");
        }
    }

    #[test]
    fn test_glyph_lookup() {
        assert!(glyph('A').is_some());
        assert!(glyph('z').is_some());
        assert!(glyph('7').is_some());
        assert_eq!(glyph(' '), Some(&BLANK_GLYPH));
        assert!(glyph('#').is_none());
    }

    #[test]
    fn test_glyph_columns_transpose() {
        let a = glyph('A').unwrap();
        let columns = glyph_columns(a);
        // Row 1 of 'A' is 0b00011000
        assert_eq!(columns[3] & 0b10, 0b10);
        assert_eq!(columns[4] & 0b10, 0b10);
        assert_eq!(columns[2] & 0b10, 0);
        // Column 0 and the top and bottom rows are blank
        assert_eq!(columns[0], 0);
        assert!(columns.iter().all(|c| c & 0b1000_0001 == 0));
    }

    #[test]
    fn test_scroll_matrix_width() {
        let matrix = ScrollMatrix::from_text("Hi!", MissingGlyph::Blank);
        assert_eq!(matrix.width(), 3 * GLYPH_WIDTH);

        let empty = ScrollMatrix::from_text("", MissingGlyph::Blank);
        assert_eq!(empty.width(), 0);
    }

    #[test]
    fn test_scroll_matrix_pixels() {
        let matrix = ScrollMatrix::from_text("AA", MissingGlyph::Blank);
        assert!(matrix.pixel(3, 1));
        assert!(matrix.pixel(8 + 3, 1));
        assert!(!matrix.pixel(0, 1));
        assert!(matrix.pixel(1, 4));
        assert!(!matrix.pixel(-1, 4));
        assert!(!matrix.pixel(100, 4));
        assert!(!matrix.pixel(3, 8));
    }

    #[test]
    fn test_missing_glyph_blank() {
        let matrix = ScrollMatrix::from_text("A#A", MissingGlyph::Blank);
        assert_eq!(matrix.width(), 3 * GLYPH_WIDTH);
        for x in GLYPH_WIDTH..2 * GLYPH_WIDTH {
            assert_eq!(matrix.column(x), 0);
        }
        assert!(matrix.pixel(2 * 8 + 3, 1));
    }

    #[test]
    fn test_missing_glyph_collapse() {
        let matrix = ScrollMatrix::from_text("A#A", MissingGlyph::Collapse);
        assert_eq!(matrix.width(), 1);
        assert_eq!(matrix.column(0), 0);
    }
}
