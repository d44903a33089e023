//! Single-stroke vector glyphs for the characters used in labels.
//!
//! Coordinates are in font units with `y` growing downward from the cap
//! line (0) to the baseline ([`CAP_HEIGHT`]). One unit is one pixel at scale 1.

pub const CAP_HEIGHT: f32 = 21.0;

type Stroke = &'static [(i8, i8)];

pub struct Glyph {
    pub advance: f32,
    pub strokes: &'static [Stroke],
}

static SPACE: Glyph = Glyph {
    advance: 12.0,
    strokes: &[],
};

static ZERO: Glyph = Glyph {
    advance: 18.0,
    strokes: &[&[
        (4, 0),
        (8, 0),
        (11, 3),
        (12, 8),
        (12, 13),
        (11, 18),
        (8, 21),
        (4, 21),
        (1, 18),
        (0, 13),
        (0, 8),
        (1, 3),
        (4, 0),
    ]],
};

static ONE: Glyph = Glyph {
    advance: 18.0,
    strokes: &[&[(2, 4), (5, 2), (7, 0), (7, 21)]],
};

static TWO: Glyph = Glyph {
    advance: 18.0,
    strokes: &[&[
        (1, 5),
        (1, 4),
        (2, 2),
        (4, 0),
        (8, 0),
        (10, 1),
        (11, 2),
        (12, 4),
        (12, 6),
        (11, 8),
        (9, 11),
        (0, 21),
        (12, 21),
    ]],
};

static THREE: Glyph = Glyph {
    advance: 18.0,
    strokes: &[&[
        (1, 0),
        (12, 0),
        (6, 8),
        (9, 8),
        (11, 9),
        (12, 11),
        (12, 16),
        (11, 19),
        (9, 21),
        (4, 21),
        (1, 20),
        (0, 18),
    ]],
};

static FOUR: Glyph = Glyph {
    advance: 18.0,
    strokes: &[&[(9, 0), (0, 14), (13, 14)], &[(9, 0), (9, 21)]],
};

static FIVE: Glyph = Glyph {
    advance: 18.0,
    strokes: &[&[
        (11, 0),
        (2, 0),
        (1, 9),
        (2, 8),
        (5, 7),
        (8, 7),
        (11, 8),
        (12, 11),
        (12, 16),
        (11, 19),
        (8, 21),
        (4, 21),
        (1, 20),
        (0, 18),
    ]],
};

static SIX: Glyph = Glyph {
    advance: 18.0,
    strokes: &[&[
        (11, 3),
        (10, 1),
        (7, 0),
        (5, 0),
        (2, 1),
        (1, 4),
        (0, 9),
        (0, 14),
        (1, 18),
        (3, 20),
        (6, 21),
        (7, 21),
        (10, 20),
        (12, 17),
        (12, 14),
        (11, 11),
        (9, 9),
        (6, 8),
        (5, 8),
        (2, 9),
        (0, 12),
    ]],
};

static SEVEN: Glyph = Glyph {
    advance: 18.0,
    strokes: &[&[(0, 0), (12, 0), (4, 21)]],
};

static EIGHT: Glyph = Glyph {
    advance: 18.0,
    strokes: &[&[
        (5, 0),
        (2, 1),
        (1, 3),
        (1, 5),
        (2, 7),
        (5, 8),
        (8, 9),
        (11, 11),
        (12, 13),
        (12, 17),
        (11, 19),
        (9, 21),
        (4, 21),
        (1, 19),
        (0, 17),
        (0, 13),
        (1, 11),
        (4, 9),
        (7, 8),
        (10, 7),
        (11, 5),
        (11, 3),
        (10, 1),
        (7, 0),
        (5, 0),
    ]],
};

static NINE: Glyph = Glyph {
    advance: 18.0,
    strokes: &[&[
        (12, 7),
        (11, 10),
        (9, 12),
        (6, 13),
        (5, 13),
        (2, 12),
        (0, 9),
        (0, 8),
        (1, 4),
        (3, 1),
        (6, 0),
        (7, 0),
        (10, 1),
        (12, 4),
        (12, 9),
        (11, 14),
        (9, 19),
        (6, 21),
        (4, 21),
        (1, 20),
        (0, 18),
    ]],
};

static CAPITAL_S: Glyph = Glyph {
    advance: 18.0,
    strokes: &[&[
        (12, 3),
        (10, 1),
        (7, 0),
        (4, 0),
        (1, 1),
        (0, 3),
        (0, 6),
        (1, 8),
        (4, 9),
        (8, 10),
        (11, 12),
        (12, 14),
        (12, 17),
        (11, 19),
        (8, 21),
        (4, 21),
        (1, 20),
        (0, 18),
    ]],
};

static SMALL_U: Glyph = Glyph {
    advance: 16.0,
    strokes: &[
        &[(0, 7), (0, 17), (1, 20), (3, 21), (6, 21), (8, 20), (11, 17)],
        &[(11, 7), (11, 21)],
    ],
};

static SMALL_M: Glyph = Glyph {
    advance: 21.0,
    strokes: &[
        &[(0, 7), (0, 21)],
        &[(0, 11), (3, 8), (5, 7), (7, 8), (8, 11), (8, 21)],
        &[(8, 11), (11, 8), (13, 7), (15, 8), (16, 11), (16, 21)],
    ],
};

static COLON: Glyph = Glyph {
    advance: 8.0,
    strokes: &[&[(2, 8), (2, 9)], &[(2, 19), (2, 20)]],
};

/// Glyph for `ch`, or `None` for characters the font does not cover.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch {
        ' ' => Some(&SPACE),
        '0' => Some(&ZERO),
        '1' => Some(&ONE),
        '2' => Some(&TWO),
        '3' => Some(&THREE),
        '4' => Some(&FOUR),
        '5' => Some(&FIVE),
        '6' => Some(&SIX),
        '7' => Some(&SEVEN),
        '8' => Some(&EIGHT),
        '9' => Some(&NINE),
        'S' => Some(&CAPITAL_S),
        'u' => Some(&SMALL_U),
        'm' => Some(&SMALL_M),
        ':' => Some(&COLON),
        _ => None,
    }
}

/// Horizontal advance of `text` in pixels at `scale`. Unknown characters
/// advance like a space.
pub fn text_width(text: &str, scale: f32) -> f32 {
    text.chars()
        .map(|ch| glyph(ch).unwrap_or(&SPACE).advance)
        .sum::<f32>()
        * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_characters_are_covered() {
        for ch in "Sum: 0123456789".chars() {
            assert!(glyph(ch).is_some(), "missing glyph for {ch:?}");
        }
    }

    #[test]
    fn test_strokes_stay_inside_cap_box() {
        for ch in "Sum:0123456789".chars() {
            let g = glyph(ch).unwrap();
            for stroke in g.strokes {
                for &(x, y) in stroke.iter() {
                    assert!(x >= 0 && (x as f32) < g.advance, "{ch:?} x={x}");
                    assert!(y >= 0 && (y as f32) <= CAP_HEIGHT, "{ch:?} y={y}");
                }
            }
        }
    }

    #[test]
    fn test_text_width_scales_linearly() {
        let w1 = text_width("Sum: 8", 1.0);
        let w2 = text_width("Sum: 8", 2.0);
        assert!((w2 - 2.0 * w1).abs() < 1e-4);
        assert_eq!(text_width("", 1.75), 0.0);
    }

    #[test]
    fn test_unknown_character_has_no_glyph() {
        assert!(glyph('?').is_none());
        assert_eq!(text_width("?", 1.0), SPACE.advance);
    }
}
