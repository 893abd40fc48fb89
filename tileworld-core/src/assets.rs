//! Glyph art for the editors and the starter roster.
//!
//! Every glyph is 16x16 in `Image::from_art` form: `.` is transparent,
//! hex digits are palette indices.

use crate::image::Image;
use crate::rule::{AttrType, TileDir};

pub const EMPTY: &str = "
    d...............
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ...............d
";

pub const PLAYER: &str = "
    ................
    ......1111......
    .....155551.....
    ....15555551....
    ....15f55f51....
    ....15555551....
    ....15522551....
    .....155551.....
    ......1111......
    ....44444444....
    ...4444444444...
    ...44.4444.44...
    ......4444......
    .....44..44.....
    .....88..88.....
    ....888..888....
";

pub const WALL: &str = "
    eeeeeeeeeeeeeeee
    e4444444e4444444
    e4444444e4444444
    e4444444e4444444
    eeeeeeeeeeeeeeee
    4444e4444444e444
    4444e4444444e444
    4444e4444444e444
    eeeeeeeeeeeeeeee
    e4444444e4444444
    e4444444e4444444
    e4444444e4444444
    eeeeeeeeeeeeeeee
    4444e4444444e444
    4444e4444444e444
    eeeeeeeeeeeeeeee
";

pub const BOX: &str = "
    eeeeeeeeeeeeeeee
    e44444444444444e
    e4e4444444444e4e
    e44e44444444e44e
    e444e444444e444e
    e4444e4444e4444e
    e44444e44e44444e
    e444444ee444444e
    e444444ee444444e
    e44444e44e44444e
    e4444e4444e4444e
    e444e444444e444e
    e44e44444444e44e
    e4e4444444444e4e
    e44444444444444e
    eeeeeeeeeeeeeeee
";

/// Rule editor cursor.
pub const CURSOR_IN: &str = "
    111..........111
    1..............1
    1..............1
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    1..............1
    1..............1
    111..........111
";

/// Marker for the target cell and the selected attribute.
pub const CURSOR_OUT: &str = "
    5555........5555
    5..............5
    5..............5
    5..............5
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    5..............5
    5..............5
    5..............5
    5555........5555
";

pub const LEFT_ARROW: &str = "
    ................
    ................
    ................
    ................
    ....9...........
    ...99...........
    ..999999999.....
    .9999999999.....
    ..999999999.....
    ...99...........
    ....9...........
    ................
    ................
    ................
    ................
    ................
";

pub const RIGHT_ARROW: &str = "
    ................
    ................
    ................
    ................
    ...........9....
    ...........99...
    .....999999999..
    .....9999999999.
    .....999999999..
    ...........99...
    ...........9....
    ................
    ................
    ................
    ................
    ................
";

pub const UP_ARROW: &str = "
    .......9........
    ......999.......
    .....99999......
    ....9999999.....
    ......999.......
    ......999.......
    ......999.......
    ......999.......
    ......999.......
    ......999.......
    ................
    ................
    ................
    ................
    ................
    ................
";

pub const DOWN_ARROW: &str = "
    ................
    ................
    ................
    ................
    ................
    ................
    ......999.......
    ......999.......
    ......999.......
    ......999.......
    ......999.......
    ......999.......
    ....9999999.....
    .....99999......
    ......999.......
    .......9........
";

pub const EXPLODE: &str = "
    ................
    ....45.....5....
    ....445..455....
    ...54444455.....
    ..55442244......
    .5544222244.....
    ..442222224455..
    ...4422224455...
    ..554222244.....
    .55.4422444.....
    ....544445......
    ...55.44.55.....
    ..5...5...5.....
    ................
    ................
    ................
";

// Small attribute markers, drawn over a tile-kind glyph.

pub const ONLY: &str = "
    ..........7777..
    .........77..77.
    ........77....77
    ........7......7
    ........7......7
    ........77....77
    .........77..77.
    ..........7777..
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
";

pub const ONE_OF: &str = "
    ................
    ..5555..........
    .555555.........
    .555555.........
    .555555.........
    .555555.........
    ..5555..........
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
";

pub const EXCLUDE: &str = "
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ..........2222..
    .........22..22.
    ........2222..22
    ........2.222..2
    ........2..222.2
    ........22..2222
    .........22..22.
    ..........2222..
";

pub const INCLUDE: &str = "
    ................
    ................
    ................
    ................
    ................
    ................
    ................
    ........7.......
    .......76.......
    ......776.......
    ......76........
    7....776........
    77...76.........
    .77.776.........
    ..7776..........
    ...76...........
";

// Framed attribute glyphs for the selector strip.

pub const ONLY_CENTER: &str = "
    ................
    .dddddddddddddd.
    .d............d.
    .d............d.
    .d....7777....d.
    .d...77..77...d.
    .d..77....77..d.
    .d..7......7..d.
    .d..7......7..d.
    .d..77....77..d.
    .d...77..77...d.
    .d....7777....d.
    .d............d.
    .d............d.
    .dddddddddddddd.
    ................
";

pub const ONE_OF_CENTER: &str = "
    ................
    .dddddddddddddd.
    .d............d.
    .d............d.
    .d............d.
    .d....5555....d.
    .d...555555...d.
    .d...555555...d.
    .d...555555...d.
    .d...555555...d.
    .d....5555....d.
    .d............d.
    .d............d.
    .d............d.
    .dddddddddddddd.
    ................
";

pub const EXCLUDE_CENTER: &str = "
    ................
    .dddddddddddddd.
    .d............d.
    .d............d.
    .d....2222....d.
    .d...22..22...d.
    .d..2222..22..d.
    .d..2.222..2..d.
    .d..2..222.2..d.
    .d..22..2222..d.
    .d...22..22...d.
    .d....2222....d.
    .d............d.
    .d............d.
    .dddddddddddddd.
    ................
";

pub const INCLUDE_CENTER: &str = "
    ................
    .dddddddddddddd.
    .d............d.
    .d..........7.d.
    .d.........76.d.
    .d........776.d.
    .d........76..d.
    .d..7....776..d.
    .d..77...76...d.
    .d...77.776...d.
    .d....7776....d.
    .d.....76.....d.
    .d............d.
    .d............d.
    .dddddddddddddd.
    ................
";

/// Pixel editor palette cursor (one 8px swatch).
pub const COLOR_CURSOR: &str = "
    1111111111
    1........1
    1........1
    1........1
    1........1
    1........1
    1........1
    1........1
    1........1
    1111111111
";

/// Pixel editor paint cursor (one 6px cell).
pub const PAINT_CURSOR: &str = "
    11111111
    1......1
    1......1
    1......1
    1......1
    1......1
    1......1
    11111111
";

/// Brush icon shown above the palette.
pub const PAINT_ICON: &str = "
    ................
    ...........ff...
    ..........f44f..
    .........f44f...
    ........f44f....
    .......f44f.....
    ......f44f......
    .....fddf.......
    ....fddf........
    ...f22f.........
    ..f222f.........
    ..f22f..........
    .f22f...........
    .fff............
    ................
    ................
";

/// Glyphs used by the editors, parsed once per editor.
#[derive(Debug, Clone)]
pub struct Glyphs {
    pub cursor_in: Image,
    pub cursor_out: Image,
    /// Arrows indexed Left, Right, Up, Down.
    pub arrows: [Image; 4],
    pub explode: Image,
    /// Small markers indexed by `AttrType::ALL` order.
    pub attrs: [Image; 4],
    /// Framed selector glyphs indexed by `AttrType::ALL` order.
    pub attrs_centered: [Image; 4],
    pub color_cursor: Image,
    pub paint_cursor: Image,
    pub paint_icon: Image,
}

impl Glyphs {
    pub fn load() -> Self {
        Glyphs {
            cursor_in: Image::from_art(CURSOR_IN),
            cursor_out: Image::from_art(CURSOR_OUT),
            arrows: [
                Image::from_art(LEFT_ARROW),
                Image::from_art(RIGHT_ARROW),
                Image::from_art(UP_ARROW),
                Image::from_art(DOWN_ARROW),
            ],
            explode: Image::from_art(EXPLODE),
            attrs: [
                Image::from_art(ONLY),
                Image::from_art(ONE_OF),
                Image::from_art(EXCLUDE),
                Image::from_art(INCLUDE),
            ],
            attrs_centered: [
                Image::from_art(ONLY_CENTER),
                Image::from_art(ONE_OF_CENTER),
                Image::from_art(EXCLUDE_CENTER),
                Image::from_art(INCLUDE_CENTER),
            ],
            color_cursor: Image::from_art(COLOR_CURSOR),
            paint_cursor: Image::from_art(PAINT_CURSOR),
            paint_icon: Image::from_art(PAINT_ICON),
        }
    }

    /// Arrow pointing in `dir`. `TileDir::None` has no arrow.
    pub fn arrow(&self, dir: TileDir) -> Option<&Image> {
        dir.arrow_index().map(|i| &self.arrows[i])
    }

    pub fn attr(&self, attr: AttrType) -> &Image {
        &self.attrs[attr.index()]
    }

    pub fn attr_centered(&self, attr: AttrType) -> &Image {
        &self.attrs_centered[attr.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_glyphs_are_16x16() {
        for art in [
            EMPTY, PLAYER, WALL, BOX, CURSOR_IN, CURSOR_OUT, LEFT_ARROW, RIGHT_ARROW, UP_ARROW,
            DOWN_ARROW, EXPLODE, ONLY, ONE_OF, EXCLUDE, INCLUDE, ONLY_CENTER, ONE_OF_CENTER,
            EXCLUDE_CENTER, INCLUDE_CENTER, PAINT_ICON,
        ] {
            let img = Image::from_art(art);
            assert_eq!((img.width(), img.height()), (16, 16));
        }
    }

    #[test]
    fn test_pixel_editor_cursors_frame_one_cell() {
        let g = Glyphs::load();
        assert_eq!((g.color_cursor.width(), g.color_cursor.height()), (10, 10));
        assert_eq!((g.paint_cursor.width(), g.paint_cursor.height()), (8, 8));
    }

    #[test]
    fn test_no_arrow_for_undirected() {
        let g = Glyphs::load();
        assert!(g.arrow(TileDir::None).is_none());
        assert_eq!(g.arrow(TileDir::Up), Some(&g.arrows[2]));
    }
}
