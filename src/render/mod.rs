mod glyph;

use std::io::Write;

use crossterm::{queue, style};

pub use glyph::Glyph;

use crate::maze::{Coord, Direction, Grid};

/// How cells and walls are laid out on the canvas.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Neighboring cells share the wall between them: a `w`x`h` maze takes
    /// `(2w + 1)`x`(2h + 1)` glyphs.
    #[default]
    Compact,
    /// Every cell is drawn as its own 3x3 block with its four sides, framed by
    /// one extra wall column on the left and right.
    Boxed,
}

impl Layout {
    fn canvas_size(self, width: u16, height: u16) -> (usize, usize) {
        let (width, height) = (width as usize, height as usize);
        match self {
            Layout::Compact => (width * 2 + 1, height * 2 + 1),
            Layout::Boxed => (width * 3 + 2, height * 3),
        }
    }

    /// Canvas position of the interior of a cell.
    fn center(self, coord: Coord) -> (usize, usize) {
        let (x, y) = (coord.0 as usize, coord.1 as usize);
        match self {
            Layout::Compact => (x * 2 + 1, y * 2 + 1),
            Layout::Boxed => (x * 3 + 2, y * 3 + 1),
        }
    }

    /// Canvas position of the side of a cell facing `dir`.
    fn side(self, coord: Coord, dir: Direction) -> (usize, usize) {
        let (cx, cy) = self.center(coord);
        let (dx, dy) = dir.delta();
        (
            cx.saturating_add_signed(dx as isize),
            cy.saturating_add_signed(dy as isize),
        )
    }
}

/// A maze drawn as a rectangle of glyphs, optionally with a route on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Box<[Glyph]>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Draws `grid`. When `path` is given, its cells and the openings between
    /// consecutive cells are drawn as route, and its last cell as the goal.
    /// `start` is the cell the path leaves from; paths never include it.
    pub fn new(grid: &Grid, layout: Layout, path: Option<&[Coord]>, start: Option<Coord>) -> Self {
        let (width, height) = layout.canvas_size(grid.width(), grid.height());
        let mut canvas = Canvas {
            glyphs: vec![Glyph::Wall; width * height].into_boxed_slice(),
            width,
            height,
        };

        for (coord, cell) in grid.cells() {
            canvas.set(layout.center(coord), Glyph::Open);
            for dir in Direction::ALL {
                if cell.has_path(dir) {
                    canvas.set(layout.side(coord, dir), Glyph::Open);
                }
            }
        }

        if let Some(path) = path {
            canvas.overlay_path(grid, layout, path, start);
        }
        if let Some(start) = start.filter(|&s| grid.contains(s)) {
            canvas.set(layout.center(start), Glyph::Start);
        }
        canvas
    }

    fn overlay_path(&mut self, grid: &Grid, layout: Layout, path: &[Coord], start: Option<Coord>) {
        let mut previous = start.filter(|&s| grid.contains(s));
        for &step in path.iter().filter(|&&step| grid.contains(step)) {
            self.set(layout.center(step), Glyph::Route);
            let link = previous.and_then(|prev| Direction::between(prev, step).map(|dir| (prev, dir)));
            if let Some((prev, dir)) = link {
                if grid.is_open(prev, dir) {
                    self.set(layout.side(prev, dir), Glyph::Route);
                    self.set(layout.side(step, dir.opposite()), Glyph::Route);
                }
            }
            previous = Some(step);
        }
        if let Some(&goal) = path.last().filter(|&&goal| grid.contains(goal)) {
            self.set(layout.center(goal), Glyph::Goal);
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn ravel_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Glyph> {
        (x < self.width && y < self.height).then(|| self.glyphs[self.ravel_index(x, y)])
    }

    fn set(&mut self, (x, y): (usize, usize), glyph: Glyph) {
        if x < self.width && y < self.height {
            let idx = self.ravel_index(x, y);
            self.glyphs[idx] = glyph;
        }
    }

    fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.glyphs.chunks(self.width)
    }

    /// Renders the canvas as ASCII, one line per row.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|glyph| glyph.symbol()));
            out.push('\n');
        }
        out
    }

    /// Queues the styled canvas to `out` and flushes it.
    /// Rows end with `\r\n` so the output stays aligned in raw mode.
    pub fn print<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in self.rows() {
            for glyph in row {
                queue!(out, style::Print(glyph))?;
            }
            queue!(out, style::Print("\r\n"))?;
        }
        out.flush()
    }
}
