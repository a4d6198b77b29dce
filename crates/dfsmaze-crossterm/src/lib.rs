//! Crossterm terminal renderer for dfsmaze.
//!
//! Provides a [`TermRenderer`] that draws a [`Canvas`] as a block of colored
//! cells: walls black, floor white, path yellow with its step index, start
//! green and goal red.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
};

use dfsmaze_ui::{Canvas, Mark};

/// Foreground and background colors for one kind of mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg, bold: false }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

/// Colors used for each [`Mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub wall: CellStyle,
    pub floor: CellStyle,
    pub step: CellStyle,
    pub start: CellStyle,
    pub goal: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: CellStyle::new(Color::Grey, Color::Black),
            floor: CellStyle::new(Color::DarkGrey, Color::White),
            step: CellStyle::new(Color::Blue, Color::Yellow),
            start: CellStyle::new(Color::White, Color::DarkGreen).bold(),
            goal: CellStyle::new(Color::White, Color::DarkRed).bold(),
        }
    }
}

impl Palette {
    /// The style for `mark`.
    pub fn style(&self, mark: Mark) -> CellStyle {
        match mark {
            Mark::Wall => self.wall,
            Mark::Floor => self.floor,
            Mark::Step(_) => self.step,
            Mark::Start => self.start,
            Mark::Goal => self.goal,
        }
    }
}

/// Maps a mark to the text drawn inside its cell. Walls and floor are drawn
/// as blank colored cells.
fn cell_text(mark: Mark) -> String {
    match mark {
        Mark::Wall | Mark::Floor => String::new(),
        m => m.label(),
    }
}

/// Draws canvases to a terminal writer using crossterm styling commands.
#[derive(Debug, Clone, Default)]
pub struct TermRenderer {
    palette: Palette,
}

impl TermRenderer {
    /// Create a renderer with the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with a custom palette.
    pub fn with_palette(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Draw `canvas` to `out`, one maze row per line, and flush.
    ///
    /// Each cell is padded to the widest label plus one space on each side,
    /// so step indices stay centred in cells of equal width.
    pub fn draw<W: Write>(&self, out: &mut W, canvas: &Canvas) -> io::Result<()> {
        let w = canvas.cell_width();
        for line in canvas.lines() {
            for &mark in line {
                let style = self.palette.style(mark);
                queue!(out, SetForegroundColor(style.fg), SetBackgroundColor(style.bg))?;
                if style.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                queue!(out, Print(format!(" {:^w$} ", cell_text(mark))))?;
                if style.bold {
                    queue!(out, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
            queue!(out, ResetColor, Print("\n"))?;
        }
        out.flush()
    }
}
