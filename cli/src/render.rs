use std::fmt::Display;
use std::io::{self, Write};

use pymines_core::{Board, BoardView};

const USAGE: &str = "\
USAGE:
\t<row> <col>       \tReveal a cell (0-based)
\tr, reveal <row> <col>\tSame as above
\th, help           \tPrints help information
\tq, quit           \tLeave the game
";

/// Render context: owns the output stream for the lifetime of a session.
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn board(&mut self, board: &Board) -> io::Result<()> {
        let view = BoardView::from_board(board);
        let (rows, cols) = view.size;

        // column labels only show the last digit to keep cells one wide
        write!(self.out, "    ")?;
        for y in 0..cols {
            write!(self.out, " {}", y % 10)?;
        }
        writeln!(self.out)?;

        for x in 0..rows {
            write!(self.out, "{x:>3} ")?;
            for y in 0..cols {
                let symbol = view.cell((x, y)).map_or(' ', |cell| cell.symbol());
                write!(self.out, " {symbol}")?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    pub fn message(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }

    pub fn error(&mut self, error: impl Display) -> io::Result<()> {
        writeln!(self.out, "error: {error}")?;
        self.out.flush()
    }

    pub fn help(&mut self) -> io::Result<()> {
        self.out.write_all(USAGE.as_bytes())?;
        self.out.flush()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, ">> ")?;
        self.out.flush()
    }
}
