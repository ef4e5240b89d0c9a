//! Screen primitives: the fixed set of control sequences used to redraw a
//! frame in place, plus line counting.

use crate::tui::settings;
use crossterm::cursor::{Hide, MoveUp, Show};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Number of terminal rows `text` occupies, counting only newlines.
///
/// Long lines that wrap at the terminal edge are still counted once.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count() + 1
}

/// Queue reverse video for the highlighted option.
pub fn invert<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(SetAttribute(Attribute::Reverse))?;
    Ok(())
}

/// Queue a full style reset.
pub fn reset_style<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Queue a single-row cursor move up.
pub fn move_up<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(MoveUp(1))?;
    Ok(())
}

/// Queue a clear of the current row and return to column 0.
pub fn clear_line<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(Clear(ClearType::CurrentLine))?;
    out.queue(Print("\r"))?;
    Ok(())
}

pub fn hide_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(Hide)?;
    Ok(())
}

pub fn show_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(Show)?;
    Ok(())
}

/// Queue multi-line text, breaking rows with `\r\n`.
///
/// Emits exactly `line_count(text)` rows and leaves the cursor at the end of
/// the last one.
pub fn print_text<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            out.queue(Print(settings::LINE_BREAK))?;
        }
        out.queue(Print(line))?;
    }
    Ok(())
}
