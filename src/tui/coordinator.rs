//! Render/state coordinator.
//!
//! Owns the selection index and help visibility for one prompt. Every key
//! erases the frame currently on screen and draws the next one in its
//! place, so the prompt never scrolls the terminal.
//!
//! Frame height is `line_count(title) + sum(line_count(option))` plus either
//! `line_count(help)` when help is shown or one trailing empty row when it is
//! not. Erasing always uses the height of the frame that was actually drawn,
//! which is why `help_visible` is updated only after the erase.

use crate::error::PromptError;
use crate::tui::keys::KeyEvent;
use crate::tui::reader::{Ack, ReadEvent};
use crate::tui::screen::{self, line_count};
use crate::tui::settings;
use crate::types::{PromptResult, Selection};
use crossterm::style::Print;
use crossterm::QueueableCommand;
use std::io::{self, Write};
use std::sync::mpsc::{Receiver, SyncSender};

/// Outcome of handling one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Keep waiting for keys.
    Continue,
    /// The prompt is over.
    Done(PromptResult),
}

pub struct Coordinator<'a, W: Write> {
    selection: &'a Selection,
    out: &'a mut W,
    index: usize,
    /// Whether the frame currently on screen includes the help text.
    help_visible: bool,
}

impl<'a, W: Write> Coordinator<'a, W> {
    /// Start at the first option with help hidden. Nothing is drawn yet.
    ///
    /// `selection.options` must be non-empty.
    pub fn new(selection: &'a Selection, out: &'a mut W) -> Self {
        debug_assert!(!selection.options.is_empty());
        Self {
            selection,
            out,
            index: 0,
            help_visible: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Rows a frame occupies, with or without the help text.
    pub fn frame_height(&self, help: bool) -> usize {
        let options: usize = self.selection.options.iter().map(|o| line_count(o)).sum();
        let tail = if help {
            line_count(&self.selection.help)
        } else {
            // The cursor rests on an empty row below the last option.
            1
        };
        line_count(&self.selection.title) + options + tail
    }

    /// Draw the first frame, help hidden.
    pub fn draw_initial(&mut self) -> io::Result<()> {
        self.help_visible = false;
        self.draw()
    }

    /// Apply one key: update state and repaint.
    pub fn handle(&mut self, key: KeyEvent) -> io::Result<Transition> {
        let count = self.selection.options.len();
        match key {
            KeyEvent::Confirm => {
                // Help hidden so the final frame drops the help rows.
                self.redraw(false)?;
                let selected = self.selection.options[self.index].clone();
                Ok(Transition::Done(PromptResult::confirmed(selected)))
            }
            KeyEvent::Abort => {
                self.redraw(false)?;
                Ok(Transition::Done(PromptResult::aborted()))
            }
            KeyEvent::Up => {
                self.index = (self.index + count - 1) % count;
                tracing::debug!(index = self.index, "selection moved up");
                self.redraw(false)?;
                Ok(Transition::Continue)
            }
            KeyEvent::Down => {
                self.index = (self.index + 1) % count;
                tracing::debug!(index = self.index, "selection moved down");
                self.redraw(false)?;
                Ok(Transition::Continue)
            }
            KeyEvent::NoOp => {
                self.redraw(true)?;
                Ok(Transition::Continue)
            }
        }
    }

    /// Consume keys until confirm or abort.
    ///
    /// Takes ownership of both channel ends so that returning, on success or
    /// error, always releases the reader: either it got `Ack::Stop` or its
    /// ack receiver disconnects.
    pub fn run(
        mut self,
        events: Receiver<ReadEvent>,
        acks: SyncSender<Ack>,
    ) -> Result<PromptResult, PromptError> {
        loop {
            let key = match events.recv() {
                Ok(Ok(key)) => key,
                Ok(Err(e)) => return Err(PromptError::Read(e)),
                Err(_) => return Err(PromptError::ReaderStopped),
            };
            tracing::debug!(?key, index = self.index, "key received");

            if key.ends_prompt() {
                // The reader is parked on the ack; it exits without reading again.
                let _ = acks.send(Ack::Stop);
            }
            match self.handle(key)? {
                Transition::Done(result) => return Ok(result),
                Transition::Continue => {
                    if acks.send(Ack::Continue).is_err() {
                        return Err(PromptError::ReaderStopped);
                    }
                }
            }
        }
    }

    /// Erase the current frame, then draw the next one with `help`.
    fn redraw(&mut self, help: bool) -> io::Result<()> {
        self.erase()?;
        self.help_visible = help;
        self.draw()
    }

    /// Clear the frame on screen from its last row up, parking the cursor
    /// at column 0 of its top row. The top row itself is left for the next
    /// draw to overwrite.
    fn erase(&mut self) -> io::Result<()> {
        let rows = self.frame_height(self.help_visible);
        // The cursor already sits on the frame's last row.
        for _ in 1..rows {
            screen::clear_line(self.out)?;
            screen::move_up(self.out)?;
        }
        Ok(())
    }

    fn draw(&mut self) -> io::Result<()> {
        screen::print_text(self.out, &self.selection.title)?;
        self.out.queue(Print(settings::LINE_BREAK))?;

        for (idx, option) in self.selection.options.iter().enumerate() {
            let active = idx == self.index;
            self.out.queue(Print(settings::OPTION_INDENT))?;
            if active {
                screen::invert(self.out)?;
            }
            screen::print_text(self.out, option)?;
            if active {
                screen::reset_style(self.out)?;
            }
            self.out.queue(Print(settings::LINE_BREAK))?;
        }

        if self.help_visible {
            screen::print_text(self.out, &self.selection.help)?;
        }
        self.out.flush()
    }
}
