// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Emission of surviving staircases.
//!
//! Every staircase classified as permanently extremal is emitted as one
//! record: its signature followed by the `+` marker. Retired staircases are
//! counted but never emitted.

use std::io::{self, Write};

use crate::engine::Classification;
use crate::geometry::Staircase;

/// Receives surviving staircases, in source-pool order.
pub trait Emitter {
    fn emit(&mut self, staircase: &Staircase) -> io::Result<()>;
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn emit(&mut self, staircase: &Staircase) -> io::Result<()> {
        (**self).emit(staircase)
    }
}

/// The textual record for a surviving staircase, e.g. `"0110+"`.
pub fn record(staircase: &Staircase) -> String {
    let mut text = staircase.signature();
    text.push(Classification::Survives.marker());
    text
}

/// Writes one record per line.
#[derive(Debug)]
pub struct WriterEmitter<W: Write> {
    writer: W,
}

impl<W: Write> WriterEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Emitter for WriterEmitter<W> {
    fn emit(&mut self, staircase: &Staircase) -> io::Result<()> {
        writeln!(self.writer, "{}", record(staircase))
    }
}

/// Keeps records in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordCollector {
    pub records: Vec<String>,
}

impl RecordCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Emitter for RecordCollector {
    fn emit(&mut self, staircase: &Staircase) -> io::Result<()> {
        self.records.push(record(staircase));
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEmitter;

impl Emitter for NullEmitter {
    fn emit(&mut self, _staircase: &Staircase) -> io::Result<()> {
        Ok(())
    }
}
