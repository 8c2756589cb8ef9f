//! Procedural track generation
//!
//! The track is a rolling window of occupied `(lane, row)` cells kept in
//! generation order. Rows the camera has passed are pruned and new rows are
//! appended at the far end. Every step moves at most one lane sideways and
//! always lays the sideways cell on both rows it joins, so two consecutive
//! rows always share a lane.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use serde::{Deserialize, Serialize};

use crate::settings::ConfigError;
use crate::tuning::{BranchWeights, Tuning};

/// One occupied ground tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCell {
    /// 0 is the center lane, negative is left
    pub lane: i32,
    /// Depth counter, 0 is the first row of a run
    pub row: u32,
}

impl TileCell {
    pub const fn new(lane: i32, row: u32) -> Self {
        Self { lane, row }
    }
}

/// Outcome of one generation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Straight,
    Right,
    Left,
}

/// Inclusive lane range the generator may occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneWindow {
    pub start: i32,
    pub end: i32,
}

impl LaneWindow {
    pub fn from_vertical_lines(vertical_lines: i32) -> Self {
        Self {
            start: crate::lane_window_start(vertical_lines),
            end: crate::lane_window_end(vertical_lines),
        }
    }

    #[inline]
    pub fn contains(&self, lane: i32) -> bool {
        (self.start..=self.end).contains(&lane)
    }

    /// Override a drawn branch so the path turns back at either edge
    pub fn constrain(&self, lane: i32, drawn: Branch) -> Branch {
        if lane >= self.end {
            Branch::Left
        } else if lane <= self.start {
            Branch::Right
        } else {
            drawn
        }
    }
}

/// Single weighted draw over the three branch outcomes
#[derive(Debug, Clone)]
pub struct BranchSampler {
    dist: WeightedIndex<u32>,
}

impl BranchSampler {
    pub fn new(weights: BranchWeights) -> Result<Self, ConfigError> {
        let dist = WeightedIndex::new([weights.straight, weights.right, weights.left])
            .map_err(|e| ConfigError::Invalid(format!("branch weights: {}", e)))?;
        Ok(Self { dist })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Branch {
        match self.dist.sample(rng) {
            0 => Branch::Straight,
            1 => Branch::Right,
            _ => Branch::Left,
        }
    }
}

/// The live tile set
#[derive(Debug, Clone)]
pub struct Track {
    cells: Vec<TileCell>,
    capacity: usize,
    pre_fill: usize,
    window: LaneWindow,
    sampler: BranchSampler,
}

impl Track {
    pub fn new(tuning: &Tuning) -> Result<Self, ConfigError> {
        Ok(Self {
            cells: Vec::with_capacity(tuning.number_tiles + 2),
            capacity: tuning.number_tiles,
            pre_fill: tuning.pre_fill_tiles.min(tuning.number_tiles),
            window: LaneWindow::from_vertical_lines(tuning.vertical_lines),
            sampler: BranchSampler::new(tuning.branch_weights)?,
        })
    }

    /// Tracked cells, oldest row first
    pub fn cells(&self) -> &[TileCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn window(&self) -> LaneWindow {
        self.window
    }

    /// Lanes occupied on `row`
    pub fn lanes_at(&self, row: u32) -> impl Iterator<Item = i32> + '_ {
        self.cells.iter().filter(move |c| c.row == row).map(|c| c.lane)
    }

    /// Start a fresh run: straight pre-fill at lane 0, then generate
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells.clear();
        self.pre_fill();
        self.generate(0, rng);
    }

    fn pre_fill(&mut self) {
        self.cells
            .extend((0..self.pre_fill as u32).map(|row| TileCell::new(0, row)));
    }

    /// Prune rows behind `current_row` then refill to capacity
    pub fn generate<R: Rng + ?Sized>(&mut self, current_row: u32, rng: &mut R) {
        self.prune(current_row);
        self.extend(current_row, rng);
    }

    /// Drop every cell on a row the camera has passed
    pub fn prune(&mut self, current_row: u32) {
        self.cells.retain(|c| c.row >= current_row);
    }

    /// Append cells after the last tracked one until the set is full
    ///
    /// A sideways step appends up to three cells, so the tail may overshoot
    /// and is cut back to capacity. The next call resumes one row past the
    /// last kept cell in its lane, which keeps the path connected.
    pub fn extend<R: Rng + ?Sized>(&mut self, current_row: u32, rng: &mut R) {
        let (mut lane, mut row) = match self.cells.last() {
            Some(last) => (last.lane, last.row + 1),
            None => (0, current_row),
        };

        while self.cells.len() < self.capacity {
            let branch = self.window.constrain(lane, self.sampler.sample(rng));

            self.cells.push(TileCell::new(lane, row));
            match branch {
                Branch::Straight => {}
                Branch::Right | Branch::Left => {
                    lane += if branch == Branch::Right { 1 } else { -1 };
                    self.cells.push(TileCell::new(lane, row));
                    row += 1;
                    self.cells.push(TileCell::new(lane, row));
                }
            }
            row += 1;
        }

        self.cells.truncate(self.capacity);
    }

    /// Replace the tile set (tests and replays)
    pub fn set_cells(&mut self, cells: Vec<TileCell>) {
        self.cells = cells;
    }
}
