//! Step-driven sort variants for incremental rendering
//!
//! A renderer owns a stepper and drives it one tick at a time. Every tick
//! performs a single comparison or element move on the held values and
//! reports it as a [`Step`], so a frame loop can redraw and highlight
//! exactly what changed between frames.

use std::cmp;

/// One observable action of a step-driven sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The values at `left` and `right` were compared and left in place
    Compared { left: usize, right: usize },
    /// The values at `left` and `right` were compared and swapped
    Swapped { left: usize, right: usize },
    /// The value at `target` was written from merge scratch space
    Merged { target: usize },
}

/// A sort decomposed into single comparison-or-move ticks
pub trait StepSort<T> {
    /// Whether another [`StepSort::step`] call has work left to do
    fn has_more_steps(&self) -> bool;

    /// Perform the next tick, or `None` once the values are sorted
    fn step(&mut self) -> Option<Step>;

    /// The current state of the values
    fn values(&self) -> &[T];
}

/// Insertion sort as a sequence of neighbor compare-and-swap ticks
#[derive(Debug)]
pub struct InsertionSortStepper<T> {
    values: Vec<T>,
    /// Index of the element currently being inserted
    index: usize,
    /// Current position of that element while it bubbles left
    cursor: usize,
}

impl<T: Ord> InsertionSortStepper<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            index: 1,
            cursor: 1,
        }
    }

    /// Consume the stepper and return the values in their current order
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Move on to inserting the next element
    fn next_round(&mut self) {
        self.index += 1;
        self.cursor = self.index;
    }
}

impl<T: Ord> StepSort<T> for InsertionSortStepper<T> {
    fn has_more_steps(&self) -> bool {
        self.index < self.values.len()
    }

    fn step(&mut self) -> Option<Step> {
        if self.index >= self.values.len() {
            return None;
        }

        let (left, right) = (self.cursor - 1, self.cursor);

        let step = if self.values[left] > self.values[right] {
            self.values.swap(left, right);
            self.cursor -= 1;

            // Reaching the front settles the element early
            if self.cursor == 0 {
                self.next_round();
            }

            Step::Swapped { left, right }
        } else {
            // The sorted prefix ends with something not greater, done inserting
            self.next_round();

            Step::Compared { left, right }
        };

        Some(step)
    }

    fn values(&self) -> &[T] {
        &self.values
    }
}

/// Bottom-up mergesort as a sequence of single merged-element ticks
///
/// Runs of doubling width are merged pairwise like in
/// [`super::timsort::timsort`] with run size 1, but each tick emits exactly
/// one element of the currently active merge.
#[derive(Debug)]
pub struct MergeSortStepper<T> {
    values: Vec<T>,
    /// Current run width of the bottom-up pass
    width: usize,
    /// Start of the next run pair within the current pass
    start: usize,
    /// The currently active merge, `None` once the values are sorted
    merge: Option<StepMerge<T>>,
}

/// Scratch state of one in-progress two-run merge
#[derive(Debug)]
struct StepMerge<T> {
    left: Vec<T>,
    right: Vec<T>,
    /// Next unconsumed element of `left`
    i: usize,
    /// Next unconsumed element of `right`
    j: usize,
    /// Absolute write position in the values
    out: usize,
    /// Absolute end of the merged range
    end: usize,
}

impl<T: Ord + Copy> MergeSortStepper<T> {
    pub fn new(values: Vec<T>) -> Self {
        let mut stepper = Self {
            values,
            width: 1,
            start: 0,
            merge: None,
        };
        stepper.advance_to_next_merge();
        stepper
    }

    /// Consume the stepper and return the values in their current order
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Position `start` and `width` on the next run pair and stage its merge,
    /// or leave `merge` empty when every pass is complete
    fn advance_to_next_merge(&mut self) {
        while self.width < self.values.len() {
            if self.start + self.width < self.values.len() {
                let middle = self.start + self.width;
                let end = cmp::min(self.start + 2 * self.width, self.values.len());

                self.merge = Some(StepMerge {
                    left: self.values[self.start..middle].to_vec(),
                    right: self.values[middle..end].to_vec(),
                    i: 0,
                    j: 0,
                    out: self.start,
                    end,
                });
                return;
            }

            // Pass finished, double the width. A trailing run without a
            // right-hand partner carries over to the next pass unmerged.
            self.start = 0;
            self.width *= 2;
        }
    }
}

impl<T: Ord + Copy> StepSort<T> for MergeSortStepper<T> {
    fn has_more_steps(&self) -> bool {
        self.merge.is_some()
    }

    fn step(&mut self) -> Option<Step> {
        let merge = self.merge.as_mut()?;

        // Prefer the left run on ties to keep the merge stable
        let value = if merge.i < merge.left.len() && merge.j < merge.right.len() {
            if merge.right[merge.j] < merge.left[merge.i] {
                merge.j += 1;
                merge.right[merge.j - 1]
            } else {
                merge.i += 1;
                merge.left[merge.i - 1]
            }
        } else if merge.i < merge.left.len() {
            merge.i += 1;
            merge.left[merge.i - 1]
        } else {
            merge.j += 1;
            merge.right[merge.j - 1]
        };

        let target = merge.out;
        merge.out += 1;
        let merge_done = merge.out == merge.end;

        self.values[target] = value;

        if merge_done {
            self.start += 2 * self.width;
            self.merge = None;
            self.advance_to_next_merge();
        }

        Some(Step::Merged { target })
    }

    fn values(&self) -> &[T] {
        &self.values
    }
}
