//! Layout height registry
//!
//! Rendered heights of the collapsed cards, reported after each render
//! pass. An unmeasured card counts as zero rows, so the first frame after a
//! card appears places the overlay one card too high; the measurement that
//! follows corrects it on the next frame.

use crate::models::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeightRegistry {
    heights: [Option<u16>; Step::COUNT],
}

impl HeightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the measured height of a card; returns whether anything changed
    pub fn report(&mut self, step: Step, height: u16) -> bool {
        let slot = &mut self.heights[step.index()];
        if *slot == Some(height) {
            return false;
        }
        *slot = Some(height);
        true
    }

    /// Last measured height of a card, if it has been measured
    pub fn get(&self, step: Step) -> Option<u16> {
        self.heights[step.index()]
    }

    /// Sum of the heights of steps `0..n`, unmeasured steps counting as 0
    pub fn heights_up_to(&self, n: usize) -> u16 {
        self.heights
            .iter()
            .take(n)
            .map(|h| h.unwrap_or(0))
            .fold(0u16, u16::saturating_add)
    }
}
