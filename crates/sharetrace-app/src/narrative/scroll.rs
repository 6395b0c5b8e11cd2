//! Panel-snapped vertical scrolling for the narrative
//!
//! Offsets are in terminal rows. One slide occupies exactly one panel
//! height, so slide `k` starts at row `k * panel_height`.

use sharetrace_core::prelude::*;

/// Slide index in view for a scroll offset: `round(offset / height)`, clamped
///
/// A zero height is treated as one row.
pub fn active_slide_for(offset: u32, panel_height: u16, slide_count: usize) -> usize {
    if slide_count == 0 {
        return 0;
    }
    let height = u64::from(panel_height.max(1));
    let index = (2 * u64::from(offset) + height) / (2 * height);
    (index as usize).min(slide_count - 1)
}

/// Scroll state of the narrative container
#[derive(Debug, Clone)]
pub struct ScrollViewport {
    offset: u32,
    /// `None` until the first render measured the container
    panel_height: Option<u16>,
    slide_count: usize,
    active: usize,
    /// Destination of an in-flight smooth scroll
    target: Option<u32>,
    idle_ticks: u32,
    snap_idle_ticks: u32,
    step_divisor: u32,
}

impl ScrollViewport {
    pub fn new(slide_count: usize, snap_idle_ticks: u32, step_divisor: u32) -> Self {
        Self {
            offset: 0,
            panel_height: None,
            slide_count,
            active: 0,
            target: None,
            idle_ticks: 0,
            snap_idle_ticks,
            step_divisor: step_divisor.max(1),
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn panel_height(&self) -> Option<u16> {
        self.panel_height
    }

    pub fn is_mounted(&self) -> bool {
        self.panel_height.is_some()
    }

    pub fn active_slide(&self) -> usize {
        self.active
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Record the measured panel height
    ///
    /// On a resize the viewport stays on the slide that was active.
    pub fn mount(&mut self, panel_height: u16) {
        let panel_height = panel_height.max(1);
        if self.panel_height == Some(panel_height) {
            return;
        }
        let resized = self.panel_height.is_some();
        self.panel_height = Some(panel_height);
        if resized {
            debug!("Narrative viewport resized to {} rows", panel_height);
            self.offset = self.slide_start(self.active);
            self.target = None;
        }
        self.update_active();
    }

    fn max_offset(&self) -> u32 {
        match self.panel_height {
            Some(h) => self.slide_count.saturating_sub(1) as u32 * u32::from(h),
            None => 0,
        }
    }

    fn slide_start(&self, index: usize) -> u32 {
        let h = u32::from(self.panel_height.unwrap_or(1));
        index.min(self.slide_count.saturating_sub(1)) as u32 * h
    }

    fn update_active(&mut self) {
        if let Some(h) = self.panel_height {
            self.active = active_slide_for(self.offset, h, self.slide_count);
        }
    }

    /// Set the offset directly, as a scroll event would
    pub fn set_offset(&mut self, offset: u32) {
        if !self.is_mounted() {
            return;
        }
        self.offset = offset.min(self.max_offset());
        self.update_active();
    }

    /// Manual scroll by `delta` rows; cancels any smooth scroll
    pub fn scroll_by(&mut self, delta: i32) {
        if !self.is_mounted() {
            trace!("Scroll ignored: viewport not mounted");
            return;
        }
        let next = i64::from(self.offset) + i64::from(delta);
        self.target = None;
        self.idle_ticks = 0;
        self.set_offset(next.max(0) as u32);
    }

    /// Smooth scroll so that slide `index` fills the viewport
    pub fn jump_to_slide(&mut self, index: usize) {
        if !self.is_mounted() {
            trace!("Jump ignored: viewport not mounted");
            return;
        }
        let target = self.slide_start(index);
        if target != self.offset {
            self.target = Some(target);
        }
    }

    pub fn next_slide(&mut self) {
        let next = (self.nominal_slide() + 1).min(self.slide_count.saturating_sub(1));
        self.jump_to_slide(next);
    }

    pub fn previous_slide(&mut self) {
        self.jump_to_slide(self.nominal_slide().saturating_sub(1));
    }

    /// Slide the viewport is at or heading to
    fn nominal_slide(&self) -> usize {
        match (self.target, self.panel_height) {
            (Some(target), Some(h)) => active_slide_for(target, h, self.slide_count),
            _ => self.active,
        }
    }

    /// Advance animation by one frame; returns true if the offset moved
    pub fn tick(&mut self) -> bool {
        let Some(h) = self.panel_height else {
            return false;
        };

        if self.target.is_none() {
            let aligned = self.offset % u32::from(h) == 0;
            if aligned {
                return false;
            }
            self.idle_ticks = self.idle_ticks.saturating_add(1);
            if self.idle_ticks < self.snap_idle_ticks {
                return false;
            }
            self.target = Some(self.slide_start(self.active));
        }

        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.offset);
        let step = (distance / self.step_divisor).max(1);
        self.offset = if target > self.offset {
            self.offset + step
        } else {
            self.offset - step
        };
        if self.offset == target {
            self.target = None;
            self.idle_ticks = 0;
        }
        self.update_active();
        true
    }
}
