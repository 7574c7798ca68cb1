//! Depth ordering of the six box surfaces.

use crate::config::WallThresholds;
use smallvec::SmallVec;

/// The six faces of the box, in their base bottom-to-top order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Back,
    WallLeft,
    WallRight,
    WallTop,
    WallBottom,
    Front,
}

impl Surface {
    pub const ALL: [Surface; 6] = [
        Surface::Back,
        Surface::WallLeft,
        Surface::WallRight,
        Surface::WallTop,
        Surface::WallBottom,
        Surface::Front,
    ];

    /// Id of the page element for this surface.
    pub fn element_id(self) -> &'static str {
        match self {
            Surface::Back => "back",
            Surface::WallLeft => "wall-left",
            Surface::WallRight => "wall-right",
            Surface::WallTop => "wall-top",
            Surface::WallBottom => "wall-bottom",
            Surface::Front => "front",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

const BASE_ORDER: [Surface; 5] = [
    Surface::Back,
    Surface::WallLeft,
    Surface::WallRight,
    Surface::WallTop,
    Surface::WallBottom,
];

/// Bottom-to-top list of surfaces; slot `i` is drawn with z-index `i`.
///
/// A wall seen side-on is pushed a second time so its later slot lifts it
/// above the others. `Front` is always the last slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderStack {
    slots: SmallVec<[Surface; 7]>,
}

impl Default for RenderStack {
    fn default() -> Self {
        Self::compute(50.0, WallThresholds::default())
    }
}

impl RenderStack {
    pub fn compute(current_x: f64, thresholds: WallThresholds) -> Self {
        let mut slots: SmallVec<[Surface; 7]> = SmallVec::from_slice(&BASE_ORDER);
        if current_x < thresholds.left {
            slots.push(Surface::WallLeft);
        } else if current_x > thresholds.right {
            slots.push(Surface::WallRight);
        }
        slots.push(Surface::Front);
        Self { slots }
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `(z, surface)` pairs in traversal order, duplicates included.
    pub fn slots(&self) -> impl Iterator<Item = (usize, Surface)> + '_ {
        self.slots.iter().copied().enumerate()
    }

    /// Wall that was lifted above its base slot, if any.
    pub fn raised_wall(&self) -> Option<Surface> {
        (self.slots.len() > BASE_ORDER.len() + 1).then(|| self.slots[BASE_ORDER.len()])
    }

    /// Effective z-index per surface (indexed by [`Surface::index`]); later slots win.
    pub fn resolved_z(&self) -> [usize; 6] {
        let mut z = [0usize; 6];
        for (i, s) in self.slots() {
            z[s.index()] = i;
        }
        z
    }

    #[inline]
    pub fn z_of(&self, surface: Surface) -> usize {
        self.resolved_z()[surface.index()]
    }
}
