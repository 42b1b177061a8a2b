use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `pos` is the top-left corner (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Same rectangle shrunk by `margin` on every side
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            pos: self.pos + Vec2::splat(margin),
            size: self.size - Vec2::splat(margin * 2.0),
        }
    }

    /// Closed-interval overlap: touching edges count as overlapping
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.pos.x
            || self.pos.x > other.right()
            || self.bottom() < other.pos.y
            || self.pos.y > other.bottom())
    }
}

/// Obstacle variants, each with fixed geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObstacleKind {
    Small,
    Large,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 2] = [ObstacleKind::Small, ObstacleKind::Large];

    /// Pick a kind uniformly from a sample in [0, 1)
    pub fn from_sample(sample: f32) -> Self {
        let idx = (sample * Self::ALL.len() as f32) as usize;
        Self::ALL[idx.min(Self::ALL.len() - 1)]
    }
}

/// Obstacle component - scrolls left at game speed
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
    pub passed: bool,
}

impl Obstacle {
    pub fn new(rect: Rect, kind: ObstacleKind) -> Self {
        Self {
            rect,
            kind,
            passed: false,
        }
    }
}

/// Cloud component - decorative, scrolls at its own speed
#[derive(Debug, Clone, Copy)]
pub struct Cloud {
    pub rect: Rect,
    pub speed: f32,
}

impl Cloud {
    pub fn new(rect: Rect, speed: f32) -> Self {
        Self { rect, speed }
    }
}

/// Monotonic spawn counter, keeps snapshot ordering stable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpawnOrder(pub u64);

/// In-flight jump integration state
#[derive(Debug, Clone, Copy)]
pub struct Jump {
    pub velocity: f32,
    pub accumulator: f32, // Seconds not yet consumed by jump ticks
}

impl Jump {
    pub fn new(velocity: f32) -> Self {
        Self {
            velocity,
            accumulator: 0.0,
        }
    }
}

/// The single player sprite
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub rect: Rect,
    pub ducking: bool,
    pub jump: Option<Jump>,
}

impl Player {
    pub fn new(x: f32, ground_y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, ground_y, width, height),
            ducking: false,
            jump: None,
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.jump.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            (Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(5.0, 5.0, 10.0, 10.0)),
            (Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(20.0, 0.0, 10.0, 10.0)),
            (Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(10.0, 10.0, 5.0, 5.0)),
            (Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(0.0, 10.5, 10.0, 10.0)),
            (Rect::new(2.0, 2.0, 1.0, 1.0), Rect::new(0.0, 0.0, 10.0, 10.0)),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_separated_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.1, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, -20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_inset_shrinks_every_side() {
        let rect = Rect::new(50.0, 200.0, 40.0, 40.0).inset(5.0);
        assert_eq!(rect, Rect::new(55.0, 205.0, 30.0, 30.0));
    }

    #[test]
    fn test_kind_from_sample_covers_both() {
        assert_eq!(ObstacleKind::from_sample(0.0), ObstacleKind::Small);
        assert_eq!(ObstacleKind::from_sample(0.49), ObstacleKind::Small);
        assert_eq!(ObstacleKind::from_sample(0.5), ObstacleKind::Large);
        assert_eq!(ObstacleKind::from_sample(0.999), ObstacleKind::Large);
        assert_eq!(ObstacleKind::from_sample(1.0), ObstacleKind::Large);
    }
}
