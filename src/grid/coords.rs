use crate::{
    domain::model::Location,
    foundation::core::{Point, Rect, SCENE_SIZE},
    grid::mode::GridMode,
};

const DIAMOND_HAND_POINTS: [(Location, Point); 4] = [
    (Location::North, Point::new(475.0, 331.9)),
    (Location::East, Point::new(618.1, 475.0)),
    (Location::South, Point::new(475.0, 618.1)),
    (Location::West, Point::new(331.9, 475.0)),
];

const DIAMOND_LAYER2_POINTS: [(Location, Point); 4] = [
    (Location::NorthEast, Point::new(618.1, 331.9)),
    (Location::SouthEast, Point::new(618.1, 618.1)),
    (Location::SouthWest, Point::new(331.9, 618.1)),
    (Location::NorthWest, Point::new(331.9, 331.9)),
];

const BOX_HAND_POINTS: [(Location, Point); 4] = [
    (Location::NorthEast, Point::new(576.2, 373.8)),
    (Location::SouthEast, Point::new(576.2, 576.2)),
    (Location::SouthWest, Point::new(373.8, 576.2)),
    (Location::NorthWest, Point::new(373.8, 373.8)),
];

const BOX_LAYER2_POINTS: [(Location, Point); 4] = [
    (Location::North, Point::new(475.0, 272.6)),
    (Location::East, Point::new(677.4, 475.0)),
    (Location::South, Point::new(475.0, 677.4)),
    (Location::West, Point::new(272.6, 475.0)),
];

#[derive(Clone, Debug, PartialEq)]
/// Full point tables of one grid mode.
pub struct GridPoints {
    /// Points the hands sit on.
    pub hand_points: Vec<(Location, Point)>,
    /// Outer points arrows are anchored to.
    pub layer2_points: Vec<(Location, Point)>,
}

/// Static mapping from grid location to scene coordinate.
pub struct CoordinateSystem;

impl CoordinateSystem {
    /// Center of the scene.
    pub fn scene_center() -> Point {
        Point::new(SCENE_SIZE / 2.0, SCENE_SIZE / 2.0)
    }

    /// Scene bounds.
    pub fn scene_bounds() -> Rect {
        Rect::new(0.0, 0.0, SCENE_SIZE, SCENE_SIZE)
    }

    /// `true` when `p` lies inside the scene (edges included).
    pub fn is_within_bounds(p: Point) -> bool {
        let b = Self::scene_bounds();
        p.x >= b.x0 && p.x <= b.x1 && p.y >= b.y0 && p.y <= b.y1
    }

    fn tables(mode: GridMode) -> (&'static [(Location, Point)], &'static [(Location, Point)]) {
        match mode {
            GridMode::Diamond => (&DIAMOND_HAND_POINTS, &DIAMOND_LAYER2_POINTS),
            GridMode::Box => (&BOX_HAND_POINTS, &BOX_LAYER2_POINTS),
            // Skewed is handled by the callers as a union.
            GridMode::Skewed => (&[], &[]),
        }
    }

    /// Point tables for `mode`; skewed is the union of diamond and box.
    pub fn points(mode: GridMode) -> GridPoints {
        match mode {
            GridMode::Skewed => {
                let diamond = Self::points(GridMode::Diamond);
                let boxed = Self::points(GridMode::Box);
                GridPoints {
                    hand_points: diamond
                        .hand_points
                        .into_iter()
                        .chain(boxed.hand_points)
                        .collect(),
                    layer2_points: diamond
                        .layer2_points
                        .into_iter()
                        .chain(boxed.layer2_points)
                        .collect(),
                }
            }
            mode => {
                let (hand, layer2) = Self::tables(mode);
                GridPoints {
                    hand_points: hand.to_vec(),
                    layer2_points: layer2.to_vec(),
                }
            }
        }
    }

    /// Scene coordinate of `location` in `mode`, hand points first, then layer-2 points.
    pub fn coordinate(location: Location, mode: GridMode) -> Option<Point> {
        let modes: &[GridMode] = match mode {
            GridMode::Skewed => &[GridMode::Diamond, GridMode::Box],
            GridMode::Diamond => &[GridMode::Diamond],
            GridMode::Box => &[GridMode::Box],
        };
        let find = |table: &[(Location, Point)]| {
            table
                .iter()
                .find(|(loc, _)| *loc == location)
                .map(|(_, p)| *p)
        };

        modes
            .iter()
            .find_map(|m| find(Self::tables(*m).0))
            .or_else(|| modes.iter().find_map(|m| find(Self::tables(*m).1)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/coords.rs"]
mod tests;
