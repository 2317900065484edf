//! Player-adjustable game settings shown next to the board.
//!
//! Every adjuster clamps its value so the settings sent to the server are
//! always usable.
use game_core::{Grid, MoveRequest, Strategy, TilePos};

pub const DEFAULT_GRID_SIZE: usize = 7;
pub const MAX_GRID_SIZE: usize = 99;
pub const DEFAULT_DEADLINE: f64 = 1.0;
pub const DEFAULT_DEPTH: u32 = 4;

/// Step applied by the deadline adjusters, in seconds.
pub const DEADLINE_STEP: f64 = 0.5;
pub const MIN_DEADLINE: f64 = 0.5;

/// Settings attached to new games and move requests.
#[derive(Clone, Debug, PartialEq)]
pub struct GameControls {
    pub size: usize,
    pub deadline: f64,
    pub strategy: Strategy,
    pub depth: u32,
    pub alpha_beta: bool,
}

impl Default for GameControls {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            deadline: DEFAULT_DEADLINE,
            strategy: Strategy::default(),
            depth: DEFAULT_DEPTH,
            alpha_beta: false,
        }
    }
}

impl GameControls {
    pub fn grow(&mut self) {
        self.size = self.size.saturating_add(1).min(MAX_GRID_SIZE);
    }

    pub fn shrink(&mut self) {
        self.size = self.size.saturating_sub(1).max(1);
    }

    pub fn extend_deadline(&mut self) {
        self.deadline += DEADLINE_STEP;
    }

    pub fn shorten_deadline(&mut self) {
        self.deadline = (self.deadline - DEADLINE_STEP).max(MIN_DEADLINE);
    }

    pub fn cycle_strategy(&mut self) {
        self.strategy = self.strategy.next();
    }

    pub fn deepen(&mut self) {
        self.depth = self.depth.saturating_add(1);
    }

    pub fn shallow(&mut self) {
        self.depth = self.depth.saturating_sub(1).max(1);
    }

    pub fn toggle_alpha_beta(&mut self) {
        self.alpha_beta = !self.alpha_beta;
    }

    /// Clamp values loaded from configuration into the adjusters' ranges.
    pub fn normalized(mut self) -> Self {
        self.size = self.size.clamp(1, MAX_GRID_SIZE);
        if !self.deadline.is_finite() || self.deadline < MIN_DEADLINE {
            self.deadline = MIN_DEADLINE;
        }
        self.depth = self.depth.max(1);
        self
    }

    /// Build the move request for a click on `tile`.
    pub fn move_request(&self, tile: TilePos, grid: Grid) -> MoveRequest {
        MoveRequest {
            clicked_tile: tile,
            deadline: self.deadline,
            strategy: self.strategy,
            depth: self.depth,
            alpha_beta_pruning: self.alpha_beta,
            grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjusters_respect_lower_bounds() {
        let mut controls = GameControls {
            size: 2,
            deadline: 1.0,
            depth: 2,
            ..GameControls::default()
        };

        for _ in 0..5 {
            controls.shrink();
            controls.shorten_deadline();
            controls.shallow();
        }
        assert_eq!(controls.size, 1);
        assert_eq!(controls.deadline, MIN_DEADLINE);
        assert_eq!(controls.depth, 1);

        controls.grow();
        controls.extend_deadline();
        controls.deepen();
        assert_eq!(controls.size, 2);
        assert_eq!(controls.deadline, 1.0);
        assert_eq!(controls.depth, 2);
    }

    #[test]
    fn strategy_cycles_through_every_variant() {
        let mut controls = GameControls::default();
        let start = controls.strategy;
        let mut seen = vec![start];
        loop {
            controls.cycle_strategy();
            if controls.strategy == start {
                break;
            }
            seen.push(controls.strategy);
        }
        assert_eq!(seen.len(), Strategy::ALL.len());
    }

    #[test]
    fn normalized_fixes_out_of_range_config() {
        let controls = GameControls {
            size: 0,
            deadline: f64::NAN,
            depth: 0,
            ..GameControls::default()
        }
        .normalized();
        assert_eq!(controls.size, 1);
        assert_eq!(controls.deadline, MIN_DEADLINE);
        assert_eq!(controls.depth, 1);

        let controls = GameControls {
            size: usize::MAX,
            ..GameControls::default()
        }
        .normalized();
        assert_eq!(controls.size, MAX_GRID_SIZE);
    }

    #[test]
    fn grow_stops_at_the_largest_board() {
        let mut controls = GameControls {
            size: MAX_GRID_SIZE - 1,
            ..GameControls::default()
        };
        controls.grow();
        controls.grow();
        assert_eq!(controls.size, MAX_GRID_SIZE);
    }

    #[test]
    fn move_request_carries_every_setting() {
        let mut controls = GameControls::default();
        controls.toggle_alpha_beta();
        controls.cycle_strategy();

        let grid = Grid::empty(3);
        let request = controls.move_request(TilePos::new(1, 2), grid.clone());
        assert_eq!(request.clicked_tile, TilePos::new(1, 2));
        assert_eq!(request.deadline, DEFAULT_DEADLINE);
        assert_eq!(request.strategy, controls.strategy);
        assert_eq!(request.depth, DEFAULT_DEPTH);
        assert!(request.alpha_beta_pruning);
        assert_eq!(request.grid, grid);
    }
}
