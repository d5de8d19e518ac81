use log::{debug, info, trace};

use super::{
    action::{Direction, Input},
    config::GameConfig,
    food::Food,
    grid::{Cell, Grid},
    snake::Snake,
};
use crate::error::Result;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    GameOver,
}

/// What ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the board
    Wall,
    /// Head ran into the snake's own tail
    SelfBite,
}

/// The tick-driven game: owns the snake and the food and applies the rules.
pub struct Session {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    state: SessionState,
    collision: Option<Collision>,
    ticks: u64,
    food_eaten: u32,
}

impl Session {
    /// Create a running session with randomly placed food
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::from_config(&config);
        Ok(Self::with_food(config, grid, Food::new(grid)))
    }

    /// Create a running session whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let grid = Grid::from_config(&config);
        Ok(Self::with_food(config, grid, Food::with_seed(grid, seed)))
    }

    fn with_food(config: GameConfig, grid: Grid, food: Food) -> Self {
        let mut session = Self {
            snake: Self::initial_snake(&config, grid),
            config,
            grid,
            food,
            state: SessionState::Running,
            collision: None,
            ticks: 0,
            food_eaten: 0,
        };
        session.reset();
        session
    }

    fn initial_snake(config: &GameConfig, grid: Grid) -> Snake {
        Snake::new(
            grid.center(),
            Direction::Right,
            config.initial_snake_length,
            grid.cell_size(),
            grid.total_cells(),
        )
    }

    /// Put the snake back at the center, respawn the food and start running
    pub fn reset(&mut self) {
        self.snake = Self::initial_snake(&self.config, self.grid);
        let food = self.food.spawn();
        self.state = SessionState::Running;
        self.collision = None;
        self.ticks = 0;
        self.food_eaten = 0;

        info!(
            "session reset: head at {:?}, food at {:?}",
            self.snake.head(),
            food
        );
    }

    /// Advance the simulation by one step and return the resulting state.
    ///
    /// Food and collisions are checked against the current head before the
    /// snake moves. A finished session is left untouched.
    pub fn tick(&mut self) -> SessionState {
        if self.state == SessionState::GameOver {
            return self.state;
        }
        self.ticks += 1;

        let head = self.snake.head();
        if head.is_near(self.food_cell(), self.config.eat_proximity) {
            self.snake.grow(1);
            self.food_eaten += 1;
            let food = self.food.spawn();
            debug!(
                "food eaten at {:?}, length will be {}, next food at {:?}",
                head,
                self.snake.target_len(),
                food
            );
        }

        if let Some(collision) = self.check_collision() {
            self.state = SessionState::GameOver;
            self.collision = Some(collision);
            info!(
                "game over after {} ticks: {:?} at {:?}, length {}",
                self.ticks,
                collision,
                head,
                self.snake.target_len()
            );
            return self.state;
        }

        self.snake.move_forward();
        trace!("head {:?} food {:?}", self.snake.head(), self.food_cell());

        self.state
    }

    fn check_collision(&self) -> Option<Collision> {
        if self
            .snake
            .collides_with_self(self.config.self_collision_tolerance + 1)
        {
            return Some(Collision::SelfBite);
        }

        if !self.grid.in_bounds(self.snake.head()) {
            return Some(Collision::Wall);
        }

        None
    }

    /// Apply a player input.
    ///
    /// Moves go through the snake's reversal guard while running; Restart
    /// only takes effect once the game is over. Returns whether the input
    /// changed anything.
    pub fn handle_direction_input(&mut self, input: Input) -> bool {
        match (self.state, input.direction()) {
            (SessionState::GameOver, None) => {
                self.reset();
                true
            }
            (SessionState::Running, Some(direction)) => {
                let accepted = self.snake.set_direction(direction);
                if !accepted {
                    debug!(
                        "ignored {} while moving {:?}",
                        input,
                        self.snake.direction()
                    );
                }
                accepted
            }
            _ => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// What ended the game, if it is over
    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    /// Snake joints, head first
    pub fn head_and_body(
        &self,
    ) -> impl DoubleEndedIterator<Item = Cell> + ExactSizeIterator + '_ {
        self.snake.joints()
    }

    pub fn food_cell(&self) -> Cell {
        self.food
            .current()
            .expect("food is spawned by reset before any tick")
    }

    /// Overwrite the food position, for scripted scenarios
    pub fn place_food(&mut self, cell: Cell) {
        self.food.place(cell);
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Ticks processed since the last reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }
}
