use rand::Rng;

/// Bounded rectangle of cells, row-major, advanced with the B3/S23 rule.
///
/// Off-grid positions are never wrapped: a cell on the border simply has
/// fewer neighbors.
pub struct Grid {
    cells: Vec<Vec<bool>>,
    /// Back buffer the next generation is written into before the swap
    next: Vec<Vec<bool>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an all-dead grid. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "Grid dimensions must be positive, got {}x{}",
            width,
            height
        );

        Self {
            cells: vec![vec![false; width]; height],
            next: vec![vec![false; width]; height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(row, col)` lies inside the grid
    pub fn exists(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Panics if `(row, col)` is outside the grid.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Panics if `(row, col)` is outside the grid.
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row][col] = alive;
    }

    /// Reseed every cell independently, alive with `probability`
    pub fn randomize(&mut self, probability: f64) {
        self.randomize_with(probability, &mut rand::thread_rng());
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) {
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                *cell = rng.gen_bool(probability);
            }
        }
    }

    /// Live cells among the (up to) 8 Moore neighbors that exist
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for row_offset in -1..=1isize {
            for col_offset in -1..=1isize {
                if row_offset == 0 && col_offset == 0 {
                    continue;
                }

                let neighbor_row = row as isize + row_offset;
                let neighbor_col = col as isize + col_offset;

                if self.exists(neighbor_row, neighbor_col)
                    && self.cells[neighbor_row as usize][neighbor_col as usize]
                {
                    count += 1;
                }
            }
        }

        count
    }

    /// Compute the next generation into the back buffer, then swap it in.
    ///
    /// Every neighbor count is taken from the current generation; the live
    /// buffer is never written mid-sweep.
    pub fn advance(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let alive = self.cells[row][col];
                let neighbors = self.live_neighbors(row, col);

                self.next[row][col] = matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }
}
