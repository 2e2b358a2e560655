use std::time::Duration;

/// Time between two generations (~ 3 times a second)
pub const TICK_PERIOD: Duration = Duration::from_millis(333);

/// Probability of a cell starting alive when the grid is randomized
pub const DEFAULT_DENSITY: f64 = 0.2;

/// Glyph painted for a live cell
pub const ALIVE_GLYPH: char = '█';

/// Glyph painted for a dead cell
pub const DEAD_GLYPH: char = ' ';

/// Tunables for one session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    pub tick_period: Duration,
    pub density: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_period: TICK_PERIOD,
            density: DEFAULT_DENSITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_constants() {
        let config = SessionConfig::default();
        assert_eq!(config.tick_period, TICK_PERIOD);
        assert_eq!(config.density, DEFAULT_DENSITY);
    }

    #[test]
    fn test_density_is_a_probability() {
        assert!((0.0..=1.0).contains(&DEFAULT_DENSITY));
    }
}
