//! Startup configuration.

use std::env;

use log::warn;

use crate::compute::DEFAULT_CHUNK_LEN;

/// Overrides [`Config::threads`].
pub const THREADS_VAR: &str = "MANDELBROT_THREADS";

/// Overrides [`Config::chunk_len`].
pub const CHUNK_LEN_VAR: &str = "MANDELBROT_CHUNK_LEN";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub origin_real: f64,
    pub origin_imag: f64,
    /// Width of the complex-plane rectangle at startup. The height follows
    /// from the raster's aspect ratio.
    pub initial_width: f64,
    pub max_iterations: i32,
    pub zoom_step: i32,
    /// Worker threads used by the parallel stages.
    pub threads: usize,
    /// Minimum number of samples handed to a worker at once.
    pub chunk_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin_real: -2.0,
            origin_imag: -1.25,
            initial_width: 4.5,
            max_iterations: 500,
            zoom_step: 10,
            threads: num_cpus::get(),
            chunk_len: DEFAULT_CHUNK_LEN,
        }
    }
}

impl Config {
    /// Default configuration with worker settings taken from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(threads) = positive_var(THREADS_VAR) {
            config.threads = threads;
        }
        if let Some(chunk_len) = positive_var(CHUNK_LEN_VAR) {
            config.chunk_len = chunk_len;
        }
        config
    }
}

fn positive_var(name: &str) -> Option<usize> {
    let value = env::var(name).ok()?;
    parse_positive(&value).or_else(|| {
        warn!("ignoring {}={:?}: expected a positive integer", name, value);
        None
    })
}

fn parse_positive(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_startup_viewport() {
        let config = Config::default();
        assert_eq!(config.origin_real, -2.0);
        assert_eq!(config.origin_imag, -1.25);
        assert_eq!(config.initial_width, 4.5);
        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.zoom_step, 10);
        assert!(config.threads >= 1);
        assert_eq!(config.chunk_len, DEFAULT_CHUNK_LEN);
    }

    #[test]
    fn parse_positive_rejects_zero_and_garbage() {
        assert_eq!(parse_positive("8"), Some(8));
        assert_eq!(parse_positive(" 16 "), Some(16));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-3"), None);
        assert_eq!(parse_positive("many"), None);
    }
}
