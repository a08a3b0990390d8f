//! Interactive escape-time Mandelbrot renderer.
//!
//! Each frame samples the current [`viewport::Viewport`] at every pixel
//! ([`grid`]), counts escape iterations in parallel ([`escape`]) and maps the
//! counts onto a 16-colour palette ([`colour`]). [`frame::Renderer`] runs that
//! pipeline and [`session::Session`] feeds it pan and zoom commands.

pub mod colour;
pub mod compute;
pub mod config;
pub mod error;
pub mod escape;
pub mod frame;
pub mod grid;
pub mod pixel;
pub mod screen;
pub mod session;
pub mod viewport;
