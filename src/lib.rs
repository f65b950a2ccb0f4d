// Library surface for the simulator binary, batch mode and integration tests.
pub mod app_dirs;
pub mod batch;
pub mod config;
pub mod controller;
pub mod device;
pub mod draw;
pub mod error;
pub mod game;
pub mod history;
pub mod input_map;
pub mod panel;
pub mod pool;
pub mod runtime;
pub mod serial;
pub mod sim;
pub mod ui;

pub use error::LottoError;
