extern crate chrono;
#[macro_use]
extern crate diesel;
extern crate flexi_logger;
extern crate log;
extern crate lopdf;
extern crate serde;
extern crate serde_json;
extern crate tempfile;
extern crate thiserror;
extern crate ttf_parser;

pub mod admission;
pub mod enrollment_db;
pub mod fs_interaction;
pub mod host;
pub mod logging;
pub mod receipt;
pub mod settings;
