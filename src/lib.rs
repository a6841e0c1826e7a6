pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod relations;
pub mod roots;
pub mod scorer;
pub mod tables;
pub mod ten_gods;
