#[macro_use]
extern crate rocket;

pub mod catchers;
pub mod configuration;
pub mod cors;
pub mod dispatcher;
pub mod domain;
pub mod email;
pub mod port_saver;
pub mod routes;
pub mod startup;
pub mod telemetry;
