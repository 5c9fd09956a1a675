//! Metro route planner server.
//!
//! Builds an immutable graph of a rail network from station data and
//! answers shortest-route, station lookup and name search queries over a
//! JSON API.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod geo;
pub mod graph;
pub mod index;
pub mod network;
pub mod planner;
pub mod web;
