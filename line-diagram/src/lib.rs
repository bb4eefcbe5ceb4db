//! SkyTrain line diagram controller.
//!
//! Drives an LED panel with one light per station on the Expo and
//! Millennium lines, animating routes found across the network.

pub mod config;
pub mod diagram;
pub mod domain;
pub mod modes;
pub mod panel;
pub mod planner;
pub mod remote;
pub mod topology;
pub mod web;
