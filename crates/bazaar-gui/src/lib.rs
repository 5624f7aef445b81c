//! Bazaar Admin Studio - GUI Library
//!
//! Core application types and modules for the Bazaar Admin Studio desktop
//! back-office.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod config;
pub mod handler;
pub mod message;
pub mod resource;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
