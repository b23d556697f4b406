//! ClarifyScope - Research Goal Clarification Backend
//!
//! This crate implements an AI-assisted clarification service that turns a
//! rough research goal into a structured interview script through guided
//! conversation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
