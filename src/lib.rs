//! ROI Projection - Visibility return-on-investment estimation
//!
//! This crate projects extra visitors, orders and revenue for a business as
//! its visibility in AI-driven search rises toward a set of targets, and
//! computes how quickly a fixed program cost is paid back.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
