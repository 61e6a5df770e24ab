//! Linear-programming backend for the lineup engine.
//!
//! This crate provides [`LpBackend`], the default implementation of the
//! [`MipBackend`](lineup_core::MipBackend) trait. Programs are handed to
//! `good_lp` with every variable declared binary. The bundled `microlp`
//! engine is used unless the `cbc` feature selects COIN-OR CBC.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod backend;

pub use backend::LpBackend;
