//! Gift tracker core.
//!
//! A local-first data layer for tracking gift ideas per recipient: the
//! persistent key-value store, the recipient and gift services that own the
//! in-memory collections, and the state machines backing the editor forms.
//! Screens, navigation, image picking and date widgets live outside this
//! crate and consume it.

pub mod domain;
pub mod storage;
