//! WorldTag: a terminal travel micro-journal built around an animated
//! confirmation dialog.

pub mod capture;
pub mod config;
pub mod locale;
pub mod logging;
pub mod shutdown;
pub mod ui;
