//! Page objects for the datatables end-to-end suite.
//!
//! Pages drive a browser through the [`BrowserDriver`] trait so the same
//! page logic runs against a real automation backend or an in-memory
//! stand-in. [`CommonPage`] carries the generic helpers; [`ZeroConfigPage`]
//! adds the zero-configuration table demo on top.

mod common;
mod driver;
mod error;
mod zero_config;

pub use common::{CommonPage, DEFAULT_VISIBLE_TIMEOUT};
pub use driver::{BrowserDriver, ClickOptions, DriverError, ElementState, LoadState};
pub use error::{PageError, PageResult};
pub use zero_config::{
    SortOrder, SortTableCase, ZERO_CONFIG_PATH, ZeroConfigPage, names_with_age_between,
    names_with_age_ending_in,
};
