//! The datatables zero-configuration demo and the sort-table scenarios run
//! against it.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use suite_config::{CaseConfig, ConfResult, ConfigView, SuiteConfig, ValueResultExt};
use tracing::{debug, info};

use crate::common::CommonPage;
use crate::driver::{BrowserDriver, ClickOptions, LoadState};
use crate::error::{PageError, PageResult};

/// Location of the demo relative to the suite domain.
pub const ZERO_CONFIG_PATH: &str = "/examples/basic_init/zero_configuration.html";

const DOMAIN_KEY: &str = "domain";
const RESULTS_TABLE: usize = 1;

/// Column sort direction, spelled as the header's `aria-sort` value.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// The `aria-sort` value for this order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case data consumed by the sort-table scenarios.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SortTableCase {
    /// Header label of the column to sort.
    pub sort_column: String,
    /// Requested direction.
    pub sort_type: SortOrder,
    /// How many pages to walk, starting at the first.
    pub page_number: usize,
    /// Exclusive lower age bound.
    #[serde(default)]
    pub min_age: Option<i64>,
    /// Exclusive upper age bound.
    #[serde(default)]
    pub max_age: Option<i64>,
}

impl SortTableCase {
    /// Reads the scenario fields from a resolved case.
    ///
    /// # Errors
    ///
    /// Returns [`suite_config::ConfError::Value`] when a field is missing or
    /// has the wrong type.
    pub fn from_case(case: &CaseConfig) -> ConfResult<Self> {
        serde_json::from_value(Value::Object(case.as_map().clone())).for_key("case")
    }
}

/// The zero-configuration table demo.
#[derive(Debug)]
pub struct ZeroConfigPage<D> {
    page: CommonPage<D>,
}

impl<D: BrowserDriver> ZeroConfigPage<D> {
    /// Wraps `driver` for the demo hosted on `domain`.
    pub fn new(driver: D, domain: impl Into<String>) -> Self {
        Self {
            page: CommonPage::new(driver, domain),
        }
    }

    /// Builds the page from the suite's `domain` setting.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingSetting`] when `domain` is absent or not a
    /// string.
    pub fn for_suite(driver: D, suite: &SuiteConfig) -> PageResult<Self> {
        let domain = suite
            .get_str(DOMAIN_KEY)
            .ok_or_else(|| PageError::MissingSetting {
                key: DOMAIN_KEY.to_owned(),
            })?;
        Ok(Self::new(driver, domain))
    }

    /// Generic helpers for this page.
    #[must_use]
    pub const fn common(&self) -> &CommonPage<D> {
        &self.page
    }

    /// Generic helpers for this page, mutably.
    pub const fn common_mut(&mut self) -> &mut CommonPage<D> {
        &mut self.page
    }

    /// Releases the driver.
    #[must_use]
    pub fn into_driver(self) -> D {
        self.page.into_driver()
    }

    /// Opens the demo and waits for the DOM.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] when navigation fails.
    pub fn open(&mut self) -> PageResult<()> {
        self.page.goto(ZERO_CONFIG_PATH)?;
        self.page
            .driver_mut()
            .wait_for_load_state(LoadState::DomContentLoaded)?;
        Ok(())
    }

    /// Sorts the table by the column whose header mentions `column`.
    ///
    /// The header is clicked once, then again if its `aria-sort` does not
    /// already read `order`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] when the header cannot be found.
    pub fn sort_by_column(&mut self, column: &str, order: SortOrder) -> PageResult<()> {
        let header = format!("//th[contains(@aria-label, '{column}')]");
        let options = ClickOptions::default();
        let driver = self.page.driver_mut();
        driver.click(&header, &options)?;
        if driver.attribute(&header, "aria-sort")?.as_deref() != Some(order.as_str()) {
            driver.click(&header, &options)?;
        }
        driver.wait_for_load_state(LoadState::DomContentLoaded)?;
        debug!(column, %order, "table sorted");
        Ok(())
    }

    /// Moves to result page `page`. The first page is already showing, so
    /// `page <= 1` does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] when the button is missing.
    pub fn click_paging_button(&mut self, page: usize) -> PageResult<()> {
        if page > 1 {
            self.page
                .click(&format!("//button[@class='dt-paging-button'][{page}]"), None)?;
        }
        Ok(())
    }

    /// Walks the first `pages` result pages and returns the `Name` of every
    /// row whose `Age` satisfies `keep`.
    fn collect_names<F>(&mut self, pages: usize, mut keep: F) -> PageResult<Vec<String>>
    where
        F: FnMut(&str) -> bool,
    {
        let mut names = Vec::new();
        for page in 1..=pages {
            self.click_paging_button(page)?;
            let rows = self.page.count_rows(RESULTS_TABLE)?;
            for row in 1..=rows {
                let age = self.page.data_by_column_label("Age", row)?;
                if keep(&age) {
                    let name = self.page.data_by_column_label("Name", row)?;
                    info!(page, row, %age, %name, "matched row");
                    names.push(name);
                }
            }
        }
        Ok(names)
    }
}

/// Leading integer of `raw`, ignoring surrounding whitespace.
fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(idx, c)| !(c.is_ascii_digit() || (idx == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(idx, _)| idx);
    trimmed.get(..end)?.parse().ok()
}

/// Names of people strictly older than `min` and younger than `max` across
/// the first `pages` pages.
///
/// Ages that do not start with a number never match.
///
/// # Errors
///
/// Returns [`PageError`] when the table cannot be read.
pub fn names_with_age_between<D: BrowserDriver>(
    page: &mut ZeroConfigPage<D>,
    pages: usize,
    min: i64,
    max: i64,
) -> PageResult<Vec<String>> {
    page.collect_names(pages, |age| {
        leading_int(age).is_some_and(|years| years > min && years < max)
    })
}

/// Names of people whose age ends in `digit` across the first `pages` pages.
///
/// # Errors
///
/// Returns [`PageError`] when the table cannot be read.
pub fn names_with_age_ending_in<D: BrowserDriver>(
    page: &mut ZeroConfigPage<D>,
    pages: usize,
    digit: char,
) -> PageResult<Vec<String>> {
    page.collect_names(pages, |age| age.ends_with(digit))
}
