//! Generic page helpers shared by every page object.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::driver::{BrowserDriver, ClickOptions, DriverError, ElementState, LoadState};
use crate::error::{PageError, PageResult};

/// Default wait for [`CommonPage::wait_until_visible`] and
/// [`CommonPage::is_text_visible`].
pub const DEFAULT_VISIBLE_TIMEOUT: Duration = Duration::from_secs(3);

const HIDDEN_TIMEOUT: Duration = Duration::from_secs(20);
const SELECTOR_TIMEOUT: Duration = Duration::from_secs(30);
const CLICK_DELAY: Duration = Duration::from_millis(200);
const ROW_LABEL_READS: usize = 10;
const DETAIL_PANEL: &str =
    "//h4[normalize-space()='Detail']//following-sibling::div[@class='d-flex']";
const ROUTER_PUSH: &str =
    "(path) => window.registerPlugin().config.globalProperties.$router.push(`${path}`)";

/// Collapses runs of `/` unless they follow a `:`, so `https://` survives.
fn collapse_slashes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == '/' {
            let mut tail = out.chars().rev();
            let last = tail.next();
            let before = tail.next();
            if last == Some('/') && before.is_some_and(|c| c != ':') {
                continue;
            }
        }
        out.push(ch);
    }
    out
}

/// Page helpers bound to one site domain.
#[derive(Debug)]
pub struct CommonPage<D> {
    driver: D,
    domain: String,
}

impl<D: BrowserDriver> CommonPage<D> {
    /// Wraps `driver` for pages served from `domain`.
    pub fn new(driver: D, domain: impl Into<String>) -> Self {
        Self {
            driver,
            domain: domain.into(),
        }
    }

    /// Domain relative paths resolve against.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Underlying driver.
    #[must_use]
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Underlying driver, mutably.
    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Releases the driver.
    #[must_use]
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// URL that [`goto`](Self::goto) visits for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use suite_pages::{BrowserDriver, CommonPage};
    /// # fn demo<D: BrowserDriver>(driver: D) {
    /// let page = CommonPage::new(driver, "datatables.net");
    /// assert_eq!(page.url_for("//examples//a.html"), "https://datatables.net/examples/a.html");
    /// assert_eq!(page.url_for("http://other.test/x"), "http://other.test/x");
    /// # }
    /// ```
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_owned();
        }
        format!(
            "https://{}",
            collapse_slashes(&format!("{}/{path}", self.domain))
        )
    }

    /// Opens `path` on the page's domain and waits for `load`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] when navigation fails.
    pub fn goto(&mut self, path: &str) -> PageResult<()> {
        let url = self.url_for(path);
        debug!(%url, "navigating");
        self.driver.navigate(&url)?;
        self.driver.wait_for_load_state(LoadState::Load)?;
        Ok(())
    }

    /// Pushes `path` onto the single-page app's client-side router.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] when the script fails.
    pub fn goto_with_router(&mut self, path: &str) -> PageResult<()> {
        let route = collapse_slashes(&format!("/{path}"));
        debug!(%route, "routing");
        self.driver.evaluate(ROUTER_PUSH, &Value::String(route))?;
        Ok(())
    }

    /// Trimmed text content of `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingText`] when the element has no text.
    pub fn text_content(&self, selector: &str) -> PageResult<String> {
        self.driver
            .text_content(selector)?
            .map(|text| text.trim().to_owned())
            .ok_or_else(|| PageError::MissingText {
                selector: selector.to_owned(),
            })
    }

    /// Waits for `selector` to become visible.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] on timeout.
    pub fn wait_until_visible(&mut self, selector: &str, timeout: Duration) -> PageResult<()> {
        Ok(self.driver.wait_for(selector, ElementState::Visible, timeout)?)
    }

    /// Waits up to twenty seconds for `selector` to disappear.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] on timeout.
    pub fn wait_until_hidden(&mut self, selector: &str) -> PageResult<()> {
        Ok(self
            .driver
            .wait_for(selector, ElementState::Hidden, HIDDEN_TIMEOUT)?)
    }

    /// Idles for `delay`, then reports whether `selector` is visible.
    ///
    /// Prefer [`wait_until_visible`](Self::wait_until_visible); this exists for
    /// elements that flicker.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] if the query fails.
    pub fn is_visible_after(&mut self, selector: &str, delay: Duration) -> PageResult<bool> {
        self.driver.pause(delay);
        Ok(self.driver.is_visible(selector)?)
    }

    /// Clicks the `order`th `element` whose normalised text equals `label`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] when no such element exists.
    pub fn click_with_label(&mut self, element: &str, label: &str, order: usize) -> PageResult<()> {
        let selector = format!("(//{element}[normalize-space()='{label}'])[{order}]");
        self.driver.scroll_into_view(&selector)?;
        self.driver.click(&selector, &ClickOptions::default())?;
        Ok(())
    }

    /// Rendered text of cell (`row`, `column`) in the `table`th table body.
    /// Indices are 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] when the cell does not exist.
    pub fn data_table_cell(&self, table: usize, row: usize, column: usize) -> PageResult<String> {
        let selector = format!("(//table/tbody)[{table}]/tr[{row}]/td[{column}]");
        Ok(self.driver.inner_text(&selector)?)
    }

    /// Number of rows in the `table`th table body.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] if the query fails.
    pub fn count_rows(&self, table: usize) -> PageResult<usize> {
        Ok(self.driver.count(&format!("(//table//tbody)[{table}]//tr"))?)
    }

    /// Text of row `row` in the column whose header's `aria-label` contains
    /// `label`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingText`] or [`PageError::Driver`] when the
    /// cell cannot be read.
    pub fn data_by_column_label(&self, label: &str, row: usize) -> PageResult<String> {
        let preceding =
            format!("//tr//th[contains(@aria-label,'{label}')]/preceding-sibling::th");
        let column = self.driver.count(&preceding)? + 1;
        self.text_content(&format!("(//table/tbody//tr[{row}]//td[{column}])"))
    }

    /// Value shown next to `label` in a detail panel.
    ///
    /// The value may render late, so empty reads are retried up to ten times.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] when the panel never appears.
    pub fn data_by_row_label(&mut self, label: &str) -> PageResult<String> {
        self.driver.wait_for_load_state(LoadState::NetworkIdle)?;
        self.driver
            .wait_for(DETAIL_PANEL, ElementState::Attached, SELECTOR_TIMEOUT)?;
        let title = format!("//div[@class='p-b' and normalize-space()='{label}']");
        let index = self
            .driver
            .count(&format!("{title}//preceding-sibling::div"))?
            + 1;
        let selector = format!("({title}/../following-sibling::div//div)[{index}]");
        self.driver
            .wait_for(&selector, ElementState::Attached, SELECTOR_TIMEOUT)?;

        let mut data = String::new();
        for _ in 0..ROW_LABEL_READS {
            data = self.text_content(&selector)?;
            if !data.is_empty() {
                break;
            }
        }
        Ok(data)
    }

    /// Clicks `selector`, inside `frame` when given.
    ///
    /// Top-level clicks hold the mouse for 200 ms.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] when nothing matches.
    pub fn click(&mut self, selector: &str, frame: Option<&str>) -> PageResult<()> {
        let options = frame.map_or_else(|| ClickOptions::with_delay(CLICK_DELAY), ClickOptions::in_frame);
        Ok(self.driver.click(selector, &options)?)
    }

    /// Whether the `index`th element containing `text` attaches in time.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] for failures other than a timeout.
    pub fn is_text_visible(&mut self, text: &str, index: usize, timeout: Duration) -> PageResult<bool> {
        self.is_attached(&format!("(//*[contains(text(),\"{text}\")])[{index}]"), timeout)
    }

    /// Text content of every match of `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] if the query fails.
    pub fn all_text_contents(&self, selector: &str) -> PageResult<Vec<String>> {
        Ok(self.driver.all_text_contents(selector)?)
    }

    /// Whether `selector` is attached to the DOM within `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Driver`] for failures other than a timeout or a
    /// missing element.
    pub fn is_attached(&mut self, selector: &str, timeout: Duration) -> PageResult<bool> {
        match self.driver.wait_for(selector, ElementState::Attached, timeout) {
            Ok(()) => Ok(true),
            Err(DriverError::Timeout { .. } | DriverError::NotFound { .. }) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
