//! Sorting and paging the zero-configuration demo table.
//!
//! Each test resolves its case data from `sort_table.json` beside this file,
//! exactly as a browser run would, then drives the in-memory demo.

#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use camino::Utf8PathBuf;
use common::{Column, DataTablesDriver, EMPLOYEES, Employee, Event, sort_rows};
use rstest::{fixture, rstest};
use suite_config::{Environment, TestConfig};
use suite_pages::{
    BrowserDriver, ClickOptions, LoadState, PageError, SortOrder, SortTableCase, ZeroConfigPage,
    names_with_age_between, names_with_age_ending_in,
};

const DEMO_URL: &str = "https://datatables.net/examples/basic_init/zero_configuration.html";

fn this_file() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/zero_config/sort_table.rs")
}

fn open_case(
    driver: DataTablesDriver,
    title: &str,
) -> Result<(ZeroConfigPage<DataTablesDriver>, SortTableCase)> {
    let conf = TestConfig::for_test(&this_file(), title, None)?;
    let case = SortTableCase::from_case(conf.case_conf())?;
    let mut page = ZeroConfigPage::for_suite(driver, conf.suite_conf())?;
    page.open()?;
    Ok((page, case))
}

/// Names the first `pages` pages would show after sorting, filtered by age.
fn expected_names(
    column: Column,
    order: SortOrder,
    pages: usize,
    keep: impl Fn(&Employee) -> bool,
) -> Vec<&'static str> {
    let mut rows = EMPLOYEES.to_vec();
    sort_rows(&mut rows, column, order);
    rows.into_iter()
        .take(pages * 10)
        .filter(|e| keep(e))
        .map(|e| e.name)
        .collect()
}

fn person(name: &'static str, age: u32, start_date: &'static str, salary: u32) -> Employee {
    Employee {
        name,
        position: "Developer",
        office: "London",
        age,
        start_date,
        salary,
    }
}

#[fixture]
fn driver() -> DataTablesDriver {
    DataTablesDriver::demo().expect("selector patterns compile")
}

#[rstest]
fn test_case_1_lists_names_aged_between_bounds(driver: DataTablesDriver) -> Result<()> {
    let (mut page, case) = open_case(driver, "Test case 1 @TC_01")?;
    assert_eq!(case.sort_column, "Start date");
    assert_eq!(case.sort_type, SortOrder::Ascending);
    let (min, max) = (case.min_age.unwrap_or(30), case.max_age.unwrap_or(40));

    page.sort_by_column(&case.sort_column, case.sort_type)?;
    let names = names_with_age_between(&mut page, case.page_number, min, max)?;

    let expected = expected_names(Column::StartDate, SortOrder::Ascending, 5, |e| {
        e.age > 30 && e.age < 40
    });
    assert!(!expected.is_empty());
    assert_eq!(names, expected);
    let driver = page.into_driver();
    assert_eq!(driver.page(), 5);
    assert_eq!(
        driver.events().first(),
        Some(&Event::Navigate(DEMO_URL.to_owned()))
    );
    Ok(())
}

#[rstest]
fn test_case_2_lists_names_with_age_ending_in_nine(driver: DataTablesDriver) -> Result<()> {
    let (mut page, case) = open_case(driver, "Test case 2 @TC_02")?;
    assert_eq!(case.min_age, None);

    page.sort_by_column(&case.sort_column, case.sort_type)?;
    let names = names_with_age_ending_in(&mut page, case.page_number, '9')?;

    let expected = expected_names(Column::Salary, SortOrder::Descending, 5, |e| {
        e.age.to_string().ends_with('9')
    });
    assert_eq!(names, expected);
    assert!(names.contains(&"Herrod Chandler".to_owned()));
    assert!(!names.contains(&"Tiger Nixon".to_owned()));
    Ok(())
}

#[rstest]
fn hand_checked_walk_over_two_small_pages() -> Result<()> {
    let rows = vec![
        person("Ada", 31, "2010-01-01", 100),
        person("Bo", 45, "2009-01-01", 300),
        person("Cy", 39, "2011-01-01", 200),
        person("Di", 29, "2008-01-01", 50),
    ];
    let mut page = ZeroConfigPage::new(DataTablesDriver::new(rows.clone(), 2)?, "datatables.net");
    page.open()?;

    page.sort_by_column("Start date", SortOrder::Ascending)?;
    assert_eq!(names_with_age_between(&mut page, 2, 30, 40)?, ["Ada", "Cy"]);

    let mut page = ZeroConfigPage::new(DataTablesDriver::new(rows, 2)?, "datatables.net");
    page.open()?;
    page.sort_by_column("Salary", SortOrder::Descending)?;
    assert_eq!(names_with_age_ending_in(&mut page, 2, '9')?, ["Cy", "Di"]);
    Ok(())
}

#[rstest]
fn bounds_are_exclusive() -> Result<()> {
    let rows = vec![
        person("Low", 30, "2010-01-01", 1),
        person("Mid", 35, "2010-01-02", 1),
        person("High", 40, "2010-01-03", 1),
    ];
    let mut page = ZeroConfigPage::new(DataTablesDriver::new(rows, 10)?, "datatables.net");
    page.open()?;
    assert_eq!(names_with_age_between(&mut page, 1, 30, 40)?, ["Mid"]);
    Ok(())
}

#[rstest]
fn opening_waits_for_load_then_dom(driver: DataTablesDriver) -> Result<()> {
    let mut page = ZeroConfigPage::new(driver, "datatables.net");
    page.open()?;
    assert_eq!(
        page.into_driver().events(),
        [
            Event::Navigate(DEMO_URL.to_owned()),
            Event::Load(LoadState::Load),
            Event::Load(LoadState::DomContentLoaded),
        ]
    );
    Ok(())
}

#[rstest]
#[case(SortOrder::Ascending, 1)]
#[case(SortOrder::Descending, 2)]
fn sorting_clicks_header_until_order_matches(
    driver: DataTablesDriver,
    #[case] order: SortOrder,
    #[case] clicks: usize,
) -> Result<()> {
    let mut page = ZeroConfigPage::new(driver, "datatables.net");
    page.open()?;
    page.sort_by_column("Age", order)?;
    let driver = page.into_driver();
    assert_eq!(driver.clicks().len(), clicks);
    assert_eq!(driver.sort(), Some((Column::Age, order)));
    Ok(())
}

#[rstest]
fn first_page_needs_no_paging_click(driver: DataTablesDriver) -> Result<()> {
    let mut page = ZeroConfigPage::new(driver, "datatables.net");
    page.open()?;
    page.click_paging_button(1)?;
    page.click_paging_button(0)?;
    assert!(page.common().driver().clicks().is_empty());

    page.click_paging_button(3)?;
    let driver = page.into_driver();
    assert_eq!(driver.page(), 3);
    let delayed = ClickOptions::with_delay(std::time::Duration::from_millis(200));
    assert!(driver.events().contains(&Event::Click(
        "//button[@class='dt-paging-button'][3]".to_owned(),
        delayed,
    )));
    Ok(())
}

#[rstest]
fn paging_past_the_last_page_fails(driver: DataTablesDriver) -> Result<()> {
    let mut page = ZeroConfigPage::new(driver, "datatables.net");
    page.open()?;
    let err = page.click_paging_button(7).expect_err("only six pages exist");
    assert!(matches!(err, PageError::Driver(_)), "unexpected error: {err}");
    Ok(())
}

#[rstest]
fn common_helpers_read_the_current_page(driver: DataTablesDriver) -> Result<()> {
    let mut page = ZeroConfigPage::new(driver, "datatables.net");
    page.open()?;
    let common = page.common_mut();

    assert_eq!(common.count_rows(1)?, 10);
    assert_eq!(common.data_by_column_label("Name", 1)?, "Tiger Nixon");
    assert_eq!(common.data_by_column_label("Salary", 1)?, "$320,800");
    assert_eq!(common.data_table_cell(1, 2, 3)?, "Tokyo");
    assert_eq!(common.all_text_contents("//table/tbody//tr//td[4]")?.len(), 10);
    assert!(common.is_text_visible("Garrett", 1, suite_pages::DEFAULT_VISIBLE_TIMEOUT)?);
    assert!(!common.is_text_visible("Nobody", 1, suite_pages::DEFAULT_VISIBLE_TIMEOUT)?);

    common.click_with_label("button", "2", 1)?;
    assert_eq!(common.data_by_column_label("Name", 1)?, "Jena Gaines");
    Ok(())
}

#[rstest]
fn visibility_checks_idle_first(driver: DataTablesDriver) -> Result<()> {
    let mut page = ZeroConfigPage::new(driver, "datatables.net");
    page.open()?;
    let delay = std::time::Duration::from_millis(1000);
    let header = "//th[contains(@aria-label, 'Office')]";
    assert!(page.common_mut().is_visible_after(header, delay)?);
    assert!(page.common().driver().events().contains(&Event::Pause(delay)));
    Ok(())
}

#[rstest]
fn router_navigation_pushes_a_normalised_path(driver: DataTablesDriver) -> Result<()> {
    let mut page = ZeroConfigPage::new(driver, "datatables.net");
    page.common_mut().goto_with_router("orders//42")?;
    page.common_mut().goto_with_router("/orders/42")?;
    let driver = page.into_driver();
    let pushed: Vec<&str> = driver
        .events()
        .iter()
        .filter_map(|event| match event {
            Event::Evaluate(_, arg) => arg.as_str(),
            _ => None,
        })
        .collect();
    // A leading slash has no character before it, so `//` at the start stays.
    assert_eq!(pushed, ["/orders/42", "//orders/42"]);
    Ok(())
}

#[rstest]
fn a_title_without_marker_never_reaches_the_browser(driver: DataTablesDriver) {
    let err = open_case(driver, "Test case without marker").expect_err("no @TC_ marker");
    assert!(err.to_string().contains("@TC_"), "unexpected error: {err}");
}

#[rstest]
fn dev_overlay_swaps_the_domain(mut driver: DataTablesDriver) -> Result<()> {
    let dev = Environment::new("dev");
    let conf = TestConfig::for_test(&this_file(), "Test case 1 @TC_01", dev.as_ref())?;
    let mut page = ZeroConfigPage::for_suite(&mut driver, conf.suite_conf())?;
    page.open()?;
    assert_eq!(
        driver.events().first(),
        Some(&Event::Navigate(
            "https://dev.datatables.net/examples/basic_init/zero_configuration.html".to_owned()
        ))
    );
    Ok(())
}

#[rstest]
fn driver_rejects_plain_http() -> Result<()> {
    let mut driver = DataTablesDriver::demo()?;
    assert!(driver.navigate("http://datatables.net").is_err());
    Ok(())
}
