//! Steps that build fragments, resolve them and inspect the result.

use anyhow::{Context, Result, anyhow, ensure};
use camino::Utf8Path;
use serde_json::{Value, json};
use rstest_bdd_macros::{given, then, when};
use suite_config::{ConfError, Config, ConfigSource, ConfigView, Environment, TestConfig};
use test_helpers::config_dir::ConfigDirFixture;

use crate::fixtures::OverlayContext;

fn fragment(overlay_context: &OverlayContext) -> Result<Value> {
    overlay_context
        .fragment
        .get()
        .ok_or_else(|| anyhow!("no suite fragment has been written"))
}

fn pointer_mut<'a>(value: &'a mut Value, pointer: &str) -> Result<&'a mut Value> {
    value
        .pointer_mut(pointer)
        .ok_or_else(|| anyhow!("fragment has no entry at {pointer}"))
}

fn page_number(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .with_context(|| format!("invalid page number {raw}"))
}

fn resolved(overlay_context: &OverlayContext) -> Result<Config> {
    overlay_context
        .outcome
        .get()
        .ok_or_else(|| anyhow!("nothing has been resolved"))?
        .map_err(|err| anyhow!(err))
}

fn resolve_with<F>(overlay_context: &OverlayContext, resolve: F) -> Result<()>
where
    F: FnOnce(&Utf8Path) -> suite_config::ConfResult<Config>,
{
    let dir = ConfigDirFixture::new()?;
    dir.write_json("suite.json", &fragment(overlay_context)?)?;
    overlay_context.outcome.set(resolve(dir.path()));
    Ok(())
}

#[given("a suite fragment with domain {domain} and TC_01 page number {pages}")]
fn suite_fragment(overlay_context: &OverlayContext, domain: String, pages: String) -> Result<()> {
    overlay_context.fragment.set(json!({
        "domain": domain,
        "cases": {"TC_01": {"page_number": page_number(&pages)?}},
        "env": {},
    }));
    Ok(())
}

#[given("a dev overlay with domain {domain} and TC_01 page number {pages}")]
fn dev_overlay(overlay_context: &OverlayContext, domain: String, pages: String) -> Result<()> {
    let mut value = fragment(overlay_context)?;
    *pointer_mut(&mut value, "/env")? = json!({
        "dev": {"domain": domain, "cases": {"TC_01": {"page_number": page_number(&pages)?}}},
    });
    overlay_context.fragment.set(value);
    Ok(())
}

#[given("the dev overlay merges case data")]
fn merge_case_data(overlay_context: &OverlayContext) -> Result<()> {
    let mut value = fragment(overlay_context)?;
    let dev = pointer_mut(&mut value, "/env/dev")?
        .as_object_mut()
        .context("dev overlay must be an object")?;
    dev.insert("is_merge_case_data".to_owned(), Value::Bool(true));
    overlay_context.fragment.set(value);
    Ok(())
}

#[when("{case} is resolved for environment {env}")]
fn resolve_case(overlay_context: &OverlayContext, case: String, env: String) -> Result<()> {
    let environment = Environment::new(env);
    resolve_with(overlay_context, |dir| {
        Config::resolve(&ConfigSource::new(dir), &case, environment.as_ref())
    })
}

#[when("the test titled {title} is resolved")]
fn resolve_title(overlay_context: &OverlayContext, title: String) -> Result<()> {
    resolve_with(overlay_context, |dir| {
        TestConfig::for_test(&dir.join("suite.rs"), &title, None).map(|conf| conf.conf().clone())
    })
}

#[then("the suite domain is {expected}")]
fn suite_domain(overlay_context: &OverlayContext, expected: String) -> Result<()> {
    let config = resolved(overlay_context)?;
    let actual = config.suite().get_str("domain");
    ensure!(actual == Some(expected.as_str()), "domain was {actual:?}");
    Ok(())
}

#[then("the case page number is {expected}")]
fn case_pages(overlay_context: &OverlayContext, expected: String) -> Result<()> {
    let config = resolved(overlay_context)?;
    let actual: u64 = config.case().get_as("page_number").map_err(|err| anyhow!(err))?;
    ensure!(actual == page_number(&expected)?, "case page number was {actual}");
    Ok(())
}

#[then("the suite case TC_01 page number is {expected}")]
fn suite_case_pages(overlay_context: &OverlayContext, expected: String) -> Result<()> {
    let config = resolved(overlay_context)?;
    let actual = config
        .suite()
        .cases()
        .and_then(|cases| cases.pointer("/TC_01/page_number"))
        .and_then(Value::as_u64);
    ensure!(
        actual == Some(page_number(&expected)?),
        "suite case page number was {actual:?}"
    );
    Ok(())
}

#[then("the resolved suite has no env block")]
fn no_env_block(overlay_context: &OverlayContext) -> Result<()> {
    let config = resolved(overlay_context)?;
    ensure!(config.suite().get("env").is_none(), "env block leaked");
    Ok(())
}

#[then("resolution fails with an invalid test identity")]
fn identity_failure(overlay_context: &OverlayContext) -> Result<()> {
    let outcome = overlay_context
        .outcome
        .get()
        .ok_or_else(|| anyhow!("nothing has been resolved"))?;
    match outcome {
        Err(err) if matches!(&*err, ConfError::InvalidTestIdentity { .. }) => Ok(()),
        Err(err) => Err(anyhow!("unexpected error: {err}")),
        Ok(_) => Err(anyhow!("resolution should have failed")),
    }
}
