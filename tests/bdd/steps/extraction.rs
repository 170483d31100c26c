//! Step definitions for attribute extraction scenarios.

use crate::bdd::fixtures::{TestWorld, strip_quotes};
use anyhow::{Context, Result, ensure};
use rstest_bdd_macros::{given, then, when};
use step_attributes::{AttributeExtractor, Notation};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Render Gherkin table rows back into the pipe-delimited step text a
/// scenario would carry.
fn render_table(rows: &[Vec<String>]) -> String {
    let lines: Vec<String> = rows
        .iter()
        .map(|cells| format!("  | {} |", cells.join(" | ")))
        .collect();
    format!(" with these attributes:\n{}\n", lines.join("\n"))
}

fn extract_into(world: &TestWorld) -> Result<()> {
    let raw = world.step_text.get().context("step text has not been set")?;
    let extractor = AttributeExtractor::default();
    world.notation.clear();
    if let Some(notation) = Notation::detect(extractor.normalize(&raw)) {
        world.notation.set(notation.to_string());
    }
    match extractor.extract(&raw) {
        Ok(attributes) => {
            world.attributes.set(attributes);
            world.extraction_error.clear();
        }
        Err(err) => {
            world.attributes.clear();
            world.extraction_error.set(err.to_string());
        }
    }
    Ok(())
}

fn verify_attribute(world: &TestWorld, name: &str, expected: &str) -> Result<()> {
    let attributes = world
        .attributes
        .get()
        .context("attributes have not been extracted")?;
    let actual = attributes
        .get(name)
        .with_context(|| format!("attribute {name} missing from {attributes:?}"))?;
    ensure!(
        actual == expected,
        "expected attribute {name} to be {expected:?}, got {actual:?}"
    );
    Ok(())
}

fn verify_count(world: &TestWorld, expected: usize) -> Result<()> {
    let attributes = world
        .attributes
        .get()
        .context("attributes have not been extracted")?;
    ensure!(
        attributes.len() == expected,
        "expected {expected} attributes, got {attributes:?}"
    );
    Ok(())
}

fn verify_failure(world: &TestWorld, fragment: &str) -> Result<()> {
    let message = world
        .extraction_error
        .get()
        .context("expected extraction to fail, but it succeeded")?;
    ensure!(
        message.contains(fragment),
        "expected error mentioning {fragment:?}, got {message:?}"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("the step text:")]
fn step_text(world: &TestWorld, docstring: String) -> Result<()> {
    world.step_text.set(docstring);
    Ok(())
}

#[given("the step text holds the table:")]
fn step_text_table(world: &TestWorld, #[datatable] datatable: Vec<Vec<String>>) -> Result<()> {
    world.step_text.set(render_table(&datatable));
    Ok(())
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the attributes are extracted")]
fn attributes_are_extracted(world: &TestWorld) -> Result<()> {
    extract_into(world)
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the attribute {name:string} is {value:string}")]
fn attribute_is(world: &TestWorld, name: String, value: String) -> Result<()> {
    verify_attribute(world, strip_quotes(&name), strip_quotes(&value))
}

#[then("there are {count:usize} attributes")]
fn attribute_count(world: &TestWorld, count: usize) -> Result<()> {
    verify_count(world, count)
}

#[then("the notation is {notation:string}")]
fn notation_is(world: &TestWorld, notation: String) -> Result<()> {
    let expected = strip_quotes(&notation);
    let actual = world.notation.get().context("no notation was detected")?;
    ensure!(
        actual == expected,
        "expected notation {expected:?}, got {actual:?}"
    );
    Ok(())
}

#[then("no notation is detected")]
fn no_notation(world: &TestWorld) -> Result<()> {
    ensure!(
        !world.notation.is_filled(),
        "expected no notation, got {:?}",
        world.notation.get()
    );
    Ok(())
}

#[then("extraction fails mentioning {fragment:string}")]
fn extraction_fails(world: &TestWorld, fragment: String) -> Result<()> {
    verify_failure(world, strip_quotes(&fragment))
}
