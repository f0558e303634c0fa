//! Walks through the function registry: predefined aggregates, a
//! user-defined function, and the overwrite lifecycle.
//!
//! Run with: cargo run -p cumulant-core --example aggregate_demo

use anyhow::{anyhow, Result};
use cumulant_core::{FunctionDefinition, FunctionRegistry, PureFunction, Value};

fn main() -> Result<()> {
    let mut registry = FunctionRegistry::new("demo");

    // Fold the predefined average over a few samples.
    let mut avg = match registry
        .get("avg")
        .ok_or_else(|| anyhow!("avg not seeded"))?
    {
        FunctionDefinition::Fold(f) => f.clone(),
        _ => return Err(anyhow!("avg should be a fold function")),
    };

    avg.initialize();
    for x in [2.0, 4.0, 6.0, 8.0] {
        avg.apply(&[Value::Number(x)])?;
    }
    println!("{}", avg.render());
    println!("avg of 2, 4, 6, 8 = {}", avg.compute()?);

    // Pure point-to-segment distance.
    let dist = match registry
        .get("dist2lnseg")
        .ok_or_else(|| anyhow!("dist2lnseg not seeded"))?
    {
        FunctionDefinition::Pure(f) => f.clone(),
        _ => return Err(anyhow!("dist2lnseg should be a pure function")),
    };
    let d = dist.apply(&[
        Value::Vector([5.0, 3.0, 0.0]),
        Value::Vector([0.0, 0.0, 0.0]),
        Value::Vector([10.0, 0.0, 0.0]),
    ])?;
    println!("distance to segment = {}", d);

    // A user definition, and the once-only overwrite rule.
    let double = PureFunction::new("double", &["x"], "2 * x")?;
    registry.put("double", double.into())?;
    match registry.put(
        "double",
        PureFunction::new("double", &["x"], "x + x")?.into(),
    ) {
        Err(err) => println!("second put rejected: {}", err),
        Ok(()) => unreachable!("overwrite of a user definition must fail"),
    }

    Ok(())
}
