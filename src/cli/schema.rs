//! `shipfee schema [name]`

use shipfee::{FeeBreakdown, RateCard, Result, Zone};

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: quote, rates, zone");
            Ok(())
        }
        "quote" => print_schema::<FeeBreakdown>(),
        "rates" => print_schema::<RateCard>(),
        "zone" => print_schema::<Zone>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
