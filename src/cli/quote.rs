//! `shipfee quote <weight> <zone> [--insured]`

use super::util::{parse_format_arg, positional_args, print_output};
use shipfee::{quote_labelled, Error, Result};

const USAGE: &str = "shipfee quote <weight> <zone> [--insured] [--format text|json|yaml]";

pub fn cmd_quote(args: &[String]) -> Result<()> {
    let positional = positional_args(args, &["--insured"])?;
    let [weight, zone] = positional.as_slice() else {
        return Err(Error::Usage(USAGE.into()));
    };

    let weight: f64 = weight
        .parse()
        .map_err(|_| format!("weight is not a number: {}", weight))?;
    let insured = args.iter().any(|a| a == "--insured");
    let format = parse_format_arg(args)?;

    let breakdown = quote_labelled(weight, zone, insured)?;

    print_output(format, &breakdown, &breakdown.to_report())
}
