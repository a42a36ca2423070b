//! `shipfee rates`

use super::util::{parse_format_arg, positional_args, print_output};
use shipfee::{Error, RateCard, Result};

pub fn cmd_rates(args: &[String]) -> Result<()> {
    if !positional_args(args, &[])?.is_empty() {
        return Err(Error::Usage("shipfee rates [--format text|json|yaml]".into()));
    }
    let format = parse_format_arg(args)?;
    let card = RateCard::standard();
    print_output(format, &card, &card.to_report())
}
