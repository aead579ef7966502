//! Address command implementation for the Waymark CLI.

use std::io::Write;

use clap::Parser;
use waymark_core::AddressComponents;

use crate::CliError;

/// CLI arguments for the `address` subcommand.
#[derive(Debug, Clone, Parser, Default)]
#[command(
    long_about = "Join optional address components into one line. Omitted \
                 components are skipped, with separators chosen by which \
                 components remain.",
    about = "Format an address"
)]
pub(crate) struct AddressArgs {
    /// House or building number, e.g. "4".
    #[arg(long, value_name = "number")]
    pub(crate) street_number: Option<String>,
    /// Street name, e.g. "Melrose Place".
    #[arg(long, value_name = "name")]
    pub(crate) street_name: Option<String>,
    /// City or locality.
    #[arg(long, value_name = "city")]
    pub(crate) city: Option<String>,
    /// County or sub-administrative area.
    #[arg(long, value_name = "area")]
    pub(crate) sub_region: Option<String>,
    /// State or province, e.g. "CA".
    #[arg(long, value_name = "region")]
    pub(crate) region: Option<String>,
}

impl From<&AddressArgs> for AddressComponents {
    fn from(args: &AddressArgs) -> Self {
        Self {
            street_number: args.street_number.clone(),
            street_name: args.street_name.clone(),
            city: args.city.clone(),
            sub_region: args.sub_region.clone(),
            region: args.region.clone(),
        }
    }
}

pub(crate) fn run_address(args: &AddressArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let line = AddressComponents::from(args).format();
    writeln!(writer, "{line}").map_err(CliError::WriteOutput)
}
