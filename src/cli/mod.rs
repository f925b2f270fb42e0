mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{print_decoded_json, print_decoded_plain, print_json, print_plain};
