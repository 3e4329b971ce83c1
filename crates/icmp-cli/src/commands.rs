use icmp_cli::pipeline::{InputSource, OutputTarget, RunOptions};
use icmp_model::Variant;
use icmp_render::{OutputFormat, RenderOptions};

use crate::cli::{Cli, OutputFormatArg};

/// Map parsed flags onto run options.
pub fn run_options_from_cli(cli: &Cli) -> RunOptions {
    let variant = if cli.use_v6 { Variant::V6 } else { Variant::V4 };
    let format = match cli.format {
        OutputFormatArg::Haskell => OutputFormat::Haskell,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    let input = match &cli.input {
        Some(path) => InputSource::File(path.clone()),
        None => InputSource::Stdin,
    };
    let output = match &cli.output {
        Some(path) => OutputTarget::from_path(path),
        None => OutputTarget::default_for(variant, format),
    };
    RunOptions::new(variant)
        .with_input(input)
        .with_output(output)
        .with_render(
            RenderOptions::default()
                .with_format(format)
                .with_template(cli.template.clone()),
        )
        .with_exclusive_type_ranges(cli.exclusive_type_ranges)
        .with_title_delimiter(cli.title_delimiter.clone())
        .with_dry_run(cli.dry_run)
}
