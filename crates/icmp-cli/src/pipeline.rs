//! Load, compile, render, write.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use icmp_core::{SchemaProfile, compile_registry};
use icmp_ingest::{LoadedRegistry, RegistrySource, load_registry, load_registry_from_reader};
use icmp_model::{CompiledRegistry, RangePolicy, Variant};
use icmp_render::{OutputFormat, RenderOptions, render, write_output};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` means stdout.
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Where output goes when no path is given.
    ///
    /// Haskell output lands in the module path for the variant; JSON goes
    /// to stdout.
    pub fn default_for(variant: Variant, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Haskell => Self::File(
                PathBuf::from("src/Network/Types").join(format!("{}.hs", variant.protocol_name())),
            ),
            OutputFormat::Json => Self::Stdout,
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub variant: Variant,
    pub input: InputSource,
    pub output: OutputTarget,
    pub render: RenderOptions,
    /// Expand type spans without their upper bound.
    pub exclusive_type_ranges: bool,
    pub title_delimiter: Option<String>,
    /// Compile and render but write nothing.
    pub dry_run: bool,
}

impl RunOptions {
    /// Options for `variant` with the default output location.
    pub fn new(variant: Variant) -> Self {
        let render = RenderOptions::default();
        Self {
            variant,
            input: InputSource::Stdin,
            output: OutputTarget::default_for(variant, render.format),
            render,
            exclusive_type_ranges: false,
            title_delimiter: None,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_input(mut self, input: InputSource) -> Self {
        self.input = input;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    #[must_use]
    pub fn with_exclusive_type_ranges(mut self, enable: bool) -> Self {
        self.exclusive_type_ranges = enable;
        self
    }

    #[must_use]
    pub fn with_title_delimiter(mut self, delimiter: Option<String>) -> Self {
        self.title_delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }

    /// The schema profile for the variant with any overrides applied.
    pub fn schema_profile(&self) -> SchemaProfile {
        let mut profile = SchemaProfile::for_variant(self.variant);
        if self.exclusive_type_ranges {
            profile = profile.with_type_range_policy(RangePolicy::ExclusiveEnd);
        }
        if let Some(delimiter) = &self.title_delimiter {
            profile = profile.with_title_delimiter(delimiter.clone());
        }
        profile
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub compiled: CompiledRegistry,
    pub source: RegistrySource,
    pub output: OutputTarget,
    pub rendered_bytes: usize,
    /// False for dry runs.
    pub written: bool,
}

impl RunOutcome {
    pub fn wrote_to_stdout(&self) -> bool {
        self.written && self.output == OutputTarget::Stdout
    }
}

pub fn run(options: &RunOptions) -> Result<RunOutcome> {
    let span = info_span!("run", variant = %options.variant);
    let _guard = span.enter();
    let start = Instant::now();

    let loaded = load(&options.input)?;
    let profile = options.schema_profile();
    let compiled = compile_registry(&loaded.document, &profile)
        .with_context(|| format!("compile registry from {}", loaded.source))?
        .with_source_sha256(loaded.sha256);

    if options.render.template.is_some() && options.render.format == OutputFormat::Json {
        warn!("--template is ignored for JSON output");
    }
    let text = render(&compiled, &options.render).context("render output")?;

    let written = if options.dry_run {
        info!(output = %options.output, "dry run, output not written");
        false
    } else {
        write_target(&options.output, &text)?;
        true
    };

    info!(
        types = compiled.table.len(),
        codes = compiled.table.code_count(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunOutcome {
        compiled,
        source: loaded.source,
        output: options.output.clone(),
        rendered_bytes: text.len(),
        written,
    })
}

fn load(input: &InputSource) -> Result<LoadedRegistry> {
    match input {
        InputSource::File(path) => {
            load_registry(path).with_context(|| format!("load registry {}", path.display()))
        }
        InputSource::Stdin => {
            load_registry_from_reader(io::stdin().lock()).context("load registry from stdin")
        }
    }
}

fn write_target(output: &OutputTarget, text: &str) -> Result<()> {
    match output {
        OutputTarget::File(path) => {
            write_output(path, text).with_context(|| format!("write {}", path.display()))
        }
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("write to stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}
