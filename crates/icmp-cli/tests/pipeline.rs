//! End-to-end runs of the generator pipeline against fixture registries.

use std::fs;
use std::path::{Path, PathBuf};

use icmp_cli::pipeline::{InputSource, OutputTarget, RunOptions, run};
use icmp_ingest::{RegistrySource, sha256_hex};
use icmp_model::Variant;
use icmp_render::{OutputFormat, RenderOptions};

const ICMP_FIXTURE: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<registry xmlns="http://www.iana.org/assignments" id="icmp-parameters">
  <title>Internet Control Message Protocol (ICMP) Parameters</title>
  <updated>2023-12-21</updated>
  <registry id="icmp-parameters-types">
    <title>ICMP Type Numbers</title>
    <record><value>0</value><description>Echo Reply</description></record>
    <record><value>1-2</value><description>Unassigned</description></record>
    <record><value>3</value><description>Destination Unreachable</description></record>
    <record><value>4</value><description>Source Quench (Deprecated)</description></record>
    <record><value>5</value><description>Redirect</description></record>
  </registry>
  <registry id="icmp-parameters-codes">
    <title>Code Fields</title>
    <registry id="icmp-parameters-codes-0">
      <title>Type 0 — Echo Reply</title>
      <record><value>0</value><description>No Code</description></record>
    </registry>
    <registry id="icmp-parameters-codes-3">
      <title>Type 3 — Destination Unreachable</title>
      <record><value>0</value><description>Net Unreachable</description></record>
      <record><value>1</value><description>Host Unreachable</description></record>
    </registry>
    <registry id="icmp-parameters-codes-9">
      <title>Type 9 — Router Advertisement</title>
      <record><value>0</value><description>Normal router advertisement</description></record>
    </registry>
  </registry>
</registry>
"#;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "icmp-specgen-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir
}

fn write_fixture(dir: &Path) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join("icmp-parameters.xml");
    fs::write(&path, ICMP_FIXTURE).unwrap();
    path
}

#[test]
fn writes_haskell_module() {
    let dir = unique_temp_dir("haskell");
    let input = write_fixture(&dir);
    let output = dir.join("src/Network/Types/ICMP.hs");

    let options = RunOptions::new(Variant::V4)
        .with_input(InputSource::File(input.clone()))
        .with_output(OutputTarget::File(output.clone()));
    let outcome = run(&options).expect("run");

    assert!(outcome.written);
    assert!(!outcome.wrote_to_stdout());
    assert_eq!(outcome.source, RegistrySource::File(input));
    assert_eq!(
        outcome.compiled.source_sha256.as_deref(),
        Some(sha256_hex(ICMP_FIXTURE.as_bytes()).as_str())
    );

    let module = fs::read_to_string(&output).unwrap();
    assert_eq!(module.len(), outcome.rendered_bytes);
    assert!(module.contains("module Network.Types.ICMP\n"));
    assert!(module.contains("typeNumber ICMPType5Redirect = 5"));
    assert!(module.contains("isDeprecated ICMPType4SourceQuenchDeprecated = True"));
    assert!(module.contains(
        "typeCodes ICMPType3DestinationUnreachable = [(0, \"Net Unreachable\"), (1, \"Host Unreachable\")]"
    ));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn summary_counts_are_stable() {
    let dir = unique_temp_dir("stats");
    let input = write_fixture(&dir);

    let options = RunOptions::new(Variant::V4)
        .with_input(InputSource::File(input))
        .with_dry_run(true);
    let outcome = run(&options).expect("run");

    insta::assert_json_snapshot!(outcome.compiled.stats(), @r#"
    {
      "types": 6,
      "codes": 3,
      "unassigned_types": 2,
      "deprecated_types": 1,
      "unassigned_codes": 0,
      "diagnostics": 1
    }
    "#);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn dry_run_writes_nothing() {
    let dir = unique_temp_dir("dry-run");
    let input = write_fixture(&dir);
    let output = dir.join("out/ICMP.hs");

    let options = RunOptions::new(Variant::V4)
        .with_input(InputSource::File(input))
        .with_output(OutputTarget::File(output.clone()))
        .with_dry_run(true);
    let outcome = run(&options).expect("run");

    assert!(!outcome.written);
    assert!(outcome.rendered_bytes > 0);
    assert!(!output.exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_owning_type_is_reported_not_fatal() {
    let dir = unique_temp_dir("diagnostics");
    let input = write_fixture(&dir);

    let options = RunOptions::new(Variant::V4)
        .with_input(InputSource::File(input))
        .with_dry_run(true);
    let outcome = run(&options).expect("run");

    assert!(outcome.compiled.has_diagnostics());
    assert_eq!(
        outcome.compiled.diagnostics[0].to_string(),
        "type 9 not found (code 0 in \"Type 9 — Router Advertisement\")"
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn json_output_lists_sorted_types() {
    let dir = unique_temp_dir("json");
    let input = write_fixture(&dir);
    let output = dir.join("icmp.json");

    let options = RunOptions::new(Variant::V4)
        .with_input(InputSource::File(input))
        .with_output(OutputTarget::File(output.clone()))
        .with_render(RenderOptions::default().with_format(OutputFormat::Json));
    run(&options).expect("run");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["variant"], "v4");
    assert_eq!(value["updated"], "2023-12-21");
    let names: Vec<&str> = value["table"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["symbolic_name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "ICMPType0EchoReply",
            "ICMPType1Unassigned",
            "ICMPType2Unassigned",
            "ICMPType3DestinationUnreachable",
            "ICMPType4SourceQuenchDeprecated",
            "ICMPType5Redirect",
        ]
    );
    assert_eq!(value["diagnostics"][0]["kind"], "type_not_found");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn exclusive_type_ranges_drop_span_end() {
    let dir = unique_temp_dir("exclusive");
    let input = write_fixture(&dir);

    let options = RunOptions::new(Variant::V4)
        .with_input(InputSource::File(input))
        .with_exclusive_type_ranges(true)
        .with_dry_run(true);
    let outcome = run(&options).expect("run");

    assert!(outcome.compiled.table.contains(1));
    assert!(!outcome.compiled.table.contains(2));
    assert_eq!(outcome.compiled.table.len(), 5);
}

#[test]
fn wrong_title_delimiter_fails_with_context() {
    let dir = unique_temp_dir("delimiter");
    let input = write_fixture(&dir);

    let options = RunOptions::new(Variant::V4)
        .with_input(InputSource::File(input))
        .with_title_delimiter(Some("-".to_string()))
        .with_dry_run(true);
    let error = run(&options).expect_err("hyphen does not match the em dash titles");
    let message = format!("{error:#}");
    assert!(message.starts_with("compile registry from "));
    assert!(message.ends_with(
        "registry icmp-parameters-codes: bad code sub-registry title: \
         title \"Type 0 — Echo Reply\" has no \"-\" delimiter after the type number"
    ));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_input_names_the_path() {
    let path = unique_temp_dir("absent").join("icmp-parameters.xml");
    let options = RunOptions::new(Variant::V4)
        .with_input(InputSource::File(path.clone()))
        .with_dry_run(true);
    let error = run(&options).expect_err("missing input");
    let cause = fs::read(&path).unwrap_err();
    assert_eq!(
        format!("{error:#}"),
        format!(
            "load registry {path}: failed to read registry {path}: {cause}",
            path = path.display()
        )
    );
}

#[test]
fn out_of_range_value_reports_each_cause_once() {
    let dir = unique_temp_dir("bad-value");
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("icmp-parameters.xml");
    fs::write(
        &input,
        r#"<registry id="icmp-parameters">
  <registry id="icmp-parameters-types">
    <record><value>0-300</value><description>Unassigned</description></record>
  </registry>
</registry>"#,
    )
    .unwrap();

    let options = RunOptions::new(Variant::V4)
        .with_input(InputSource::File(input.clone()))
        .with_dry_run(true);
    let error = run(&options).expect_err("300 is not an 8-bit value");
    assert_eq!(
        format!("{error:#}"),
        format!(
            "compile registry from {}: registry icmp-parameters-types: \
             record value \"0-300\": value field \"0-300\": 300 does not fit in 0-255",
            input.display()
        )
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn default_output_paths_follow_variant_and_format() {
    assert_eq!(
        OutputTarget::default_for(Variant::V4, OutputFormat::Haskell),
        OutputTarget::File(PathBuf::from("src/Network/Types/ICMP.hs"))
    );
    assert_eq!(
        OutputTarget::default_for(Variant::V6, OutputFormat::Haskell),
        OutputTarget::File(PathBuf::from("src/Network/Types/ICMPv6.hs"))
    );
    assert_eq!(
        OutputTarget::default_for(Variant::V6, OutputFormat::Json),
        OutputTarget::Stdout
    );
    assert_eq!(OutputTarget::from_path(Path::new("-")), OutputTarget::Stdout);
    assert_eq!(RunOptions::new(Variant::V6).input, InputSource::Stdin);
}

#[test]
fn v6_profile_selected_by_variant() {
    let options = RunOptions::new(Variant::V6).with_exclusive_type_ranges(true);
    let profile = options.schema_profile();
    assert_eq!(profile.variant, Variant::V6);
    assert_eq!(profile.title_delimiter, "-");
    assert_eq!(profile.type_range_policy, icmp_model::RangePolicy::ExclusiveEnd);
}
