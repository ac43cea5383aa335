use std::collections::BTreeSet;
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

use streamfaker_core::{Config, CorrelationSection, OutputFormat, ValidatedConfig};
use streamfaker_generate::{GeneratorRegistry, SampleGenerator, serialize_batch};

fn config(data: &[&str], format: &str, samples: i64, correlation: Option<(&str, i64)>) -> Config {
    let (label, amount) = correlation.unwrap_or(("", 0));
    Config {
        kafka: "localhost:9092".to_string(),
        topic: "samples".to_string(),
        interval: 100,
        samples,
        format: format.to_string(),
        correlation: CorrelationSection {
            amount,
            label: label.to_string(),
        },
        data: data.iter().map(|line| line.to_string()).collect(),
        strict: false,
        seed: Some(1),
    }
}

fn build(config: &Config, seed: u64) -> (ValidatedConfig, SampleGenerator, ChaCha8Rng) {
    let validated = config.validate().expect("valid config");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let generator =
        SampleGenerator::from_config(&validated, Arc::new(GeneratorRegistry::new()), &mut rng)
            .expect("build generator");
    (validated, generator, rng)
}

fn csv_rows(bytes: &[u8]) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(bytes);
    reader
        .records()
        .map(|record| {
            record
                .expect("csv record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[test]
fn headless_csv_with_correlation_uses_fixed_pool() {
    let config = config(&["name=firstname"], "csvheadless", 3, Some(("id", 2)));
    let (validated, generator, mut rng) = build(&config, 11);

    let pool: BTreeSet<String> = generator
        .pool()
        .expect("correlation pool")
        .ids()
        .iter()
        .cloned()
        .collect();
    assert_eq!(generator.pool().map(|pool| pool.len()), Some(2));

    let bytes = generator
        .render(validated.samples, validated.format, &mut rng)
        .expect("render batch");
    let rows = csv_rows(&bytes);

    assert_eq!(rows.len(), 3);
    for row in rows {
        assert_eq!(row.len(), 2);
        assert!(pool.contains(&row[1]), "{} not in pool", row[1]);
    }
}

#[test]
fn headed_csv_has_header_plus_one_row_per_sample() {
    let config = config(&["name=firstname", "mail=email", "age=randomint"], "csv", 5, None);
    let (validated, generator, mut rng) = build(&config, 12);

    let bytes = generator
        .render(validated.samples, validated.format, &mut rng)
        .expect("render batch");
    let rows = csv_rows(&bytes);

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], vec!["name", "mail", "age"]);
}

#[test]
fn csv_round_trips_values_in_field_order() {
    let config = config(
        &["sentence=sentence", "para=paragraph", "name=name", "when=timestamp"],
        "csv",
        4,
        Some(("group", 3)),
    );
    let (_, generator, mut rng) = build(&config, 13);

    let batch = generator.generate_batch(4, &mut rng).expect("generate batch");
    let bytes =
        serialize_batch(generator.fields(), &batch, OutputFormat::Csv).expect("serialize csv");
    let rows = csv_rows(&bytes);

    let header: Vec<String> = generator.fields().iter().map(|f| f.label.clone()).collect();
    assert_eq!(rows[0], header);
    for (row, record) in rows[1..].iter().zip(&batch) {
        let expected: Vec<String> = header
            .iter()
            .map(|label| record.get(label).unwrap_or_default().to_string())
            .collect();
        assert_eq!(row, &expected);
    }
}

#[test]
fn json_array_matches_sample_count_and_labels() {
    let config = config(&["name=firstname", "ip=ipv4", "bad"], "json", 7, Some(("id", 4)));
    let (validated, generator, mut rng) = build(&config, 14);

    let bytes = generator
        .render(validated.samples, validated.format, &mut rng)
        .expect("render batch");
    let value: Value = serde_json::from_slice(&bytes).expect("parse json");
    let objects = value.as_array().expect("json array");

    assert_eq!(objects.len(), 7);
    for object in objects {
        let object = object.as_object().expect("json object");
        let keys: BTreeSet<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, BTreeSet::from(["name", "ip", "id"]));
        assert!(object.values().all(Value::is_string));
    }
}

#[test]
fn json_escapes_string_values() {
    let config = config(&["text=paragraph"], "json", 1, None);
    let (_, generator, mut rng) = build(&config, 15);

    let mut batch = generator.generate_batch(1, &mut rng).expect("generate batch");
    batch[0].insert("text", "quote \" backslash \\ newline \n".to_string());

    let bytes =
        serialize_batch(generator.fields(), &batch, OutputFormat::Json).expect("serialize json");
    let text = String::from_utf8(bytes.clone()).expect("utf8");
    assert!(text.contains(r#"quote \" backslash \\ newline \n"#), "{text}");

    let value: Value = serde_json::from_slice(&bytes).expect("parse json");
    assert_eq!(value[0]["text"], "quote \" backslash \\ newline \n");
}

#[test]
fn skipped_line_never_reaches_output() {
    let config = config(&["badline", "name=firstname"], "csv", 2, None);
    let (validated, generator, mut rng) = build(&config, 16);

    assert!(generator.fields().iter().all(|field| field.label != "badline"));

    let bytes = generator
        .render(validated.samples, validated.format, &mut rng)
        .expect("render batch");
    let text = String::from_utf8(bytes).expect("utf8");
    assert!(!text.contains("badline"));
}

#[test]
fn correlation_values_never_leave_the_pool() {
    let config = config(&["n=randomint"], "json", 50, Some(("id", 5)));
    let (_, generator, mut rng) = build(&config, 17);
    let pool = generator.pool().expect("pool").clone();

    let mut seen = BTreeSet::new();
    for _ in 0..40 {
        let batch = generator.generate_batch(50, &mut rng).expect("generate batch");
        for record in &batch {
            let id = record.get("id").expect("correlated value");
            assert!(pool.contains(id));
            seen.insert(id.to_string());
        }
    }
    assert!(seen.len() <= pool.len());
    assert!(!seen.is_empty());
}

#[test]
fn same_seed_produces_identical_payloads() {
    let config = config(&["name=name", "mail=email", "at=timestamp"], "csv", 10, Some(("id", 3)));
    let (validated, generator_a, mut rng_a) = build(&config, 99);
    let (_, generator_b, mut rng_b) = build(&config, 99);

    let a = generator_a
        .render(validated.samples, validated.format, &mut rng_a)
        .expect("render a");
    let b = generator_b
        .render(validated.samples, validated.format, &mut rng_b)
        .expect("render b");
    assert_eq!(a, b);
}

#[test]
fn asymmetric_correlation_stops_before_generation() {
    let config = config(&["name=firstname"], "json", 1, Some(("", 5)));
    assert!(config.validate().is_err());
}
