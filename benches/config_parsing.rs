//! Benchmark for config parsing performance

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logpilot::config::ConsoleConfig;
use std::path::Path;

fn bench_config_load_from_file(c: &mut Criterion) {
    let config_path = Path::new("logpilot.example.toml");

    c.bench_function("config_parse_from_file", |b| {
        b.iter(|| {
            let config = ConsoleConfig::load(Some(black_box(config_path)));
            black_box(config)
        });
    });
}

fn bench_config_load_defaults(c: &mut Criterion) {
    c.bench_function("config_parse_defaults_only", |b| {
        b.iter(|| {
            let config = ConsoleConfig::load(None);
            black_box(config)
        });
    });
}

fn bench_config_toml_parsing(c: &mut Criterion) {
    let toml_content = r#"
[api]
base_url = "https://pilot.internal:8443/v1"
timeout_seconds = 60
health_timeout_seconds = 2

[polling]
health_interval_seconds = 10
alerts_interval_seconds = 15

[logging]
level = "info"
format = "json"

[logging.component_levels]
health = "debug"
alerts = "trace"
chat = "info"
"#;

    c.bench_function("config_parse_complex_toml", |b| {
        b.iter(|| {
            let config: ConsoleConfig = toml::from_str(black_box(toml_content)).unwrap();
            black_box(config.validate().is_ok())
        });
    });
}

criterion_group!(
    benches,
    bench_config_load_from_file,
    bench_config_load_defaults,
    bench_config_toml_parsing
);
criterion_main!(benches);
