//! Benchmarks for reading resource documents.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use storyres::parser::events::{EventSource, XmlEvent, XmlEventReader};
use storyres::{parse_str, MemoryPath, ResourceReader, TypeRegistry};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

// -- Document benchmarks --

fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("documents");

    let small = r#"<resource id="a"><story><title>T</title><start>s</start></story></resource>"#;

    group.bench_function("story_small", |b| {
        b.iter(|| parse_str("small.xml", black_box(small)).unwrap())
    });

    for name in ["choice_scene.xml", "end_scene.xml", "story.xml", "achievement.xml"] {
        let source = load_fixture(name);
        group.bench_function(name, |b| {
            b.iter(|| parse_str(name, black_box(&source)).unwrap())
        });
    }

    group.finish();
}

// -- Scaling benchmarks --

fn bench_large_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    let mut source = String::from(r#"<resource id="hub"><scene type="choice"><text>Pick one.</text><choices>"#);
    for i in 0..1000 {
        source.push_str(&format!(r#"<choice next="scene-{i}">Option {i}</choice>"#));
    }
    source.push_str("</choices></scene></resource>");

    group.bench_function("choice_scene_1000_choices", |b| {
        b.iter(|| parse_str("hub.xml", black_box(&source)).unwrap())
    });

    group.bench_function("tokenize_only_1000_choices", |b| {
        b.iter(|| {
            let mut events = XmlEventReader::new(black_box(source.as_bytes()));
            let mut count = 0usize;
            while events.next_event().unwrap() != XmlEvent::Eof {
                count += 1;
            }
            count
        })
    });

    let registry = TypeRegistry::with_standard_types();
    let reader = ResourceReader::new(&registry);
    let path = MemoryPath::new("hub.xml", source.clone());
    group.bench_function("fresh_registry_1000_choices", |b| {
        b.iter(|| reader.read(black_box(&path)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_documents, bench_large_scene);
criterion_main!(benches);
