// Performance benchmarks for the relay's per-datagram path
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::net::SocketAddr;
use mango::config::structs::filter_config::FilterConfig;
use mango::filter::structs::tag_filter::TagFilter;
use mango::packet::structs::metric_event::MetricEvent;
use mango::proxy::structs::datagram::Datagram;
use mango::proxy::structs::udp_proxy::UdpProxy;

fn datagram_with_tags(tag_count: usize) -> Vec<u8> {
    let tags: Vec<String> = (0..tag_count)
        .map(|i| if i % 3 == 0 { format!("secret_{i}:x") } else { format!("key_{i}:value_{i}") })
        .collect();
    format!("service.request.latency:125.5|ms|@0.25|#{}", tags.join(",")).into_bytes()
}

fn secret_filter() -> TagFilter {
    TagFilter::from_config(&FilterConfig {
        tag_filter_pattern: String::from("^secret"),
        ..FilterConfig::default()
    }).unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for tag_count in [0, 4, 16] {
        let buf = datagram_with_tags(tag_count);
        group.bench_with_input(BenchmarkId::from_parameter(tag_count), &buf, |b, buf| {
            b.iter(|| black_box(MetricEvent::decode(black_box(buf)).unwrap()));
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let buf = datagram_with_tags(8);
    let event = MetricEvent::decode(&buf).unwrap();
    let mut out = Vec::with_capacity(256);

    c.bench_function("encode_into", |b| {
        b.iter(|| {
            out.clear();
            event.encode_into(&mut out);
            black_box(&out);
        });
    });
}

fn bench_process_datagram(c: &mut Criterion) {
    let filter = secret_filter();
    let datagram = Datagram {
        data: datagram_with_tags(8),
        source: SocketAddr::from(([127, 0, 0, 1], 9000)),
    };
    let mut out = Vec::with_capacity(256);

    c.bench_function("process_datagram", |b| {
        b.iter(|| black_box(UdpProxy::process_datagram(&filter, &datagram, &mut out).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_decode,
    bench_encode,
    bench_process_datagram
);
criterion_main!(benches);
