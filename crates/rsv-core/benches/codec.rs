// crates/rsv-core/benches/codec.rs
//
// Read/write throughput over a small repeating data set.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rsv_core::{Reader, Writer};

const READ_DATA: &[u8] = b"x\xFFy\xFFz\xFF\xFF\xFDx\xFFy\xFF\xFF\xFF\xFDx\xFF\xFF\xFF\xFF\xFD\xFF\xFF\xFF\xFF\xFD\
x\xFFy\xFFz\xFFw\xFF\xFDx\xFFy\xFFz\xFF\xFF\xFDx\xFFy\xFF\xFF\xFF\xFDx\xFF\xFF\xFF\xFF\xFD\xFF\xFF\xFF\xFF\xFD";

const WRITE_DATA: [[&str; 4]; 3] = [
    ["abc", "def", "12356", "1234567890987654311234432141542132"],
    ["abc", "def", "12356", "1234567890987654311234432141542132"],
    ["abc", "def", "12356", "1234567890987654311234432141542132"],
];

fn bench_read(c: &mut Criterion) {
    let input = READ_DATA.repeat(1000);

    let mut group = c.benchmark_group("read");
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("records", |b| {
        b.iter(|| {
            let mut rdr = Reader::new(black_box(input.as_slice()));
            let mut fields = 0;
            while let Some(record) = rdr.read_record().unwrap() {
                fields += record.len();
            }
            fields
        })
    });

    group.bench_function("byte_records", |b| {
        b.iter(|| {
            let mut rdr = Reader::new(black_box(input.as_slice()));
            rdr.read_all_bytes().unwrap().len()
        })
    });

    group.finish();
}

fn bench_write(c: &mut Criterion) {
    c.bench_function("write_all", |b| {
        b.iter(|| {
            let mut wtr = Writer::new(Vec::new());
            wtr.write_all(black_box(&WRITE_DATA)).unwrap();
            wtr.into_inner().unwrap().len()
        })
    });
}

criterion_group!(benches, bench_read, bench_write);
criterion_main!(benches);
