use criterion::{Criterion, criterion_group, criterion_main};
use maria_wire::Opts;
use maria_wire::col::ColumnDescriptor;
use maria_wire::constant::{ColumnFlags, ColumnType};
use maria_wire::geometry::{self, Geometry, Point};
use maria_wire::protocol::{PacketReader, bitmap_len, decode_row_flat};
use std::hint::black_box;

fn row_fixture() -> (Vec<ColumnDescriptor>, Vec<String>, Vec<u8>) {
    let columns = vec![
        ColumnDescriptor::new(ColumnType::MYSQL_TYPE_LONG, ColumnFlags::empty(), 33, 0),
        ColumnDescriptor::new(ColumnType::MYSQL_TYPE_DOUBLE, ColumnFlags::empty(), 33, 0),
        ColumnDescriptor::new(
            ColumnType::MYSQL_TYPE_VAR_STRING,
            ColumnFlags::empty(),
            33,
            0,
        ),
    ];
    let names = vec!["id".to_owned(), "ratio".to_owned(), "label".to_owned()];

    let mut packet = vec![0x00];
    packet.extend_from_slice(&vec![0u8; bitmap_len(columns.len())]);
    packet.extend_from_slice(&12345i32.to_le_bytes());
    packet.extend_from_slice(&0.5f64.to_le_bytes());
    packet.push(11);
    packet.extend_from_slice(b"hello world");
    (columns, names, packet)
}

fn bench_decode_row_flat(c: &mut Criterion) {
    let (columns, names, packet) = row_fixture();
    let opts = Opts::default();
    c.bench_function("decode_row_flat", |b| {
        b.iter(|| {
            let mut reader = PacketReader::new(black_box(&packet));
            decode_row_flat(&columns, &names, &mut reader, &opts).unwrap()
        })
    });
}

fn bench_encode_geometry(c: &mut Criterion) {
    let shape = Geometry::GeometryCollection(vec![
        Geometry::Point(Point::new(1.0, 2.0)),
        Geometry::LineString((0..64).map(|i| Point::new(f64::from(i), 0.5)).collect()),
        Geometry::MultiPolygon(vec![vec![
            (0..32).map(|i| Point::new(0.0, f64::from(i))).collect(),
        ]]),
    ]);
    c.bench_function("encode_geometry_collection", |b| {
        b.iter(|| geometry::encode(black_box(&shape)).unwrap())
    });
}

fn bench_decode_geometry(c: &mut Criterion) {
    let shape = Geometry::LineString((0..256).map(|i| Point::new(f64::from(i), 1.0)).collect());
    let encoded = geometry::encode(&shape).unwrap();
    c.bench_function("decode_geometry_linestring", |b| {
        b.iter(|| geometry::decode(black_box(&encoded)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_decode_row_flat,
    bench_encode_geometry,
    bench_decode_geometry
);
criterion_main!(benches);
