use std::{time::Instant, fs};

use clap::Parser;
use huffman_rust::bitstreams::{BinaryReader, BinaryWriterBuilder};
use huffman_rust::huffman::decoder::decompress;

#[derive(Parser, Debug)]
#[command(about = "Decompress a file produced by compress_huff")]
struct Args {
    /// The compressed source filename
    source_name: String,
    /// The destination filename
    dest_name: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data = fs::read(&args.source_name)
        .unwrap_or_else(|_| panic!("Could not read {}", args.source_name));

    let mut reader = BinaryReader::new(data.into_boxed_slice());
    let mut writer = BinaryWriterBuilder::new();

    let decomp_time = Instant::now();
    decompress(&mut reader, &mut writer)
        .unwrap_or_else(|e| panic!("Failed decompressing {}: {}", args.source_name, e));
    let decomp_time = decomp_time.elapsed().as_nanos() as f64;

    let decoded = writer.build();
    fs::write(&args.dest_name, &decoded.os).expect("Failed storing the decompressed file");

    println!(
        "decompressed the file in {}ns ({} bytes)",
        decomp_time,
        decoded.os.len()
    );
}
