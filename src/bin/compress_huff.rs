use std::{time::Instant, fs};

use clap::Parser;
use huffman_rust::bitstreams::{BinaryReader, BinaryWriterBuilder};
use huffman_rust::huffman::encoder::compress;

#[derive(Parser, Debug)]
#[command(about = "Compress a file with a static Huffman code")]
struct Args {
    /// The source filename
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

    let comp_time = Instant::now();
    let props = compress(&mut reader, &mut writer);
    let comp_time = comp_time.elapsed().as_nanos() as f64;

    let compressed = writer.build();
    fs::write(&args.dest_name, &compressed.os).expect("Failed storing the compressed file");

    let props_json =
        serde_json::to_string_pretty(&props).expect("Failed serializing the properties");
    fs::write(format!("{}.properties", args.dest_name), props_json)
        .expect("Failed storing the properties file");

    println!(
        "compressed the file in {}ns ({} -> {} bytes)",
        comp_time,
        props.input_bytes,
        props.output_bytes()
    );
}
