use super::{BinaryReader, BinaryWriterBuilder};

#[test]
fn test_msb_first_byte_layout() {
    let mut writer = BinaryWriterBuilder::new();
    writer.push_bits(0b101, 3);
    writer.push_bits(0b11, 2);

    let written = writer.build();
    assert_eq!(written.os.as_ref(), &[0b10111000]);
}

#[test]
fn test_full_bytes_are_flushed_unpadded() {
    let mut writer = BinaryWriterBuilder::new();
    writer.push_bits(0xAB, 8);
    writer.push_bits(0xCD, 8);

    let written = writer.build();
    assert_eq!(written.os.as_ref(), &[0xAB, 0xCD]);
}

#[test]
fn test_write_across_byte_boundary() {
    let mut writer = BinaryWriterBuilder::new();
    writer.push_bits(0b11111, 5);
    writer.push_bits(0b000001111, 9);
    assert_eq!(writer.written_bits, 14);

    let written = writer.build();
    assert_eq!(written.os.as_ref(), &[0b11111000, 0b00111100]);
}

#[test]
fn test_wide_value_round_trip() {
    let mut writer = BinaryWriterBuilder::new();
    writer.push_bits(0xface8201, 32);
    writer.push_bits(0x1ff, 9);

    let mut reader = BinaryReader::new(writer.build().os);
    assert_eq!(reader.read_int(32), Some(0xface8201));
    assert_eq!(reader.read_int(9), Some(0x1ff));
}

#[test]
fn test_read_int_msb_first() {
    let mut reader = BinaryReader::new(vec![0b10111000].into_boxed_slice());
    assert_eq!(reader.read_int(1), Some(1));
    assert_eq!(reader.read_int(2), Some(0b01));
    assert_eq!(reader.read_int(5), Some(0b11000));
}

#[test]
fn test_exhaustion_returns_none() {
    let mut reader = BinaryReader::new(vec![0xFF].into_boxed_slice());
    assert_eq!(reader.read_int(6), Some(0b111111));
    assert_eq!(reader.read_int(4), None);
    // the two remaining bits are still readable after a failed wider read
    assert_eq!(reader.read_int(2), Some(0b11));
    assert_eq!(reader.read_int(1), None);
}

#[test]
fn test_empty_stream_is_exhausted() {
    let mut reader = BinaryReader::new(Vec::new().into_boxed_slice());
    assert_eq!(reader.read_int(1), None);
    assert_eq!(reader.read_int(0), Some(0));
}

#[test]
fn test_reset_rewinds_to_start() {
    let mut reader = BinaryReader::new(vec![0xA5, 0x0F].into_boxed_slice());
    assert_eq!(reader.read_int(12), Some(0xA50));
    assert_eq!(reader.get_position(), 12);

    reader.reset();
    assert_eq!(reader.get_position(), 0);
    assert_eq!(reader.read_int(8), Some(0xA5));
    assert_eq!(reader.read_int(8), Some(0x0F));
}

#[test]
fn test_position_tracks_read_bits() {
    let mut reader = BinaryReader::new(vec![0x00, 0x00, 0x00].into_boxed_slice());
    assert_eq!(reader.get_position(), 0);
    reader.read_int(3);
    assert_eq!(reader.get_position(), 3);
    reader.read_int(13);
    assert_eq!(reader.get_position(), 16);
}

#[test]
fn test_mixed_width_round_trip() {
    let fields = [(0u64, 1), (1, 1), (256, 9), (65, 9), (0xface8201, 32), (5, 3)];

    let mut writer = BinaryWriterBuilder::new();
    for &(value, width) in fields.iter() {
        writer.push_bits(value, width);
    }

    let mut reader = BinaryReader::new(writer.build().os);
    for &(value, width) in fields.iter() {
        assert_eq!(reader.read_int(width), Some(value));
    }
}
