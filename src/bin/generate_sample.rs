//! Writes a small survey-style sample table for trying the converter:
//! `cargo run --bin generate_sample && cargo run -- sample_tones.csv`

use munsell_tone::ToneTable;

fn main() {
    let output_path = "sample_tones.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record(["遺構番号", "層位", "色調"])
        .expect("Failed to write headers");

    // One row per built-in descriptor, then a few awkward ones: a composite
    // label with a variant suffix and labels with no table entry.
    let tones = ToneTable::builtin();
    let extras = ["灰白～淡", "暗灰褐～茶褐", "にぶい黄", "不明"];
    let labels = tones.iter().map(|(name, _)| name).chain(extras);

    let mut rows = 0;
    for (i, label) in labels.enumerate() {
        let feature = format!("SK{:02}", i + 1);
        let stratum = (i % 3 + 1).to_string();
        writer
            .write_record([feature.as_str(), stratum.as_str(), label])
            .expect("Failed to write row");
        rows += 1;
    }
    writer.flush().expect("Failed to flush output file");

    println!("Wrote {rows} rows to {output_path}");
}
