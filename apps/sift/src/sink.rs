use std::{fs, path::Path};

use sift_rank::RankedOutput;

/// Persists the result record as pretty-printed JSON named by a prefix
/// of its own content hash, so identical results get identical names.
/// A sink failure is logged and the record is emitted to stdout instead;
/// the computed result is never lost.
pub fn write_output(dir: &Path, output: &RankedOutput) {
	let serialized = match serde_json::to_string_pretty(output) {
		Ok(serialized) => serialized,
		Err(err) => {
			tracing::error!(error = %err, "Failed to serialize result record.");

			return;
		},
	};
	let digest = blake3::hash(serialized.as_bytes()).to_hex();
	let path = dir.join(format!("output_{}.json", &digest.as_str()[..6]));

	if let Err(err) = fs::create_dir_all(dir).and_then(|()| fs::write(&path, &serialized)) {
		tracing::error!(error = %err, path = %path.display(), "Failed to write result record; emitting to stdout.");
		println!("{serialized}");

		return;
	}

	tracing::info!(path = %path.display(), "Result record written.");
}
