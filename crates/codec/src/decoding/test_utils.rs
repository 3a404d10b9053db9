use alloy_primitives::U256;
use ovm_primitives::{DecodedBatch, SequencerBatchAppendedExtraData};
use serde::Deserialize;

/// A `SequencerBatchAppended` event along with its expected decoding.
#[derive(Debug, Deserialize)]
pub struct SequencerBatchAppendedFixture {
    /// The input of the decoder.
    pub input: FixtureInput,
    /// The expected output of the decoder.
    pub output: DecodedBatch,
}

/// The input of a [`SequencerBatchAppendedFixture`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureInput {
    /// The event.
    pub event: FixtureEvent,
    /// The extra data of the event.
    pub extra_data: SequencerBatchAppendedExtraData,
    /// The L2 chain id.
    pub l2_chain_id: u64,
}

/// The event of a [`FixtureInput`].
#[derive(Debug, Deserialize)]
pub struct FixtureEvent {
    /// The positional arguments of the event.
    pub args: Vec<U256>,
}

/// Read the JSON file provided at `path` as a [`SequencerBatchAppendedFixture`].
pub fn read_fixture<P: AsRef<std::path::Path>>(path: P) -> eyre::Result<SequencerBatchAppendedFixture> {
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}

/// Read all the JSON fixtures from the directory provided at `path`, sorted by file name.
pub fn read_fixtures<P: AsRef<std::path::Path>>(
    path: P,
) -> eyre::Result<Vec<SequencerBatchAppendedFixture>> {
    let mut paths = std::fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    paths.retain(|path| path.extension().is_some_and(|ext| ext == "json"));
    paths.sort();

    paths.into_iter().map(read_fixture).collect()
}
