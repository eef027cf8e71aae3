use pds_core::derive_substream_seed;

/// Derives the deterministic seed for one sampler in a batch.
///
/// Callers running several independent samplers from one master seed should
/// give each its own index so the streams never overlap.
pub fn sampler_seed(master_seed: u64, sampler_index: usize) -> u64 {
    derive_substream_seed(master_seed, sampler_index as u64)
}
