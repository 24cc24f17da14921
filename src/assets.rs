pub(crate) mod shard;
