//! Size limits for inbound payloads.

/// Maximum raw payload size accepted before parsing (64KB).
///
/// A detection report is a few hundred bytes; the bound exists to
/// reject garbage from a misbehaving bridge before it allocates.
pub const MAX_REPORT_SIZE_BYTES: usize = 64 * 1024;
