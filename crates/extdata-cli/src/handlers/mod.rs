//! One handler per adapter. Each handler declares its field coercions,
//! makes exactly one gateway call, and shapes the records into the
//! adapter's payload. Parsing and response writing live in the pipeline.

pub mod blob_sizes;
pub mod cloudtrail_events;
pub mod iam_users;
pub mod laps_password;
pub mod presign_url;
pub mod vm_list;
