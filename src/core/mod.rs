pub mod aggregate;
pub mod normalizer;
pub mod pairing;
pub mod pipeline;

pub use aggregate::{BucketBy, summarize_monthly};
pub use normalizer::{RowSchema, canonical_plate, normalize_rows};
pub use pairing::{DuplicateEntryPolicy, is_hazard_plate, pair_plate};
pub use pipeline::{PipelineOptions, PipelineOutput, run_pipeline};
