//! Parallel duotone processing using Rayon.
//!
//! The transform is embarrassingly parallel: each pixel reads only its
//! own input channels plus the immutable op, and writes only its own
//! output location. Rows are fanned out with `par_chunks_mut` into
//! disjoint output slices, so the result is byte-identical to the
//! sequential path for any thread count.
//!
//! # Example
//!
//! ```rust
//! use duotone_core::DuotoneParams;
//! use duotone_ops::{parallel, Duotone};
//!
//! let src = vec![128u8; 64 * 64 * 4];
//! let op = Duotone::new(&DuotoneParams::default());
//! let dst = parallel::apply_duotone(&src, 64, 64, &op).unwrap();
//! assert_eq!(dst.len(), src.len());
//! ```

use duotone_core::{DuotoneParams, PixelBuffer};
use rayon::prelude::*;
use tracing::trace;

use crate::duotone::{validate_rgba, Duotone};
use crate::OpsResult;

/// Apply the duotone transform to a raw RGBA slice, row-parallel.
///
/// Same contract as [`crate::duotone::apply_duotone`]; only the
/// scheduling differs.
pub fn apply_duotone(src: &[u8], width: usize, height: usize, op: &Duotone) -> OpsResult<Vec<u8>> {
    validate_rgba(src, width, height)?;
    trace!(width, height, "parallel::apply_duotone");

    let stride = width * 4;
    let mut dst = vec![0u8; src.len()];

    dst.par_chunks_mut(stride)
        .zip(src.par_chunks(stride))
        .for_each(|(dst_row, src_row)| {
            for (out, px) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
                out.copy_from_slice(&op.apply([px[0], px[1], px[2], px[3]]));
            }
        });

    Ok(dst)
}

/// Apply the duotone transform to a [`PixelBuffer`], row-parallel.
///
/// Same contract as [`crate::duotone::transform`].
pub fn transform(input: &PixelBuffer, params: &DuotoneParams) -> OpsResult<PixelBuffer> {
    let op = Duotone::new(params);
    let out = apply_duotone(
        input.data(),
        input.width() as usize,
        input.height() as usize,
        &op,
    )?;
    Ok(PixelBuffer::from_raw(input.width(), input.height(), out)?)
}
