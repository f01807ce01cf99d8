use glam::Vec3;
use log::trace;

use crate::kernels::{ObjectId, ReprojectionChain};
use crate::{Buffer2D, Frame};

/// Moves previous frame's colors onto the current frame's pixel grid.
///
/// Each pixel of `out_colors` gets the color its surface had in
/// `prev_colors`, with `out_valid` telling whether such color exists - it
/// doesn't for background pixels, for pixels that were off-screen or hidden
/// behind another object, and for objects that didn't exist before.
/// Invalid pixels get a zero color.
pub fn reproject(
    frame: &Frame,
    prev_frame: &Frame,
    prev_colors: &Buffer2D<Vec3>,
    out_colors: &mut Buffer2D<Vec3>,
    out_valid: &mut Buffer2D<bool>,
) {
    let size = frame.size();

    assert_eq!(size, prev_frame.size());
    assert_eq!(size, prev_colors.size());
    assert_eq!(size, out_colors.size());
    assert_eq!(size, out_valid.size());

    // Objects are rigid, so the whole world -> previous-screen chain can be
    // computed once per object instead of once per pixel
    let chains: Vec<_> = frame
        .transforms()
        .objects
        .iter()
        .enumerate()
        .map(|(idx, &curr_model)| {
            let prev = prev_frame
                .transforms()
                .view_of(ObjectId::new(idx as i32))?;

            Some(ReprojectionChain::new(curr_model, &prev))
        })
        .collect();

    trace!(
        "Running reprojection; objects={}, reprojectable={}",
        chains.len(),
        chains.iter().flatten().count()
    );

    out_colors.par_fill_with(out_valid, |pos| {
        const INVALID: (Vec3, bool) = (Vec3::ZERO, false);

        let id = frame.id()[pos];

        let Some(chain) = id
            .index()
            .and_then(|idx| chains.get(idx))
            .copied()
            .flatten()
        else {
            return INVALID;
        };

        let Some(prev_pos) =
            chain.reproject(frame.position()[pos]).locate(size)
        else {
            return INVALID;
        };

        if prev_frame.id()[prev_pos] != id {
            return INVALID;
        }

        (prev_colors[prev_pos], true)
    });
}
