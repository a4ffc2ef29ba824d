//! Console compositor: logs each frame's quads instead of rendering them.

use arnote_hal::{Compositor, QuadCommand};
use core::convert::Infallible;

#[derive(Default)]
pub struct ConsoleCompositor {
    frame: u64,
    quads: usize,
}

impl Compositor for ConsoleCompositor {
    type Error = Infallible;

    fn begin_frame(&mut self) -> Result<(), Self::Error> {
        self.quads = 0;
        Ok(())
    }

    fn draw_quad(&mut self, quad: &QuadCommand) -> Result<(), Self::Error> {
        self.quads += 1;
        let first_line = quad.text.lines().next().unwrap_or("");
        log::debug!(
            "  quad {} at {:?}: {:?}",
            self.quads,
            quad.corners[0],
            first_line
        );
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        log::info!("frame {}: {} quad(s)", self.frame, self.quads);
        self.frame += 1;
        Ok(())
    }
}
