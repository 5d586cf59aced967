use crate::segments::Frame;
use crate::sync::BusWrite;

/// Desired state of output peripherals.
///
/// This structure transfers request to the firmware, asking to draw on the
/// display and to push registers to the tone-control chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    pub display: Frame,
    pub bus_write: Option<BusWrite>,
}
